//! CSV export of a statement view.

use std::io;

use chrono::NaiveDate;
use csv::Writer;
use serde::Serialize;

use crate::{ResultLedger, UnifiedTransaction};

#[derive(Serialize)]
struct StatementRow<'a> {
    #[serde(rename = "Tarih")]
    date: String,
    #[serde(rename = "İşlem Tipi")]
    kind: &'a str,
    #[serde(rename = "Açıklama")]
    description: &'a str,
    #[serde(rename = "Tutar")]
    amount: String,
    #[serde(rename = "Durum")]
    status: &'a str,
    #[serde(rename = "Bakiye")]
    balance: String,
    #[serde(rename = "Ödeme Yöntemi")]
    payment_method: &'a str,
    #[serde(rename = "Referans")]
    reference: &'a str,
}

impl<'a> From<&'a UnifiedTransaction> for StatementRow<'a> {
    fn from(tx: &'a UnifiedTransaction) -> Self {
        Self {
            date: tx
                .date
                .map(|d| d.format("%d.%m.%Y").to_string())
                .unwrap_or_default(),
            kind: if tx.is_opening_balance() {
                ""
            } else {
                tx.kind.label()
            },
            description: tx.description.as_deref().unwrap_or_default(),
            amount: tx.signed_amount().to_tr_string(),
            status: tx.status.label(),
            balance: tx.balance_after.unwrap_or_default().to_tr_string(),
            payment_method: tx.payment_method.as_deref().unwrap_or_default(),
            reference: tx.reference.as_deref().unwrap_or_default(),
        }
    }
}

/// Writes `transactions` as a CSV statement, in the order given.
pub fn write_statement_csv<W: io::Write>(
    writer: W,
    transactions: &[UnifiedTransaction],
) -> ResultLedger<()> {
    let mut writer = Writer::from_writer(writer);
    for tx in transactions {
        writer.serialize(StatementRow::from(tx))?;
    }
    if transactions.is_empty() {
        writer.write_record(HEADERS)?;
    }
    writer.flush()?;
    Ok(())
}

const HEADERS: [&str; 8] = [
    "Tarih",
    "İşlem Tipi",
    "Açıklama",
    "Tutar",
    "Durum",
    "Bakiye",
    "Ödeme Yöntemi",
    "Referans",
];

/// File name for a downloaded statement.
pub fn statement_file_name(employee_id: &str, today: NaiveDate) -> String {
    format!("maas-ekstresi-{employee_id}-{}.csv", today.format("%Y-%m-%d"))
}
