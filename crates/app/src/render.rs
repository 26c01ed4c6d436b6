use std::io::{self, Write};

use ledger::{StatementSummary, UnifiedTransaction};
use serde::Serialize;

/// Plain text table, one row per transaction in the given order.
pub fn write_table<W: Write>(out: &mut W, rows: &[UnifiedTransaction]) -> io::Result<()> {
    writeln!(
        out,
        "{:<10}  {:<9}  {:<28}  {:>14}  {:<10}  {:>14}",
        "Tarih", "Tip", "Açıklama", "Tutar", "Durum", "Bakiye"
    )?;
    for tx in rows {
        let date = tx
            .date
            .map(|d| d.format("%d.%m.%Y").to_string())
            .unwrap_or_else(|| "-".to_string());
        let (kind, amount) = if tx.is_opening_balance() {
            ("", String::new())
        } else {
            (tx.kind.label(), tx.signed_amount().to_tr_string())
        };
        writeln!(
            out,
            "{:<10}  {:<9}  {:<28}  {:>14}  {:<10}  {:>14}",
            date,
            kind,
            truncate(tx.description.as_deref().unwrap_or_default(), 28),
            amount,
            tx.status.label(),
            tx.balance_after.unwrap_or_default().to_tr_string(),
        )?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, summary: &StatementSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Toplam Hakediş:   {:>14}", summary.total_earned.to_tr_string())?;
    writeln!(out, "Toplam Ödenen:    {:>14}", summary.total_paid.to_tr_string())?;
    writeln!(out, "Toplam Kesinti:   {:>14}", summary.total_deductions.to_tr_string())?;
    writeln!(out, "Bekleyen:         {:>14}", summary.pending.to_tr_string())?;
    writeln!(out, "Net Bakiye:       {:>14}", summary.net_balance.to_tr_string())?;
    if let Some(balance) = summary.closing_balance {
        writeln!(out, "Güncel Bakiye:    {:>14}", balance.to_tr_string())?;
    }
    if let Some(date) = summary.last_payment {
        writeln!(out, "Son Ödeme:        {:>14}", date.format("%d.%m.%Y"))?;
    }
    Ok(())
}

#[derive(Serialize)]
pub struct JsonStatement<'a> {
    pub transactions: &'a [UnifiedTransaction],
    pub summary: &'a StatementSummary,
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ledger::{Money, TransactionType, compute_balances};

    use super::*;

    #[test]
    fn table_lists_rows_with_balances() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).and_then(|d| d.and_hms_opt(0, 0, 0));
        let all = vec![UnifiedTransaction::new(
            "salary-e1",
            date,
            TransactionType::Accrual,
            Money::new(500_000),
        )];
        let rows = compute_balances(&all, &all);

        let mut out = Vec::new();
        write_table(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("31.01.2024  Tahakkuk"));
        assert!(lines[1].trim_end().ends_with("5.000,00"));
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Maaş", 28), "Maaş");
        assert_eq!(truncate("abcdef", 4), "abc…");
    }
}
