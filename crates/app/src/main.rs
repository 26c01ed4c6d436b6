use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use ledger::{RawTransaction, StatementSummary};
use settings::{OutputFormat, Settings};

mod error;
mod render;
mod settings;

use crate::error::Result;

fn main() -> Result<()> {
    let settings = Settings::load()?;

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(format!(
            "ledger_statement={level},ledger={level}",
            level = settings.config.level
        ))
        .init();

    let today = chrono::Local::now().date_naive();
    let view = settings.filter(today)?;

    let input = std::fs::read_to_string(&settings.args.input)?;
    let raw: Vec<RawTransaction> = serde_json::from_str(&input)?;
    tracing::info!(
        "loaded {} raw rows from {}",
        raw.len(),
        settings.args.input.display()
    );

    let rows = ledger::statement(&raw, &view, &settings.config.opening_label);
    let summary = StatementSummary::from_transactions(&rows);
    tracing::info!("statement has {} rows", rows.len());

    let mut out: Box<dyn Write> = match settings.output_path(&raw, today) {
        Some(path) => {
            tracing::info!("writing statement to {}", path.display());
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match settings.config.format {
        OutputFormat::Table => {
            render::write_table(&mut out, &rows)?;
            if settings.args.summary {
                render::write_summary(&mut out, &summary)?;
            }
        }
        OutputFormat::Csv => ledger::write_statement_csv(&mut out, &rows)?,
        OutputFormat::Json => {
            let statement = render::JsonStatement {
                transactions: &rows,
                summary: &summary,
            };
            serde_json::to_writer_pretty(&mut out, &statement)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}
