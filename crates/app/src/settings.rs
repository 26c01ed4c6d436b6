//! Settings for the statement tool.
//!
//! Sources, lowest priority first: the TOML file (`config/ledger.toml` or
//! `--config`), `LEDGER_*` environment variables, command line flags.
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use ledger::{Period, RawTransaction, TransactionFilter, TypeFilter};
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/ledger";
const FALLBACK_EMPLOYEE_ID: &str = "personel";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub level: String,
    pub opening_label: String,
    pub format: OutputFormat,
    pub period: Option<Period>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            opening_label: ledger::OPENING_BALANCE_LABEL.to_string(),
            format: OutputFormat::Table,
            period: None,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "ledger_statement")]
#[command(about = "Employee salary statement with running balances")]
pub struct Args {
    /// JSON file holding an array of raw rows.
    pub input: PathBuf,
    /// Optional config file path (TOML).
    #[arg(long)]
    pub config: Option<String>,
    /// Transaction type to keep (`all`, `tahakkuk`, `odeme`, ...).
    #[arg(long = "type", default_value = "all")]
    pub kind: String,
    /// First day shown (YYYY-MM-DD, inclusive).
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Last day shown (YYYY-MM-DD, inclusive).
    #[arg(long)]
    pub to: Option<NaiveDate>,
    /// Relative window (`last_month`, `last_3_months`, `last_6_months`,
    /// `last_year`, `all`). Ignored when `--from`/`--to` are given.
    #[arg(long)]
    pub period: Option<String>,
    /// Keep rows whose description contains this text.
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Write to this file instead of stdout. CSV output defaults to
    /// `maas-ekstresi-<employee>-<date>.csv`.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Print statement totals after the rows (table format only).
    #[arg(long)]
    pub summary: bool,
    /// Override log level.
    #[arg(long)]
    pub level: Option<String>,
}

pub struct Settings {
    pub config: AppConfig,
    pub args: Args,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    fn from_args(args: Args) -> Result<Self> {
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut builder = config::Config::builder();
        builder = builder.add_source(config::File::with_name(config_path).required(args.config.is_some()));
        builder = builder.add_source(config::Environment::with_prefix("LEDGER"));
        let mut config: AppConfig = builder.build()?.try_deserialize()?;

        if let Some(format) = args.format {
            config.format = format;
        }
        if let Some(level) = &args.level {
            config.level = level.clone();
        }

        Ok(Self { config, args })
    }

    /// Builds the statement view from flags and configured defaults.
    pub fn filter(&self, today: NaiveDate) -> Result<TransactionFilter> {
        let mut filter = TransactionFilter {
            kind: TypeFilter::try_from(self.args.kind.as_str())?,
            search: self.args.search.clone(),
            ..Default::default()
        };

        if self.args.from.is_some() || self.args.to.is_some() {
            filter.from = self.args.from;
            filter.to = self.args.to;
        } else {
            let period = match self.args.period.as_deref() {
                Some(raw) => Some(Period::try_from(raw)?),
                None => self.config.period,
            };
            if let Some(period) = period {
                filter = filter.with_period(period, today);
            }
        }

        filter
            .validate()
            .map_err(|err| AppError::Argument(err.to_string()))?;
        Ok(filter)
    }

    /// Where the statement goes; `None` means stdout.
    pub fn output_path(&self, raw: &[RawTransaction], today: NaiveDate) -> Option<PathBuf> {
        if let Some(path) = &self.args.output {
            return Some(path.clone());
        }
        if self.config.format != OutputFormat::Csv {
            return None;
        }
        let employee_id = raw
            .iter()
            .find_map(|row| match row {
                RawTransaction::Employee(salary) => salary.employee_id.as_deref(),
                _ => None,
            })
            .unwrap_or(FALLBACK_EMPLOYEE_ID);
        Some(PathBuf::from(ledger::statement_file_name(employee_id, today)))
    }
}
