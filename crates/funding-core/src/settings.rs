use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::currency::{CurrencyConverter, DEFAULT_USD_TO_INR};
use crate::error::{FundingError, Result};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Interactive dashboard for Indian startup funding data
#[derive(Parser, Debug, Clone)]
#[command(
    name = "funding-dashboard",
    about = "Interactive dashboard for Indian startup funding data",
    version
)]
pub struct Settings {
    /// Path to the funding CSV file
    #[arg(long, default_value = "startup_funding.csv", env = "FUNDING_DATA")]
    pub data: PathBuf,

    /// Initial view
    #[arg(long, default_value = "overall", value_parser = ["overall", "startup", "investor"])]
    pub view: String,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "classic", "auto"])]
    pub theme: String,

    /// Rupees per US dollar used when converting amounts
    #[arg(long, default_value_t = DEFAULT_USD_TO_INR)]
    pub usd_inr_rate: f64,

    /// How an investor name is matched against the investors field
    #[arg(long, default_value = "substring", value_parser = ["substring", "exact"])]
    pub investor_match: String,

    /// How the biggest-investments ranking is built
    #[arg(long, default_value = "grouped", value_parser = ["grouped", "sorted"])]
    pub ranking: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and validate them.
    pub fn load() -> Result<Self> {
        Self::load_from_args(std::env::args_os().collect())
    }

    /// Same as [`Settings::load`] but with an explicit argument list, so tests
    /// can drive it without spawning processes.
    pub fn load_from_args(args: Vec<OsString>) -> Result<Self> {
        let settings = Settings::parse_from(args);
        settings.resolve()
    }

    /// Apply `--debug` and reject values clap cannot range-check.
    fn resolve(mut self) -> Result<Self> {
        if !self.usd_inr_rate.is_finite() || self.usd_inr_rate <= 0.0 {
            return Err(FundingError::Config(format!(
                "--usd-inr-rate must be a positive number, got {}",
                self.usd_inr_rate
            )));
        }

        // --debug overrides log level.
        if self.debug {
            self.log_level = "DEBUG".to_string();
        }

        Ok(self)
    }

    /// Currency converter built from `--usd-inr-rate`.
    pub fn converter(&self) -> CurrencyConverter {
        CurrencyConverter::with_rate(self.usd_inr_rate)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
