mod bootstrap;

use anyhow::{Context, Result};
use funding_core::settings::Settings;
use funding_data::analysis::load_dataset;
use funding_data::reports::{InvestorMatch, RankingMode};
use funding_ui::app::{App, AppConfig, ViewMode};

fn main() -> Result<()> {
    let settings = Settings::load()?;

    let app_dir = bootstrap::ensure_directories()?;
    let log_file = settings
        .log_file
        .clone()
        .unwrap_or_else(|| bootstrap::default_log_file(&app_dir));
    bootstrap::setup_logging(&settings.log_level, &log_file)?;

    tracing::info!("Funding Dashboard v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "View: {}, Theme: {}, USD/INR: {}, Investor match: {}, Ranking: {}",
        settings.view,
        settings.theme,
        settings.usd_inr_rate,
        settings.investor_match,
        settings.ranking
    );

    let (table, metadata) = load_dataset(&settings.data, settings.converter())
        .with_context(|| format!("loading funding data from {}", settings.data.display()))?;

    let dataset_label = settings
        .data
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| settings.data.display().to_string());

    let config = AppConfig {
        theme_name: settings.theme.clone(),
        view_mode: ViewMode::from_name(&settings.view).unwrap_or(ViewMode::Overall),
        investor_match: InvestorMatch::from_name(&settings.investor_match).unwrap_or_default(),
        ranking: RankingMode::from_name(&settings.ranking).unwrap_or_default(),
        dataset_label,
        summary: metadata.summary(),
    };

    App::new(&table, config).run()?;

    tracing::info!("Funding Dashboard exiting");
    Ok(())
}
