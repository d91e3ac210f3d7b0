use anyhow::{Context, Result};
use tracing::info;

use chanmap_cli::config::AppConfig;
use chanmap_cli::terminal::TerminalShell;
use chanmap_client::JellyfinClient;
use chanmap_core::{ExportOutcome, ExportReport, ImportOutcome, ImportReport};

/// Run the import workflow against the configured server.
///
/// Returns `None` when the operator cancelled.
pub fn run_import(config: &AppConfig) -> Result<Option<ImportReport>> {
    let client = JellyfinClient::new(&config.client).context("create Jellyfin client")?;
    let mut shell = TerminalShell::stdio();
    let outcome = chanmap_core::run_import(&client, &mut shell, &config.import)
        .context("import channel mappings")?;
    Ok(match outcome {
        ImportOutcome::Written(report) => Some(report),
        ImportOutcome::Cancelled => {
            info!("import cancelled");
            None
        }
    })
}

/// Run the export workflow against the configured server.
///
/// Returns `None` when the operator cancelled.
pub fn run_export(config: &AppConfig) -> Result<Option<ExportReport>> {
    let client = JellyfinClient::new(&config.client).context("create Jellyfin client")?;
    let mut shell = TerminalShell::stdio();
    let outcome = chanmap_core::run_export(&client, &mut shell, &config.export)
        .context("export channel mappings")?;
    Ok(match outcome {
        ExportOutcome::Applied(report) => Some(report),
        ExportOutcome::Cancelled => {
            info!("export cancelled");
            None
        }
    })
}
