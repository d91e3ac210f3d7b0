//! Export workflow: reviewed proposal file in, mapping writes out.

use std::path::PathBuf;
use std::thread;

use chanmap_client::{ClientError, LiveTvBackend};
use chanmap_interchange::MappingReader;
use chanmap_model::SetChannelMapping;
use tracing::{debug, info, info_span, warn};

use crate::error::Result;
use crate::options::ExportOptions;
use crate::select::choose_provider;
use crate::shell::{ProgressUpdate, Shell};

const FILE_TITLE: &str = "Mapping file";

#[derive(Debug)]
pub enum RowOutcome {
    Applied,
    /// The server rejected the row or could not be reached. Later rows are
    /// still attempted.
    Failed { error: ClientError },
}

/// Result of sending one file row to the server.
#[derive(Debug)]
pub struct RowReport {
    /// 1-based line number in the mapping file.
    pub line: u64,
    pub tuner_channel_id: String,
    pub provider_channel_id: String,
    pub outcome: RowOutcome,
}

impl RowReport {
    pub fn is_applied(&self) -> bool {
        matches!(self.outcome, RowOutcome::Applied)
    }
}

#[derive(Debug)]
pub struct ExportReport {
    pub provider_id: String,
    pub mapping_path: PathBuf,
    /// Rows in file order.
    pub rows: Vec<RowReport>,
}

impl ExportReport {
    pub fn applied(&self) -> usize {
        self.rows.iter().filter(|row| row.is_applied()).count()
    }

    pub fn failed(&self) -> usize {
        self.rows.len() - self.applied()
    }

    pub fn failures(&self) -> impl Iterator<Item = &RowReport> {
        self.rows.iter().filter(|row| !row.is_applied())
    }
}

#[derive(Debug)]
pub enum ExportOutcome {
    /// The operator backed out before any request was sent.
    Cancelled,
    Applied(ExportReport),
}

/// Run the export workflow.
///
/// Every data row of the chosen file becomes one mapping request, sent in
/// file order with [`ExportOptions::row_delay`] between requests. A rejected
/// row is recorded and the run continues; a malformed file ends the run at
/// the offending row.
pub fn run_export<B, S>(backend: &B, shell: &mut S, options: &ExportOptions) -> Result<ExportOutcome>
where
    B: LiveTvBackend + ?Sized,
    S: Shell + ?Sized,
{
    let span = info_span!("export");
    let _guard = span.enter();

    let Some(provider_id) =
        choose_provider(backend, shell, "Which EPG guide do you want to apply mappings to?")?
    else {
        return Ok(ExportOutcome::Cancelled);
    };

    let Some(file_name) = shell
        .request_text(FILE_TITLE, "Mapping CSV file to apply:")?
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
    else {
        info!("export cancelled at file name prompt");
        return Ok(ExportOutcome::Cancelled);
    };
    let mapping_path = options.input_dir.join(file_name);
    let reader = MappingReader::open(&mapping_path)?;
    info!(path = %mapping_path.display(), "applying mapping file");

    let mut rows = Vec::new();
    for row in reader {
        let row = row?;
        let request = SetChannelMapping::new(
            &provider_id,
            row.tuner_channel_id(),
            row.provider_channel_id(),
        );
        let outcome = match backend.set_channel_mapping(&request) {
            Ok(()) => {
                debug!(line = row.line, tuner = %request.tuner_channel_id, "mapping applied");
                RowOutcome::Applied
            }
            Err(error) => {
                warn!(
                    line = row.line,
                    tuner = %request.tuner_channel_id,
                    provider_channel = %request.provider_channel_id,
                    "mapping rejected: {}",
                    error.summary()
                );
                RowOutcome::Failed { error }
            }
        };
        rows.push(RowReport {
            line: row.line,
            tuner_channel_id: request.tuner_channel_id,
            provider_channel_id: request.provider_channel_id,
            outcome,
        });

        shell.show_progress(ProgressUpdate::Advanced {
            processed: rows.len(),
        })?;
        thread::sleep(options.row_delay);
    }
    shell.show_progress(ProgressUpdate::Finished {
        processed: rows.len(),
    })?;

    let report = ExportReport {
        provider_id,
        mapping_path,
        rows,
    };
    info!(
        applied = report.applied(),
        failed = report.failed(),
        "export complete"
    );
    Ok(ExportOutcome::Applied(report))
}
