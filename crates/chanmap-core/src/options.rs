//! Settings for the import and export workflows.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use chanmap_match::DEFAULT_THRESHOLD;

/// Only tuner channels whose name contains this substring are matched.
pub const DEFAULT_NAME_FILTER: &str = "ES";

/// Pause after every export row so the server is not flooded with writes.
pub const ROW_DELAY: Duration = Duration::from_millis(100);

/// What the import writes into the `ProviderChannelId` column.
///
/// The established file format carries the matched provider channel *name*
/// in that column and export sends it to the server as the id. Servers whose
/// provider channel ids differ from the names need [`LineupId`](Self::LineupId).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderIdSource {
    /// Write the matched provider channel name.
    #[default]
    MatchedName,
    /// Write the id of the matched provider channel from the lineup.
    LineupId,
}

impl ProviderIdSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MatchedName => "name",
            Self::LineupId => "id",
        }
    }
}

impl fmt::Display for ProviderIdSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProviderIdSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" | "matched-name" => Ok(Self::MatchedName),
            "id" | "lineup-id" => Ok(Self::LineupId),
            other => Err(format!("expected `name` or `id`, got `{other}`")),
        }
    }
}

/// Options for [`run_import`](crate::run_import).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    /// Case-sensitive substring a tuner channel name must contain to be matched.
    /// An empty filter matches every channel.
    pub name_filter: String,
    /// Matches must score strictly above this (0-100).
    pub threshold: u8,
    pub provider_id_source: ProviderIdSource,
    /// Directory both output files are written to. Absolute file names given
    /// by the operator are used as-is.
    pub output_dir: PathBuf,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            name_filter: DEFAULT_NAME_FILTER.to_string(),
            threshold: DEFAULT_THRESHOLD,
            provider_id_source: ProviderIdSource::default(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name_filter(mut self, filter: impl Into<String>) -> Self {
        self.name_filter = filter.into();
        self
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_provider_id_source(mut self, source: ProviderIdSource) -> Self {
        self.provider_id_source = source;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

/// Options for [`run_export`](crate::run_export).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Pause after each row.
    pub row_delay: Duration,
    /// Directory relative mapping file names are resolved against.
    pub input_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            row_delay: ROW_DELAY,
            input_dir: PathBuf::from("."),
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }
}
