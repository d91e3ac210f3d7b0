//! Channel mapping workflows.
//!
//! # Workflows
//!
//! - [`run_import`]: fetch live channel lists, fuzzy-match tuner channels to
//!   provider channels and write a proposal file for review.
//! - [`run_export`]: apply a reviewed proposal file to the server, one row at
//!   a time.
//!
//! Both take the server as a [`LiveTvBackend`] and the operator as a
//! [`Shell`], so they run unchanged against a terminal or a test double.

#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod import;
pub mod options;
pub mod shell;

mod select;

pub use chanmap_client::LiveTvBackend;
pub use error::WorkflowError;
pub use export::{ExportOutcome, ExportReport, RowOutcome, RowReport, run_export};
pub use import::{ImportOutcome, ImportReport, propose_mappings, propose_mappings_with, run_import};
pub use options::{
    DEFAULT_NAME_FILTER, ExportOptions, ImportOptions, ProviderIdSource, ROW_DELAY,
};
pub use shell::{Choice, ProgressUpdate, Shell};
