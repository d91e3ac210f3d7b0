use chanmap_client::ClientError;
use chanmap_interchange::InterchangeError;
use thiserror::Error;

/// Failures that end a workflow run.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Backend(#[from] ClientError),
    #[error(transparent)]
    Interchange(#[from] InterchangeError),
    #[error("terminal interaction failed: {0}")]
    Shell(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WorkflowError>;
