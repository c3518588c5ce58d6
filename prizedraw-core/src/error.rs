use thiserror::Error;

pub type Result<T> = std::result::Result<T, DrawError>;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("Malformed participant record #{record}: missing field '{field}'")]
    MalformedRecord { record: usize, field: &'static str },

    #[error("Draw sequence exhausted")]
    SequenceExhausted,

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("No log file found.")]
    LogUnavailable,

    #[error("Insufficient pool: need {need} participants, have {available}")]
    InsufficientPool { need: usize, available: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DrawError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn malformed(record: usize, field: &'static str) -> Self {
        Self::MalformedRecord { record, field }
    }
}
