use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unsupported test type: {0}")]
    UnsupportedTestType(String),

    #[error("unknown factor: {0}")]
    UnknownFactor(String),

    #[error("unknown code: {0}")]
    UnknownCode(String),
}
