use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandleError {
    #[error("Engine did not respond to a baseline reset: {0}")]
    Unresponsive(String),

    #[error("Native engine call failed: {0}")]
    Native(String),
}
