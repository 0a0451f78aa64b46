use crate::engine::error::HandleError;
use thiserror::Error;

/// Failure modes of one brokered session, generic over the work unit's own
/// error type so that a work failure reaches the caller verbatim.
///
/// An acquisition timeout is deliberately absent: it is an internal signal
/// that triggers forced recovery, never the final outcome of a call.
#[derive(Debug, Error)]
pub enum BrokerError<E>
where
    E: std::error::Error + 'static,
{
    #[error("Engine handle corrupted during baseline reset: {source}")]
    HandleCorrupted {
        #[from]
        source: HandleError,
    },

    #[error("Session work failed: {source}")]
    WorkFailed {
        #[source]
        source: E,
    },
}
