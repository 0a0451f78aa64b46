use super::config::BrokerConfig;
use super::error::BrokerError;
use super::status::{SessionStatus, StatusBoard};
use super::token::ExclusivityToken;
use crate::engine::error::HandleError;
use crate::engine::handle::EngineHandle;
use parking_lot::Mutex;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Serializes concurrent callers' access to one shared [`EngineHandle`].
///
/// The broker is the only serialization point for the handle: at most one
/// work unit is inside the engine at a time, the engine is reset to baseline
/// both before and after every work unit, and the exclusivity primitive is
/// released on every exit path. Waiters are not served in any particular
/// order; work units must be self-contained and order-independent.
pub struct ExclusiveSessionBroker<H: EngineHandle> {
    handle: H,
    session: Mutex<()>,
    status: StatusBoard,
    config: BrokerConfig,
}

impl<H: EngineHandle> ExclusiveSessionBroker<H> {
    pub fn new(handle: H) -> Self {
        Self::with_config(handle, BrokerConfig::default())
    }

    pub fn with_config(handle: H, config: BrokerConfig) -> Self {
        Self {
            handle,
            session: Mutex::new(()),
            status: StatusBoard::new(),
            config,
        }
    }

    /// Read-only view of the broker's current phase, for diagnostics.
    pub fn status(&self) -> SessionStatus {
        self.status.current()
    }

    /// Runs `work` against the engine handle under exclusive access, using
    /// the configured acquisition timeout.
    pub fn run_exclusive<T, E, F>(&self, work: F) -> Result<T, BrokerError<E>>
    where
        F: FnOnce(&H) -> Result<T, E>,
        E: std::error::Error + 'static,
    {
        self.run_exclusive_with_timeout(work, self.config.acquire_timeout)
    }

    /// Runs `work` against the engine handle under exclusive access.
    ///
    /// Waits up to `acquire_timeout` for the exclusivity primitive. If the
    /// wait times out, the previous holder is presumed stuck: the handle is
    /// force-reset outside lock discipline and the acquisition retried
    /// without a bound. The presumption that a timed-out holder is dead
    /// rather than mid-mutation is a heuristic carried over from the system
    /// this design serves; the event is logged loudly because it signals a
    /// leaked session in some caller.
    ///
    /// Once exclusivity is held the handle is reset, `work` runs, and the
    /// handle is reset again before the primitive is released, regardless of
    /// whether `work` succeeded. A failure from `work` reaches the caller
    /// verbatim as [`BrokerError::WorkFailed`], after cleanup has completed.
    /// A reset failure surfaces as [`BrokerError::HandleCorrupted`]. The
    /// timeout itself is never the final outcome of a call.
    #[instrument(skip_all, name = "exclusive_session")]
    pub fn run_exclusive_with_timeout<T, E, F>(
        &self,
        work: F,
        acquire_timeout: Duration,
    ) -> Result<T, BrokerError<E>>
    where
        F: FnOnce(&H) -> Result<T, E>,
        E: std::error::Error + 'static,
    {
        let mut token = self.acquire(acquire_timeout)?;

        // The holder before the current one may have cleaned up imperfectly.
        if let Err(err) = self.handle.reset() {
            token.release();
            return Err(BrokerError::HandleCorrupted { source: err });
        }
        self.status.set_working();
        debug!("exclusivity held; work unit starting");

        let outcome = work(&self.handle);

        // Cleanup runs on every outcome of the work unit, before any
        // failure is allowed to leave this function.
        let cleanup = self.handle.reset();
        token.release();
        self.status.set_idle();

        match (outcome, cleanup) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(err)) => Err(BrokerError::HandleCorrupted { source: err }),
            (Err(err), Ok(())) => Err(BrokerError::WorkFailed { source: err }),
            (Err(err), Err(reset_err)) => {
                warn!("post-session reset failed while a work failure was propagating: {reset_err}");
                Err(BrokerError::WorkFailed { source: err })
            }
        }
    }

    fn acquire(&self, acquire_timeout: Duration) -> Result<ExclusivityToken<'_>, HandleError> {
        if let Some(guard) = self.session.try_lock_for(acquire_timeout) {
            return Ok(ExclusivityToken::new(guard));
        }

        warn!(
            timeout_secs = acquire_timeout.as_secs_f64(),
            "waited over the acquire timeout; presuming the holder is stuck and force-resetting the engine"
        );
        // Deliberate breach of lock discipline: the one place a reset runs
        // without holding the primitive. Safe only under the presumption
        // that the stuck holder is dead, not actively using the handle.
        self.handle.reset()?;
        Ok(ExclusivityToken::new(self.session.lock()))
    }
}
