use super::error::BrokerError;
use crate::engine::error::HandleError;
use crate::engine::handle::EngineHandle;
use tracing::debug;

/// Constructs a fresh, private [`EngineHandle`] for one scoped session.
///
/// Teardown of the handle is its `Drop` implementation; the runner drops it
/// on every exit path.
pub trait EngineFactory: Send + Sync {
    type Handle: EngineHandle;

    fn create(&self) -> Result<Self::Handle, HandleError>;
}

/// Per-call alternative to [`ExclusiveSessionBroker`]: every session gets
/// its own short-lived engine instance, so no cross-caller lock, timeout, or
/// forced recovery exists at all.
///
/// The trade-off is that tearing down a native engine instance can crash
/// the hosting process outright on improper shutdown sequencing, which no
/// in-process logic can catch. Deployments choosing this runner should
/// isolate each session in its own worker process under an external restart
/// policy. A deployment composes exactly one of this runner or the broker,
/// never both over the same engine.
///
/// [`ExclusiveSessionBroker`]: super::broker::ExclusiveSessionBroker
pub struct PooledSessionRunner<F: EngineFactory> {
    factory: F,
}

impl<F: EngineFactory> PooledSessionRunner<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Creates a fresh handle, runs `work` against it, and tears the handle
    /// down on scope exit, success or failure. A creation failure surfaces
    /// as [`BrokerError::HandleCorrupted`]; a work failure reaches the
    /// caller verbatim.
    pub fn run_scoped<T, E, W>(&self, work: W) -> Result<T, BrokerError<E>>
    where
        W: FnOnce(&F::Handle) -> Result<T, E>,
        E: std::error::Error + 'static,
    {
        let handle = self.factory.create()?;
        debug!("scoped engine session created");

        let outcome = work(&handle);
        drop(handle);
        debug!("scoped engine session torn down");

        outcome.map_err(|source| BrokerError::WorkFailed { source })
    }
}
