use super::error::HandleError;

/// Capability seam over a native visualization engine instance.
///
/// The session layer requires exactly two things from an engine binding: a
/// way to clear it back to baseline and a way to run one operation against
/// the live instance. Receivers are `&self` because native bindings are
/// typically call-level thread-safe behind their own synchronization;
/// *sessions* are not, and serializing them is the broker's job, not the
/// handle's. Implementations must not add concurrency control of their own.
pub trait EngineHandle: Send + Sync {
    /// Removes all loaded objects, returning the engine to its baseline
    /// state. Must be idempotent: calling it on an already-empty engine
    /// succeeds. If the underlying engine is unresponsive or corrupted the
    /// failure is reported, never swallowed.
    fn reset(&self) -> Result<(), HandleError>;

    /// Runs `operation` with synchronous access to the live engine,
    /// returning its result or propagating its failure unchanged.
    fn execute<T, F>(&self, operation: F) -> Result<T, HandleError>
    where
        Self: Sized,
        F: FnOnce(&Self) -> Result<T, HandleError>,
    {
        operation(self)
    }
}
