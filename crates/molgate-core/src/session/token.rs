use parking_lot::MutexGuard;
use tracing::warn;

/// Ownership of the broker's exclusivity primitive.
///
/// At most one token is outstanding at any instant; the mutex itself
/// enforces that. Dropping the token releases the primitive, so every exit
/// path out of a session (including a panic unwind) gives it back. An
/// explicit [`release`](Self::release) after the guard is already gone is
/// detected and logged as a warning, not treated as a fault.
pub struct ExclusivityToken<'a> {
    guard: Option<MutexGuard<'a, ()>>,
}

impl<'a> ExclusivityToken<'a> {
    pub(crate) fn new(guard: MutexGuard<'a, ()>) -> Self {
        Self { guard: Some(guard) }
    }

    /// Releases the exclusivity primitive. Idempotent-safe: a double
    /// release is a no-op that logs a warning.
    pub fn release(&mut self) {
        match self.guard.take() {
            Some(guard) => drop(guard),
            None => warn!("The session lock was already released"),
        }
    }

    pub fn is_held(&self) -> bool {
        self.guard.is_some()
    }
}
