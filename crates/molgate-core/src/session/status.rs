use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::fmt;

/// What the broker is currently doing, for external monitoring only.
///
/// Mutated exclusively by the broker at acquisition and release boundaries.
/// Diagnostic by contract: eventual consistency is acceptable and nothing
/// may base a correctness decision on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum SessionStatus {
    Idle { since: DateTime<Utc> },
    Working { since: DateTime<Utc> },
}

impl SessionStatus {
    pub fn idle_now() -> Self {
        Self::Idle { since: Utc::now() }
    }

    pub fn working_now() -> Self {
        Self::Working { since: Utc::now() }
    }

    pub fn since(&self) -> DateTime<Utc> {
        match self {
            Self::Idle { since } | Self::Working { since } => *since,
        }
    }

    pub fn is_working(&self) -> bool {
        matches!(self, Self::Working { .. })
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle { since } => write!(f, "[{}] idle", since),
            Self::Working { since } => write!(f, "[{}] working.", since),
        }
    }
}

/// Interior-mutable holder for the current [`SessionStatus`], readable by
/// any thread.
#[derive(Debug)]
pub struct StatusBoard {
    current: RwLock<SessionStatus>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(SessionStatus::idle_now()),
        }
    }

    pub(crate) fn set_working(&self) {
        *self.current.write() = SessionStatus::working_now();
    }

    pub(crate) fn set_idle(&self) {
        *self.current.write() = SessionStatus::idle_now();
    }

    pub fn current(&self) -> SessionStatus {
        *self.current.read()
    }
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new()
    }
}
