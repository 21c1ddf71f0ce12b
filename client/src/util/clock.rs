//! Injectable wall-clock capability.
//!
//! DESIGN
//! ======
//! Components never read the system clock directly. They receive a
//! [`ClockHandle`], either as a prop or from Leptos context, so tests and
//! snapshot tooling can pin time to a fixed instant per render instead of
//! patching process-wide time.

use std::fmt;
use std::sync::Arc;

use time::OffsetDateTime;

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// Reads the host clock (browser `Date.now()` under `hydrate`).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Always reports the same instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// Shared, cloneable clock suitable for props and context.
#[derive(Clone)]
pub struct ClockHandle(Arc<dyn Clock + Send + Sync>);

impl ClockHandle {
    pub fn new(clock: impl Clock + Send + Sync + 'static) -> Self {
        Self(Arc::new(clock))
    }

    /// Handle pinned to `instant`.
    pub fn fixed(instant: OffsetDateTime) -> Self {
        Self::new(FixedClock(instant))
    }

    pub fn now(&self) -> OffsetDateTime {
        self.0.now()
    }
}

impl Default for ClockHandle {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl fmt::Debug for ClockHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClockHandle").field(&self.0.now()).finish()
    }
}
