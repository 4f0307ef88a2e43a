//! The only source of "now" for business logic.

use chrono::{DateTime, FixedOffset, Offset, TimeDelta, Utc};
use std::fmt;
use std::sync::{PoisonError, RwLock};

/// Supplies the current instant.
///
/// The zone is informational; all business comparisons use UTC instants.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> DateTime<Utc>;

    fn zone(&self) -> FixedOffset;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    zone: FixedOffset,
}

impl SystemClock {
    pub fn utc() -> Self {
        Self { zone: Utc.fix() }
    }

    pub fn with_zone(zone: FixedOffset) -> Self {
        Self { zone }
    }

    /// Build from an offset string such as `+02:00`.
    pub fn from_offset(offset: &str) -> Result<Self, chrono::ParseError> {
        Ok(Self::with_zone(offset.trim().parse()?))
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn zone(&self) -> FixedOffset {
        self.zone
    }
}

/// Clock frozen at a given instant until moved with [`set`](Self::set) or
/// [`advance`](Self::advance).
#[derive(Debug)]
pub struct FixedClock {
    instant: RwLock<DateTime<Utc>>,
    zone: FixedOffset,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: RwLock::new(instant),
            zone: Utc.fix(),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        *self.instant.write().unwrap_or_else(PoisonError::into_inner) = instant;
    }

    pub fn advance(&self, by: TimeDelta) {
        let mut guard = self.instant.write().unwrap_or_else(PoisonError::into_inner);
        *guard += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn zone(&self) -> FixedOffset {
        self.zone
    }
}
