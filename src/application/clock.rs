// Clock trait for wall-clock access
use chrono::{DateTime, FixedOffset, Local};

/// Source of "now". Only used for labelling timestamps; generated values
/// never depend on it.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Frozen clock for reproducible labels.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}

#[cfg(test)]
pub(crate) fn test_clock() -> FixedClock {
    // 2024-03-15 14:30:00 UTC
    let instant = DateTime::parse_from_rfc3339("2024-03-15T14:30:00+00:00").unwrap();
    FixedClock::new(instant)
}
