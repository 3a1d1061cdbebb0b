//! System clock collaborator.

use jiff::Zoned;

use crate::types::TimeSample;

/// Source of the current wall-clock time.
pub trait Clock {
    fn now(&self) -> TimeSample;
}

/// Local time in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> TimeSample {
        let now = Zoned::now();
        TimeSample::saturating(
            now.hour().unsigned_abs(),
            now.minute().unsigned_abs(),
            now.second().unsigned_abs(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_clock_samples_valid_fields() {
        let sample = LocalClock.now();
        assert!(sample.hour() < 24);
        assert!(sample.minute() < 60);
        assert!(sample.second() < 60);
    }
}
