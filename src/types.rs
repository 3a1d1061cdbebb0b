//! Shared data-model types: display mode and the sampled wall-clock time.

/// Display encoding for the clock text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// `hh:mm:ss` as two lowercase hex digits per field.
    #[default]
    Hex,
    /// Each field as an 8-bit zero-padded binary numeral.
    Binary,
}

impl Mode {
    /// The other mode. Toggling twice yields the original mode.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Hex => Mode::Binary,
            Mode::Binary => Mode::Hex,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Hex => "hex",
            Mode::Binary => "binary",
        }
    }
}

/// An hour/minute/second triple read from the system clock.
///
/// Only constructible with in-range fields, so formatting a sample never
/// has to deal with out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSample {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeSample {
    /// Returns `None` unless `hour < 24`, `minute < 60` and `second < 60`.
    #[cfg(test)]
    pub fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        (hour < 24 && minute < 60 && second < 60).then_some(Self {
            hour,
            minute,
            second,
        })
    }

    /// Clamp each field into range. Used for clock sources that may report
    /// a leap second as `:60`.
    pub fn saturating(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour: hour.min(23),
            minute: minute.min(59),
            second: second.min(59),
        }
    }

    #[cfg(test)]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    #[cfg(test)]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    #[cfg(test)]
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Fields in display order.
    pub fn fields(&self) -> [u8; 3] {
        [self.hour, self.minute, self.second]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        for mode in [Mode::Hex, Mode::Binary] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn default_mode_is_hex() {
        assert_eq!(Mode::default(), Mode::Hex);
    }

    #[test]
    fn sample_rejects_out_of_range_fields() {
        assert!(TimeSample::new(0, 0, 0).is_some());
        assert!(TimeSample::new(23, 59, 59).is_some());
        assert!(TimeSample::new(24, 0, 0).is_none());
        assert!(TimeSample::new(0, 60, 0).is_none());
        assert!(TimeSample::new(0, 0, 60).is_none());
    }

    #[test]
    fn saturating_clamps_each_field() {
        assert_eq!(
            TimeSample::saturating(30, 75, 60),
            TimeSample::new(23, 59, 59).unwrap()
        );
        assert_eq!(
            TimeSample::saturating(7, 8, 9),
            TimeSample::new(7, 8, 9).unwrap()
        );
    }

    #[test]
    fn fields_are_in_display_order() {
        let sample = TimeSample::new(10, 5, 59).unwrap();
        assert_eq!(sample.fields(), [10, 5, 59]);
        assert_eq!(
            (sample.hour(), sample.minute(), sample.second()),
            (10, 5, 59)
        );
    }
}
