//! Time formatter: turns a [`TimeSample`] into the display string for a mode.

use crate::types::{Mode, TimeSample};
use crate::utils::zero_pad;

/// Width of each field in binary mode. 59 needs 6 bits, 8 leaves headroom.
pub const BINARY_FIELD_WIDTH: usize = 8;

/// Format `sample` for display in `mode`.
///
/// * Hex: `"0a:05:3b"`, always 8 characters.
/// * Binary: `"00001010:00000101:00111011"`, always 26 characters.
pub fn format_time(sample: TimeSample, mode: Mode) -> String {
    match mode {
        Mode::Hex => {
            let [h, m, s] = sample.fields();
            format!("{h:02x}:{m:02x}:{s:02x}")
        }
        Mode::Binary => sample
            .fields()
            .iter()
            .map(|field| zero_pad(&format!("{field:b}"), BINARY_FIELD_WIDTH))
            .collect::<Vec<_>>()
            .join(":"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_samples() -> impl Iterator<Item = TimeSample> {
        (0..24).flat_map(|h| {
            (0..60).flat_map(move |m| (0..60).filter_map(move |s| TimeSample::new(h, m, s)))
        })
    }

    fn sample(h: u8, m: u8, s: u8) -> TimeSample {
        TimeSample::new(h, m, s).unwrap()
    }

    fn parse(text: &str, radix: u32) -> Vec<u8> {
        text.split(':')
            .map(|part| u8::from_str_radix(part, radix).unwrap())
            .collect()
    }

    #[test]
    fn hex_examples() {
        assert_eq!(format_time(sample(10, 5, 59), Mode::Hex), "0a:05:3b");
        assert_eq!(format_time(sample(0, 0, 0), Mode::Hex), "00:00:00");
        assert_eq!(format_time(sample(23, 59, 59), Mode::Hex), "17:3b:3b");
    }

    #[test]
    fn binary_examples() {
        assert_eq!(
            format_time(sample(10, 5, 59), Mode::Binary),
            "00001010:00000101:00111011"
        );
        assert_eq!(
            format_time(sample(23, 59, 59), Mode::Binary),
            "00010111:00111011:00111011"
        );
        assert_eq!(
            format_time(sample(0, 0, 0), Mode::Binary),
            "00000000:00000000:00000000"
        );
    }

    #[test]
    fn hex_is_fixed_width_lowercase() {
        for s in all_samples() {
            let text = format_time(s, Mode::Hex);
            assert_eq!(text.len(), 8, "{text}");
            let parts: Vec<&str> = text.split(':').collect();
            assert_eq!(parts.len(), 3);
            assert!(parts.iter().all(|p| p.len() == 2));
            assert!(
                text.chars()
                    .all(|c| c == ':' || c.is_ascii_digit() || ('a'..='f').contains(&c)),
                "{text}"
            );
        }
    }

    #[test]
    fn binary_is_fixed_width() {
        for s in all_samples() {
            let text = format_time(s, Mode::Binary);
            assert_eq!(text.len(), 26, "{text}");
            let parts: Vec<&str> = text.split(':').collect();
            assert_eq!(parts.len(), 3);
            assert!(parts.iter().all(|p| p.len() == BINARY_FIELD_WIDTH));
            assert!(text.chars().all(|c| matches!(c, '0' | '1' | ':')), "{text}");
        }
    }

    #[test]
    fn both_encodings_recover_the_sample() {
        for s in all_samples() {
            let fields = s.fields().to_vec();
            assert_eq!(parse(&format_time(s, Mode::Hex), 16), fields);
            assert_eq!(parse(&format_time(s, Mode::Binary), 2), fields);
        }
    }

    #[test]
    fn formatting_is_deterministic() {
        let s = sample(12, 34, 56);
        for mode in [Mode::Hex, Mode::Binary] {
            assert_eq!(format_time(s, mode), format_time(s, mode));
        }
    }
}
