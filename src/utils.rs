//! Small string helpers shared by the formatter.

/// Left-pad `numeral` with `'0'` until it is `width` characters long.
///
/// A numeral already `width` characters or longer is returned unchanged;
/// nothing is ever truncated. An empty numeral becomes `width` zeros.
pub fn zero_pad(numeral: &str, width: usize) -> String {
    let len = numeral.chars().count();
    let mut padded = String::with_capacity(width.max(len));
    for _ in len..width {
        padded.push('0');
    }
    padded.push_str(numeral);
    padded
}
