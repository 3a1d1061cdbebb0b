//! The windowing collaborator as seen from the display loop.

/// Pixel metrics of a string rendered in the active font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextExtents {
    pub width: i32,
    pub ascent: i32,
    pub descent: i32,
}

/// Drawable window the loop paints into.
pub trait Surface {
    /// Measure `text` in the surface's font.
    fn text_extents(&self, text: &str) -> TextExtents;

    fn resize(&mut self, width: u32, height: u32);

    /// Erase the whole drawable area to the background colour.
    fn clear(&mut self);

    /// Draw `text` with its left edge at `x` and its baseline at `y`.
    fn draw_string(&mut self, x: i32, y: i32, text: &str);
}

/// Baseline origin that centres text with `extents` in a `width` x `height`
/// window. Integer division truncates toward zero, so wider-than-window text
/// gets a negative `x`.
pub fn text_origin(width: u32, height: u32, extents: TextExtents) -> (i32, i32) {
    let width = i32::try_from(width).unwrap_or(i32::MAX);
    let height = i32::try_from(height).unwrap_or(i32::MAX);
    let x = (width - extents.width) / 2;
    let y = height / 2 + (extents.ascent - extents.descent) / 2;
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centres_horizontally() {
        let extents = TextExtents {
            width: 80,
            ascent: 16,
            descent: 4,
        };
        assert_eq!(text_origin(100, 30, extents), (10, 21));
        assert_eq!(text_origin(300, 30, extents), (110, 21));
    }

    #[test]
    fn odd_remainders_truncate() {
        let extents = TextExtents {
            width: 81,
            ascent: 15,
            descent: 0,
        };
        // (100 - 81) / 2 = 9, 30 / 2 + 15 / 2 = 15 + 7
        assert_eq!(text_origin(100, 30, extents), (9, 22));
    }

    #[test]
    fn text_wider_than_window_starts_left_of_zero() {
        let extents = TextExtents {
            width: 260,
            ascent: 20,
            descent: 0,
        };
        assert_eq!(text_origin(100, 30, extents), (-80, 25));
    }
}
