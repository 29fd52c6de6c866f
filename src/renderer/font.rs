//! Simple 8x8 bitmap font for the win message
//!
//! Covers digits and the letters the game prints. Lowercase maps to uppercase,
//! anything else renders as a blank cell.

use glam::IVec2;

/// Glyph cell size in font pixels
pub const GLYPH_SIZE: i32 = 8;
/// Horizontal advance per character (glyph plus one pixel spacing)
pub const GLYPH_ADVANCE: i32 = GLYPH_SIZE + 1;

/// One byte per row, most significant bit is the leftmost pixel
type Glyph = [u8; 8];

const BLANK: Glyph = [0x00; 8];

const DIGITS: [Glyph; 10] = [
    [0x3C, 0x66, 0x6E, 0x76, 0x66, 0x66, 0x3C, 0x00],
    [0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00],
    [0x3C, 0x66, 0x06, 0x1C, 0x30, 0x60, 0x7E, 0x00],
    [0x3C, 0x66, 0x06, 0x1C, 0x06, 0x66, 0x3C, 0x00],
    [0x0E, 0x1E, 0x36, 0x66, 0x7F, 0x06, 0x06, 0x00],
    [0x7E, 0x60, 0x7C, 0x06, 0x06, 0x66, 0x3C, 0x00],
    [0x1C, 0x30, 0x60, 0x7C, 0x66, 0x66, 0x3C, 0x00],
    [0x7E, 0x06, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00],
    [0x3C, 0x66, 0x66, 0x3C, 0x66, 0x66, 0x3C, 0x00],
    [0x3C, 0x66, 0x66, 0x3E, 0x06, 0x0C, 0x38, 0x00],
];

fn glyph(c: char) -> &'static Glyph {
    match c.to_ascii_uppercase() {
        d @ '0'..='9' => &DIGITS[d as usize - '0' as usize],
        'A' => &[0x18, 0x3C, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x00],
        'E' => &[0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x7E, 0x00],
        'I' => &[0x3C, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00],
        'L' => &[0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x7E, 0x00],
        'N' => &[0x66, 0x76, 0x7E, 0x7E, 0x6E, 0x66, 0x66, 0x00],
        'P' => &[0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60, 0x60, 0x00],
        'R' => &[0x7C, 0x66, 0x66, 0x7C, 0x6C, 0x66, 0x66, 0x00],
        'S' => &[0x3C, 0x66, 0x60, 0x3C, 0x06, 0x66, 0x3C, 0x00],
        'W' => &[0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00],
        'Y' => &[0x66, 0x66, 0x66, 0x3C, 0x18, 0x18, 0x18, 0x00],
        '!' => &[0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x18, 0x00],
        _ => &BLANK,
    }
}

/// Size of `text` in font pixels (no trailing spacing)
pub fn text_size(text: &str) -> IVec2 {
    let count = text.chars().count() as i32;
    if count == 0 {
        return IVec2::ZERO;
    }
    IVec2::new(count * GLYPH_ADVANCE - 1, GLYPH_SIZE)
}

/// A horizontal run of lit pixels, in font pixels relative to the text origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: IVec2,
    pub len: i32,
}

/// Lit pixels of `text`, merged into horizontal runs per glyph row
pub fn runs(text: &str) -> Vec<Run> {
    let mut out = Vec::new();
    for (i, c) in text.chars().enumerate() {
        let x0 = i as i32 * GLYPH_ADVANCE;
        for (row, &bits) in glyph(c).iter().enumerate() {
            let mut col = 0;
            while col < GLYPH_SIZE {
                if bits & (0x80u8 >> col) == 0 {
                    col += 1;
                    continue;
                }
                let start = col;
                while col < GLYPH_SIZE && bits & (0x80u8 >> col) != 0 {
                    col += 1;
                }
                out.push(Run {
                    start: IVec2::new(x0 + start, row as i32),
                    len: col - start,
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_size() {
        assert_eq!(text_size(""), IVec2::ZERO);
        assert_eq!(text_size("1"), IVec2::new(8, 8));
        assert_eq!(text_size("Player 1 Wins!"), IVec2::new(14 * 9 - 1, 8));
    }

    #[test]
    fn test_runs_merge_adjacent_pixels() {
        // Top row of 'E' is 0x7E: one run of six starting at column 1
        let top: Vec<Run> = runs("E").into_iter().filter(|r| r.start.y == 0).collect();
        assert_eq!(
            top,
            vec![Run {
                start: IVec2::new(1, 0),
                len: 6
            }]
        );
    }

    #[test]
    fn test_second_glyph_is_offset_by_advance() {
        let r = runs(" !");
        assert!(!r.is_empty());
        assert!(r.iter().all(|run| run.start.x >= GLYPH_ADVANCE));
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        assert_eq!(runs("wins"), runs("WINS"));
    }

    #[test]
    fn test_unknown_glyph_is_blank() {
        assert!(runs("#~").is_empty());
    }
}
