//! Segment-based numeral glyphs
//!
//! Digits are rendered from a small vocabulary of line/rectangle segments
//! positioned inside a fixed bounding box, shifted horizontally by a slot
//! offset. The vocabulary and the digit decomposition table mirror the
//! panel's visual topology: short vertical strokes carry a left/right
//! variant because e.g. 2 and 5 bend in opposite directions.

use heapless::Vec;

use crate::color::Color;
use crate::geometry::{
    DIGIT_BOTTOM_ROW, DIGIT_HALF_WIDTH, DIGIT_LEFT_COL, DIGIT_MID_ROW, DIGIT_OFFSETS,
    DIGIT_RIGHT_COL, DIGIT_TOP_ROW, GRID_MAX_COL, GRID_MAX_ROW, POINT_BOTTOM_ROW, POINT_LEFT_COL,
    POINT_RIGHT_COL, POINT_TOP_ROW,
};
use crate::power::{DisplayValue, Scale};
use crate::primitive::SegmentPrimitive;

/// Which edge of the bounding box a short vertical stroke sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    Left,
    Right,
}

/// Segment vocabulary for digit glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    /// Horizontal line along the top row
    Top,
    /// Horizontal line along the middle row
    Bar,
    /// Horizontal line along the bottom row
    Bottom,
    /// Full-height vertical line at the left edge
    LeftSide,
    /// Full-height vertical line at the right edge
    RightSide,
    /// Vertical line spanning the upper half
    UpperShort(Side),
    /// Vertical line spanning the lower half
    LowerShort(Side),
    /// Rectangle over the whole bounding box, hollow (background fill)
    FullOutline,
}

/// Most segments a single digit decomposes into
pub const MAX_SEGMENTS_PER_DIGIT: usize = 5;

/// Digit-to-segment decomposition table
static DIGIT_SEGMENTS: [&[Segment]; 10] = [
    // 0
    &[Segment::FullOutline],
    // 1
    &[Segment::RightSide],
    // 2
    &[
        Segment::Bar,
        Segment::Top,
        Segment::Bottom,
        Segment::LowerShort(Side::Left),
        Segment::UpperShort(Side::Right),
    ],
    // 3
    &[
        Segment::Bar,
        Segment::Top,
        Segment::Bottom,
        Segment::RightSide,
    ],
    // 4
    &[
        Segment::RightSide,
        Segment::Bar,
        Segment::UpperShort(Side::Left),
    ],
    // 5
    &[
        Segment::Bar,
        Segment::Top,
        Segment::Bottom,
        Segment::LowerShort(Side::Right),
        Segment::UpperShort(Side::Left),
    ],
    // 6
    &[
        Segment::LeftSide,
        Segment::Bar,
        Segment::Top,
        Segment::Bottom,
        Segment::LowerShort(Side::Right),
    ],
    // 7
    &[Segment::RightSide, Segment::Top],
    // 8
    &[Segment::FullOutline, Segment::Bar],
    // 9
    &[
        Segment::Bar,
        Segment::Top,
        Segment::Bottom,
        Segment::RightSide,
        Segment::UpperShort(Side::Left),
    ],
];

/// Ordered segments for a digit 0-9; empty for anything else
pub fn digit_segments(digit: u8) -> &'static [Segment] {
    match DIGIT_SEGMENTS.get(digit as usize) {
        Some(segments) => segments,
        None => &[],
    }
}

impl Segment {
    /// Materialize this segment at a horizontal slot offset
    ///
    /// `fg` colors the stroke; `bg` fills rectangle interiors so outlines
    /// stay hollow.
    pub fn primitive(self, offset: u8, fg: Color, bg: Color) -> SegmentPrimitive {
        let left = DIGIT_LEFT_COL + offset;
        let right = DIGIT_RIGHT_COL + offset;
        match self {
            Segment::Top => {
                SegmentPrimitive::line(left, DIGIT_TOP_ROW, right, DIGIT_TOP_ROW, fg)
            }
            Segment::Bar => {
                SegmentPrimitive::line(left, DIGIT_MID_ROW, right, DIGIT_MID_ROW, fg)
            }
            Segment::Bottom => {
                SegmentPrimitive::line(left, DIGIT_BOTTOM_ROW, right, DIGIT_BOTTOM_ROW, fg)
            }
            Segment::LeftSide => {
                SegmentPrimitive::line(left, DIGIT_TOP_ROW, left, DIGIT_BOTTOM_ROW, fg)
            }
            Segment::RightSide => {
                SegmentPrimitive::line(right, DIGIT_TOP_ROW, right, DIGIT_BOTTOM_ROW, fg)
            }
            Segment::UpperShort(side) => {
                let col = side_col(left, side);
                SegmentPrimitive::line(col, DIGIT_TOP_ROW, col, DIGIT_MID_ROW, fg)
            }
            Segment::LowerShort(side) => {
                let col = side_col(left, side);
                SegmentPrimitive::line(col, DIGIT_MID_ROW, col, DIGIT_BOTTOM_ROW, fg)
            }
            Segment::FullOutline => SegmentPrimitive::rect(
                left,
                DIGIT_TOP_ROW,
                right,
                DIGIT_BOTTOM_ROW,
                fg,
                bg,
            ),
        }
    }
}

fn side_col(left: u8, side: Side) -> u8 {
    match side {
        Side::Left => left,
        Side::Right => left + DIGIT_HALF_WIDTH,
    }
}

/// Primitive sequence for one digit at a slot offset
pub fn digit_primitives(
    digit: u8,
    offset: u8,
    fg: Color,
    bg: Color,
) -> Vec<SegmentPrimitive, MAX_SEGMENTS_PER_DIGIT> {
    let mut out = Vec::new();
    for segment in digit_segments(digit) {
        // Capacity equals the longest table entry, so this cannot overflow.
        let _ = out.push(segment.primitive(offset, fg, bg));
    }
    out
}

// Fixed unit glyphs occupy the columns right of the third digit slot.
// "W" sits low (next to the ones digit), "K" sits high so both are legible
// together in kilowatt mode.
//
// These strokes are diagonal, so only their columns are ordered ascending;
// the both-axes ordering invariant applies to the axis-aligned digit
// segments and rectangles, not here.
const W_STROKES: [(u8, u8, u8, u8); 4] = [
    (0x4F, 0x2A, 0x52, 0x38),
    (0x52, 0x38, 0x56, 0x2F),
    (0x56, 0x2F, 0x5A, 0x38),
    (0x5A, 0x38, 0x5D, 0x2A),
];

const K_STROKES: [(u8, u8, u8, u8); 3] = [
    (0x4F, 0x07, 0x4F, 0x15),
    (0x4F, 0x0E, 0x55, 0x07),
    (0x4F, 0x0E, 0x55, 0x15),
];

/// The "W" unit glyph: four strokes forming two chevrons
pub fn w_glyph(fg: Color) -> Vec<SegmentPrimitive, 4> {
    let mut out = Vec::new();
    for (c0, r0, c1, r1) in W_STROKES {
        let _ = out.push(SegmentPrimitive::line(c0, r0, c1, r1, fg));
    }
    out
}

/// The "K" unit glyph: an upright and two diagonals
pub fn k_glyph(fg: Color) -> Vec<SegmentPrimitive, 3> {
    let mut out = Vec::new();
    for (c0, r0, c1, r1) in K_STROKES {
        let _ = out.push(SegmentPrimitive::line(c0, r0, c1, r1, fg));
    }
    out
}

/// The kilowatt decimal point: a small hollow rectangle
pub fn decimal_point(fg: Color, bg: Color) -> SegmentPrimitive {
    SegmentPrimitive::rect(
        POINT_LEFT_COL,
        POINT_TOP_ROW,
        POINT_RIGHT_COL,
        POINT_BOTTOM_ROW,
        fg,
        bg,
    )
}

/// Most primitives a full frame can contain
pub const MAX_FRAME_PRIMITIVES: usize = 1 + 4 + 3 + 1 + 3 * MAX_SEGMENTS_PER_DIGIT;

/// Assemble the complete primitive sequence for one formatted reading
///
/// Order: background fill, "W" glyph, then in kilowatt mode "K" and the
/// decimal point, then the three digits least-significant first (the ones
/// digit changes fastest, so it is redrawn with the least lag).
pub fn frame_primitives(value: &DisplayValue) -> Vec<SegmentPrimitive, MAX_FRAME_PRIMITIVES> {
    let fg = value.foreground();
    let bg = Color::BACKGROUND;
    let mut out: Vec<SegmentPrimitive, MAX_FRAME_PRIMITIVES> = Vec::new();

    let _ = out.push(SegmentPrimitive::rect(
        0x00,
        0x00,
        GRID_MAX_COL,
        GRID_MAX_ROW,
        bg,
        bg,
    ));
    out.extend(w_glyph(fg));
    if value.scale == Scale::Kilowatts {
        out.extend(k_glyph(fg));
        let _ = out.push(decimal_point(fg, bg));
    }
    for slot in (0..3).rev() {
        out.extend(digit_primitives(
            value.digits[slot],
            DIGIT_OFFSETS[slot],
            fg,
            bg,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::geometry::Coordinate;
    use proptest::prelude::*;

    const FG: Color = Color::NORMAL;
    const BG: Color = Color::BACKGROUND;

    fn shape_of(p: &SegmentPrimitive) -> (&'static str, u8, u8, u8, u8) {
        match *p {
            SegmentPrimitive::Line { start, end, .. } => {
                ("line", start.col, start.row, end.col, end.row)
            }
            SegmentPrimitive::Rect {
                top_left,
                bottom_right,
                ..
            } => ("rect", top_left.col, top_left.row, bottom_right.col, bottom_right.row),
        }
    }

    #[test]
    fn test_digit_table_exact() {
        use Segment::*;
        use Side::*;

        // Pins every digit's full decomposition, ordering and side
        // variants included. Several digits share a segment count with a
        // plausible-but-wrong decomposition (9 without its bottom stroke,
        // for instance), so lengths alone prove nothing.
        let expected: [&[Segment]; 10] = [
            &[FullOutline],
            &[RightSide],
            &[Bar, Top, Bottom, LowerShort(Left), UpperShort(Right)],
            &[Bar, Top, Bottom, RightSide],
            &[RightSide, Bar, UpperShort(Left)],
            &[Bar, Top, Bottom, LowerShort(Right), UpperShort(Left)],
            &[LeftSide, Bar, Top, Bottom, LowerShort(Right)],
            &[RightSide, Top],
            &[FullOutline, Bar],
            &[Bar, Top, Bottom, RightSide, UpperShort(Left)],
        ];
        for (digit, segments) in expected.iter().enumerate() {
            assert_eq!(digit_segments(digit as u8), *segments, "digit {digit}");
        }
    }

    #[test]
    fn test_zero_is_hollow_rectangle() {
        let prims = digit_primitives(0, 0, FG, BG);
        assert_eq!(prims.len(), 1);
        assert_eq!(
            prims[0],
            SegmentPrimitive::Rect {
                top_left: Coordinate::new(0x03, 0x07),
                bottom_right: Coordinate::new(0x18, 0x38),
                outline: FG,
                fill: BG,
            }
        );
    }

    #[test]
    fn test_one_is_right_edge() {
        let prims = digit_primitives(1, 0, FG, BG);
        assert_eq!(prims.len(), 1);
        assert_eq!(
            prims[0],
            SegmentPrimitive::Line {
                start: Coordinate::new(0x18, 0x07),
                end: Coordinate::new(0x18, 0x38),
                color: FG,
            }
        );
    }

    #[test]
    fn test_two_and_five_bend_opposite_ways() {
        // 2: lower-short on the left, upper-short on the right
        let two = digit_segments(2);
        assert_eq!(two[3], Segment::LowerShort(Side::Left));
        assert_eq!(two[4], Segment::UpperShort(Side::Right));

        // 5: mirrored
        let five = digit_segments(5);
        assert_eq!(five[3], Segment::LowerShort(Side::Right));
        assert_eq!(five[4], Segment::UpperShort(Side::Left));
    }

    #[test]
    fn test_eight_is_outline_plus_bar() {
        assert_eq!(
            digit_segments(8),
            &[Segment::FullOutline, Segment::Bar][..]
        );
    }

    #[test]
    fn test_short_sides_meet_at_mid_row() {
        let upper = Segment::UpperShort(Side::Left).primitive(0, FG, BG);
        let lower = Segment::LowerShort(Side::Left).primitive(0, FG, BG);
        assert_eq!(shape_of(&upper), ("line", 0x03, 0x07, 0x03, 0x1F));
        assert_eq!(shape_of(&lower), ("line", 0x03, 0x1F, 0x03, 0x38));
    }

    #[test]
    fn test_right_variant_shifts_by_half_width() {
        let left = Segment::UpperShort(Side::Left).primitive(0x1A, FG, BG);
        let right = Segment::UpperShort(Side::Right).primitive(0x1A, FG, BG);
        let (_, lc, ..) = shape_of(&left);
        let (_, rc, ..) = shape_of(&right);
        assert_eq!(rc, lc + DIGIT_HALF_WIDTH);
    }

    #[test]
    fn test_out_of_range_digit_renders_nothing() {
        assert!(digit_segments(10).is_empty());
        assert!(digit_primitives(200, 0, FG, BG).is_empty());
    }

    #[test]
    fn test_w_and_k_stroke_counts() {
        assert_eq!(w_glyph(FG).len(), 4);
        assert_eq!(k_glyph(FG).len(), 3);
    }

    #[test]
    fn test_digit_coordinates_are_ordered() {
        // Digit segments are axis-aligned, so every primitive in every
        // digit at every slot orders both coordinate axes ascending.
        for digit in 0..=9u8 {
            for offset in DIGIT_OFFSETS {
                for p in digit_primitives(digit, offset, FG, BG) {
                    let (_, c0, r0, c1, r1) = shape_of(&p);
                    assert!(c0 <= c1 && r0 <= r1, "digit {digit} offset {offset}");
                }
            }
        }
    }

    #[test]
    fn test_unit_strokes_order_columns_ascending() {
        // The chevron strokes are diagonal: columns ascend, rows may not.
        for p in w_glyph(FG).iter().chain(k_glyph(FG).iter()) {
            let (kind, c0, _, c1, _) = shape_of(p);
            assert_eq!(kind, "line");
            assert!(c0 <= c1);
        }
    }

    proptest! {
        /// Rendering at offset `o` is rendering at 0 with every column
        /// shifted by exactly `o`.
        #[test]
        fn prop_offset_shifts_columns_only(digit in 0u8..=9, offset in 0u8..=0x34) {
            let base = digit_primitives(digit, 0, FG, BG);
            let moved = digit_primitives(digit, offset, FG, BG);
            prop_assert_eq!(base.len(), moved.len());
            for (b, m) in base.iter().zip(moved.iter()) {
                let (bk, bc0, br0, bc1, br1) = shape_of(b);
                let (mk, mc0, mr0, mc1, mr1) = shape_of(m);
                prop_assert_eq!(bk, mk);
                prop_assert_eq!(mc0, bc0 + offset);
                prop_assert_eq!(mc1, bc1 + offset);
                prop_assert_eq!(mr0, br0);
                prop_assert_eq!(mr1, br1);
            }
        }
    }
}
