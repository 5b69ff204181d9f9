//! Drawable segment primitives
//!
//! The SSD1331 understands exactly two accelerated shapes: a line and a
//! filled rectangle. Everything the monitor renders is a sequence of these.

use crate::color::Color;
use crate::geometry::Coordinate;

/// One drawable shape
///
/// Invariant: columns are ordered ascending, `start.col <= end.col`
/// (likewise for the rectangle corners, which order both axes). The
/// axis-aligned digit segments order their rows ascending too; the
/// diagonal unit strokes cannot. The glyph tables are laid out so this
/// holds after offset arithmetic; it is not re-checked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SegmentPrimitive {
    /// Straight line from `start` to `end`
    Line {
        start: Coordinate,
        end: Coordinate,
        color: Color,
    },
    /// Rectangle with independent outline and fill colors
    Rect {
        top_left: Coordinate,
        bottom_right: Coordinate,
        outline: Color,
        fill: Color,
    },
}

impl SegmentPrimitive {
    /// Horizontal line helper
    pub const fn line(c0: u8, r0: u8, c1: u8, r1: u8, color: Color) -> Self {
        SegmentPrimitive::Line {
            start: Coordinate::new(c0, r0),
            end: Coordinate::new(c1, r1),
            color,
        }
    }

    /// Rectangle helper
    pub const fn rect(c0: u8, r0: u8, c1: u8, r1: u8, outline: Color, fill: Color) -> Self {
        SegmentPrimitive::Rect {
            top_left: Coordinate::new(c0, r0),
            bottom_right: Coordinate::new(c1, r1),
            outline,
            fill,
        }
    }
}
