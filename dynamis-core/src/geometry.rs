//! Panel geometry
//!
//! All coordinates for the 96x64 panel live here so the hardware protocol
//! contract (grid bounds, digit layout) is centralized. Coordinates outside
//! the grid are a programmer error; nothing validates them at runtime.

/// Highest addressable column (96 columns, 0x00..=0x5F)
pub const GRID_MAX_COL: u8 = 0x5F;

/// Highest addressable row (64 rows, 0x00..=0x3F)
pub const GRID_MAX_ROW: u8 = 0x3F;

/// Left edge of a digit's bounding box before offset
pub const DIGIT_LEFT_COL: u8 = 0x03;

/// Right edge of a digit's bounding box before offset
pub const DIGIT_RIGHT_COL: u8 = 0x18;

/// Column distance from a digit's left edge to its right edge
pub const DIGIT_HALF_WIDTH: u8 = 0x15;

/// Top row of the digit bounding box
pub const DIGIT_TOP_ROW: u8 = 0x07;

/// Middle row (the "bar" segment)
pub const DIGIT_MID_ROW: u8 = 0x1F;

/// Bottom row of the digit bounding box
pub const DIGIT_BOTTOM_ROW: u8 = 0x38;

/// Horizontal offsets of the three digit slots, most significant first
pub const DIGIT_OFFSETS: [u8; 3] = [0x00, 0x1A, 0x34];

/// Decimal point rectangle, drawn between the first and second digit slots
/// in kilowatt mode
pub const POINT_LEFT_COL: u8 = 0x1A;
pub const POINT_RIGHT_COL: u8 = 0x1B;
pub const POINT_TOP_ROW: u8 = 0x35;
pub const POINT_BOTTOM_ROW: u8 = 0x36;

/// Column/row pair within the panel's addressable grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coordinate {
    pub col: u8,
    pub row: u8,
}

impl Coordinate {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }
}
