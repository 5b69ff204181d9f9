//! Panel color type
//!
//! The SSD1331 takes colors as one byte per channel but only the low six
//! bits of each channel are significant. Constructors clamp into that
//! domain so out-of-range values can never reach the wire.

/// RGB color triplet, 6 bits per channel (0..=0x3F)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Maximum per-channel intensity the panel accepts
    pub const CHANNEL_MAX: u8 = 0x3F;

    /// Background (panel off / black)
    pub const BACKGROUND: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Foreground for readings in the normal watt range
    pub const NORMAL: Color = Color::rgb(0x00, 0x3F, 0x00);

    /// Foreground for readings in the kilowatt range
    pub const ALERT: Color = Color::rgb(0x3F, 0x00, 0x00);

    /// Create a color, clamping each channel to the 6-bit domain
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }
}

const fn clamp_channel(value: u8) -> u8 {
    if value > Color::CHANNEL_MAX {
        Color::CHANNEL_MAX
    } else {
        value
    }
}
