//! Power reading formatting
//!
//! Converts a raw integer power reading into the three digits the panel
//! shows, deciding between watt and kilowatt presentation. Readings
//! outside 0..10000 are not representable on three digits and format to
//! `None`; the caller keeps the previous frame.

use crate::color::Color;

/// Unit scale the panel is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Scale {
    /// 0..=1000 W, shown with all digits
    Watts,
    /// Above 1000 W, shown as k.WW with the decimal point
    Kilowatts,
}

/// A formatted reading: three display digits plus the unit scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayValue {
    /// Display digits, most significant first. Normally each 0..=9; a
    /// reading of exactly 1000 W yields a leading 10, which has no glyph
    /// and renders as a blank slot.
    pub digits: [u8; 3],
    pub scale: Scale,
}

impl DisplayValue {
    /// Foreground color for this scale
    pub fn foreground(&self) -> Color {
        match self.scale {
            Scale::Watts => Color::NORMAL,
            Scale::Kilowatts => Color::ALERT,
        }
    }
}

/// Format a raw reading into display digits
///
/// - `1000 < reading < 10000`: kilowatt mode, first three significant
///   figures, alert color.
/// - `0 <= reading <= 1000`: watt mode (exactly 1000 is still watts; the
///   kilowatt comparison is strict).
/// - anything else: `None`, the reading is not representable.
pub fn format_power(reading: i32) -> Option<DisplayValue> {
    if reading > 1000 && reading < 10000 {
        Some(DisplayValue {
            digits: [
                (reading / 1000) as u8,
                ((reading % 1000) / 100) as u8,
                ((reading % 100) / 10) as u8,
            ],
            scale: Scale::Kilowatts,
        })
    } else if (0..=1000).contains(&reading) {
        Some(DisplayValue {
            digits: [
                (reading / 100) as u8,
                ((reading % 100) / 10) as u8,
                (reading % 10) as u8,
            ],
            scale: Scale::Watts,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watt_mode() {
        let v = format_power(500).unwrap();
        assert_eq!(v.digits, [5, 0, 0]);
        assert_eq!(v.scale, Scale::Watts);
        assert_eq!(v.foreground(), Color::NORMAL);
    }

    #[test]
    fn test_kilowatt_mode() {
        let v = format_power(1500).unwrap();
        assert_eq!(v.digits, [1, 5, 0]);
        assert_eq!(v.scale, Scale::Kilowatts);
        assert_eq!(v.foreground(), Color::ALERT);
    }

    #[test]
    fn test_kilowatt_threshold_is_strict() {
        // Exactly 1000 stays in watt mode; 1001 crosses over.
        assert_eq!(format_power(1000).unwrap().scale, Scale::Watts);
        assert_eq!(format_power(1001).unwrap().scale, Scale::Kilowatts);
        assert_eq!(format_power(1001).unwrap().digits, [1, 0, 0]);
    }

    #[test]
    fn test_zero() {
        let v = format_power(0).unwrap();
        assert_eq!(v.digits, [0, 0, 0]);
        assert_eq!(v.scale, Scale::Watts);
    }

    #[test]
    fn test_out_of_range_is_none() {
        assert_eq!(format_power(-1), None);
        assert_eq!(format_power(10000), None);
        assert_eq!(format_power(15000), None);
        assert_eq!(format_power(i32::MIN), None);
        assert_eq!(format_power(i32::MAX), None);
    }

    #[test]
    fn test_kilowatt_digit_extraction() {
        let v = format_power(9876).unwrap();
        assert_eq!(v.digits, [9, 8, 7]);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(format_power(734), format_power(734));
    }
}
