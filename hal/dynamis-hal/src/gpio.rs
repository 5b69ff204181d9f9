//! GPIO pin abstractions
//!
//! Provides a trait for digital output pins that can be implemented by
//! chip-specific HALs. The power monitor only drives outputs (chip-select,
//! data/command select, panel reset); no input pins are needed.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}
