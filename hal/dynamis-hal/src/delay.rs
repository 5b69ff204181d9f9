//! Busy-wait delay abstractions
//!
//! The panel's chip-select settling interval and reset pulse holds are
//! short, fixed-duration busy waits. This trait keeps the driver crates
//! off any particular timer peripheral.

/// Busy-wait delay source
///
/// Both operations block the calling thread for at least the requested
/// duration. Implementations may overshoot; drivers only rely on the
/// minimum hold time.
pub trait DelaySource {
    /// Busy-wait for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Busy-wait for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}
