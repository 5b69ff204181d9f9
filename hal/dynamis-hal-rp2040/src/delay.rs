//! Busy-wait delay implementation

use dynamis_hal::delay::DelaySource;
use embassy_time::{block_for, Duration};

/// Busy-wait delays from the embassy time driver
///
/// `block_for` spins the calling thread; the panel's settling intervals
/// and reset holds are short enough that this is acceptable for the
/// single-caller render loop.
#[derive(Default)]
pub struct BusyDelay;

impl DelaySource for BusyDelay {
    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(us as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}
