//! GPIO output implementation

use dynamis_hal::gpio::OutputPin;
use embassy_rp::gpio::Output;

/// Digital output line backed by an RP2040 GPIO
pub struct OutputLine<'d> {
    inner: Output<'d>,
}

impl<'d> OutputLine<'d> {
    pub fn new(output: Output<'d>) -> Self {
        Self { inner: output }
    }
}

impl OutputPin for OutputLine<'_> {
    fn set_high(&mut self) {
        self.inner.set_high();
    }

    fn set_low(&mut self) {
        self.inner.set_low();
    }
}
