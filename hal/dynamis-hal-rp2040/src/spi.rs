//! Blocking SPI master implementation

use dynamis_hal::spi::SpiBus;
use embassy_rp::spi::{Blocking, Instance, Spi};

/// Blocking SPI bus backed by an RP2040 SPI peripheral
pub struct RpSpiBus<'d, T: Instance> {
    inner: Spi<'d, T, Blocking>,
}

impl<'d, T: Instance> RpSpiBus<'d, T> {
    pub fn new(spi: Spi<'d, T, Blocking>) -> Self {
        Self { inner: spi }
    }
}

impl<T: Instance> SpiBus for RpSpiBus<'_, T> {
    type Error = embassy_rp::spi::Error;

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        self.inner.blocking_transfer(read, write)
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.blocking_write(data)
    }
}
