//! Blocking I2C master implementation

use dynamis_hal::i2c::I2cBus;
use embassy_rp::i2c::{Blocking, I2c, Instance};
use embedded_hal::i2c::I2c as _;

/// Blocking I2C bus backed by an RP2040 I2C peripheral
pub struct RpI2cBus<'d, T: Instance> {
    inner: I2c<'d, T, Blocking>,
}

impl<'d, T: Instance> RpI2cBus<'d, T> {
    pub fn new(i2c: I2c<'d, T, Blocking>) -> Self {
        Self { inner: i2c }
    }
}

impl<T: Instance> I2cBus for RpI2cBus<'_, T> {
    type Error = embassy_rp::i2c::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write(address, data)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.inner.write_read(address, write_data, read_buf)
    }
}
