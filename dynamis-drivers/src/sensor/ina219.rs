//! INA219 current/power sensor
//!
//! High-side current shunt monitor with an I2C register interface. The
//! render loop only consumes the scaled power reading; everything
//! register-level (address validation, big-endian packing, two's
//! complement and bit-field decoding) stays inside this driver, and bus
//! failures are reported to the loop as the "no reading" sentinel.

use dynamis_core::traits::PowerSensor;
use dynamis_hal::I2cBus;

/// INA219 register addresses
pub mod reg {
    /// Operating mode, gain, ADC resolution
    pub const CONFIG: u8 = 0x00;
    /// Shunt voltage, two's complement
    pub const SHUNT_VOLTAGE: u8 = 0x01;
    /// Bus voltage, packed into bits 15..3
    pub const BUS_VOLTAGE: u8 = 0x02;
    /// Calibrated power product
    pub const POWER: u8 = 0x03;
    /// Calibrated shunt current, two's complement
    pub const CURRENT: u8 = 0x04;
    /// Current LSB calibration
    pub const CALIBRATION: u8 = 0x05;
}

/// Default I2C address (A0/A1 grounded)
pub const DEFAULT_ADDRESS: u8 = 0x40;

/// Voltage range, gain, and continuous shunt+bus conversion setup
const CONFIG_WORD: u16 = 0b0011_1001_1001_1111;

/// Current LSB calibration matching the board's shunt resistor
const CALIBRATION_WORD: u16 = 0b0101_0000_0000_0000;

/// Errors the sensor driver can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ina219Error<E> {
    /// I2C transaction failed
    Bus(E),
    /// Register address outside the device's map, or not writable
    InvalidRegister(u8),
}

/// INA219 driver
pub struct Ina219<I2C> {
    i2c: I2C,
    address: u8,
    /// Power register LSB in microwatts, fixed by `CALIBRATION_WORD` and
    /// the shunt value
    power_lsb_uw: u32,
}

impl<I2C> Ina219<I2C>
where
    I2C: I2cBus,
{
    pub fn new(i2c: I2C, address: u8, power_lsb_uw: u32) -> Self {
        Self {
            i2c,
            address,
            power_lsb_uw,
        }
    }

    /// Write the configuration and calibration registers
    ///
    /// Must run once before readings are meaningful; the power and current
    /// registers read zero until calibration is set.
    pub fn configure(&mut self) -> Result<(), Ina219Error<I2C::Error>> {
        self.write_register(reg::CONFIG, CONFIG_WORD)?;
        self.write_register(reg::CALIBRATION, CALIBRATION_WORD)
    }

    /// Write a 16-bit register, big-endian
    ///
    /// Only the configuration and calibration registers accept writes.
    pub fn write_register(
        &mut self,
        register: u8,
        value: u16,
    ) -> Result<(), Ina219Error<I2C::Error>> {
        match register {
            reg::CONFIG | reg::CALIBRATION => {}
            other => return Err(Ina219Error::InvalidRegister(other)),
        }

        let [hi, lo] = value.to_be_bytes();
        self.i2c
            .write(self.address, &[register, hi, lo])
            .map_err(Ina219Error::Bus)
    }

    /// Read a 16-bit register, big-endian
    pub fn read_register(&mut self, register: u8) -> Result<u16, Ina219Error<I2C::Error>> {
        if register > reg::CALIBRATION {
            return Err(Ina219Error::InvalidRegister(register));
        }

        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address, &[register], &mut buf)
            .map_err(Ina219Error::Bus)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Shunt voltage register, two's complement raw counts
    pub fn shunt_voltage_raw(&mut self) -> Result<i16, Ina219Error<I2C::Error>> {
        self.read_register(reg::SHUNT_VOLTAGE).map(|v| v as i16)
    }

    /// Bus voltage raw counts (4 mV LSB), unpacked from bits 15..3
    pub fn bus_voltage_raw(&mut self) -> Result<u16, Ina219Error<I2C::Error>> {
        self.read_register(reg::BUS_VOLTAGE).map(|v| v >> 3)
    }

    /// Calibrated current register, two's complement raw counts
    pub fn current_raw(&mut self) -> Result<i16, Ina219Error<I2C::Error>> {
        self.read_register(reg::CURRENT).map(|v| v as i16)
    }

    /// Calibrated power register, raw counts
    pub fn power_raw(&mut self) -> Result<u16, Ina219Error<I2C::Error>> {
        self.read_register(reg::POWER)
    }
}

impl<I2C> PowerSensor for Ina219<I2C>
where
    I2C: I2cBus,
{
    fn read_watts(&mut self) -> Option<i32> {
        let raw = self.power_raw().ok()?;
        let microwatts = raw as u64 * self.power_lsb_uw as u64;
        Some((microwatts / 1_000_000) as i32)
    }
}
