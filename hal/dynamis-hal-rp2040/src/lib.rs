//! RP2040-specific HAL for the Dynamis power monitor
//!
//! This crate provides RP2040 implementations of the shared `dynamis-hal`
//! traits over blocking `embassy-rp` peripherals:
//!
//! - GPIO output lines (chip-select, data/command, reset)
//! - Blocking SPI master for the panel
//! - Blocking I2C master for the power sensor
//! - Busy-wait delays from the embassy time driver

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod i2c;
pub mod spi;

pub use delay::BusyDelay;
pub use gpio::OutputLine;
pub use i2c::RpI2cBus;
pub use spi::RpSpiBus;
