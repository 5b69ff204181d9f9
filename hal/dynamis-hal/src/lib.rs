//! Dynamis Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the power monitor
//! needs: digital output lines for the panel's control pins, a blocking
//! SPI master for the panel data path, a blocking I2C master for the
//! power sensor, and a busy-wait delay source for settling intervals.
//!
//! Chip-specific HALs (RP2040, etc.) implement these traits so the driver
//! and application crates stay board-agnostic.
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (chip-select, data/command, reset)
//! - [`spi::SpiBus`] - Blocking SPI master operations
//! - [`i2c::I2cBus`] - Blocking I2C master operations
//! - [`delay::DelaySource`] - Busy-wait delays with us/ms granularity

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod i2c;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use delay::DelaySource;
pub use gpio::OutputPin;
pub use i2c::I2cBus;
pub use spi::SpiBus;
