//! Hardware driver implementations
//!
//! This crate provides the device drivers the power monitor needs,
//! generic over the `dynamis-hal` traits:
//!
//! - SSD1331 OLED panel (transport framing, bring-up, primitive drawing,
//!   numeral rendering)
//! - INA219 current/power sensor

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod sensor;
