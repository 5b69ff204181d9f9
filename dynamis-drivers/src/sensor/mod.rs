//! Measurement sensor drivers

pub mod ina219;

pub use ina219::{Ina219, Ina219Error};
