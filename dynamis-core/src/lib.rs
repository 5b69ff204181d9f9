//! Board-agnostic core logic for the Dynamis power monitor
//!
//! This crate contains everything that does not touch hardware:
//!
//! - Panel geometry constants and coordinate types
//! - Color type in the panel's 6-bit-per-channel domain
//! - Drawable segment primitives (line, filled rectangle)
//! - Digit-to-segment glyph tables and frame assembly
//! - Power value formatting (watts vs. kilowatts scaling)
//! - Panel bring-up state machine
//! - The power sensor trait the render loop consumes

#![no_std]
#![deny(unsafe_code)]

pub mod color;
pub mod geometry;
pub mod glyph;
pub mod power;
pub mod primitive;
pub mod state;
pub mod traits;

pub use color::Color;
pub use geometry::Coordinate;
pub use glyph::{frame_primitives, Segment, Side};
pub use power::{format_power, DisplayValue, Scale};
pub use primitive::SegmentPrimitive;
pub use state::{PanelEvent, PanelState};
pub use traits::PowerSensor;
