//! Display panel drivers

pub mod ssd1331;

pub use ssd1331::{PanelError, Ssd1331};
