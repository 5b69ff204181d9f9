//! Hardware-facing traits the render loop consumes

/// Source of power readings
///
/// Implementations own their bus protocol and decoding; a failed read is
/// reported as the `None` sentinel, never as a bus error. The render loop
/// treats `None` exactly like an unrepresentable reading: it keeps the
/// previous frame.
pub trait PowerSensor {
    /// Read the current power draw in watts
    ///
    /// Takes `&mut self` because a bus transaction is required.
    fn read_watts(&mut self) -> Option<i32>;
}
