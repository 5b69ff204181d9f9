//! SPI bus abstractions
//!
//! Provides traits for blocking SPI master operations that can be
//! implemented by chip-specific HALs. The SSD1331 panel is write-mostly
//! but its controller clocks a byte back for every byte sent, so the
//! fundamental operation is a full-duplex transfer.

/// SPI bus master
///
/// Every operation blocks until the transfer has fully completed; there is
/// no completion callback or suspension point.
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Transfer data (simultaneous read/write)
    ///
    /// Writes data from `write` buffer while reading into `read` buffer.
    /// Both buffers must be the same length.
    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error>;

    /// Write data, discarding whatever the peripheral clocks back
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}
