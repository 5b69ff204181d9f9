//! SSD1331 OLED panel driver
//!
//! Drives a 96x64 color OLED over 4-wire SPI (chip-select, data/command,
//! reset). The controller's protocol is write-only: nothing is ever read
//! back, so bring-up is modeled as an explicit state machine and readiness
//! is purely a function of which steps have completed.
//!
//! # Framing
//!
//! The controller latches a transaction on the chip-select falling edge,
//! so every transfer is preceded by a guaranteed high-to-low edge (drive
//! inactive, settle, drive active). A drawing primitive is one framed
//! transaction: the opcode goes out with D/C in command mode, the
//! coordinate/color payload with D/C in data mode, all under a single
//! chip-select assertion so no other byte stream can interleave with a
//! partially-issued primitive.

use dynamis_core::color::Color;
use dynamis_core::geometry::{Coordinate, GRID_MAX_COL, GRID_MAX_ROW};
use dynamis_core::glyph::frame_primitives;
use dynamis_core::power::{format_power, DisplayValue};
use dynamis_core::primitive::SegmentPrimitive;
use dynamis_core::state::{PanelEvent, PanelState};
use dynamis_hal::{DelaySource, OutputPin, SpiBus};

/// SSD1331 commands
#[allow(dead_code)]
mod cmd {
    pub const DRAW_LINE: u8 = 0x21;
    pub const DRAW_RECT: u8 = 0x22;
    pub const CLEAR_WINDOW: u8 = 0x25;
    pub const FILL_MODE: u8 = 0x26;
    pub const CONTRAST_A: u8 = 0x81;
    pub const CONTRAST_B: u8 = 0x82;
    pub const CONTRAST_C: u8 = 0x83;
    pub const MASTER_CURRENT: u8 = 0x87;
    pub const PRECHARGE_A: u8 = 0x8A;
    pub const PRECHARGE_B: u8 = 0x8B;
    pub const PRECHARGE_C: u8 = 0x8C;
    pub const SET_REMAP: u8 = 0xA0;
    pub const START_LINE: u8 = 0xA1;
    pub const DISPLAY_OFFSET: u8 = 0xA2;
    pub const NORMAL_DISPLAY: u8 = 0xA4;
    pub const SET_MULTIPLEX: u8 = 0xA8;
    pub const SET_MASTER: u8 = 0xAD;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const POWER_MODE: u8 = 0xB0;
    pub const PRECHARGE_SPEED: u8 = 0xB1;
    pub const CLOCK_DIV: u8 = 0xB3;
    pub const PRECHARGE_LEVEL: u8 = 0xBB;
    pub const VCOMH: u8 = 0xBE;
}

/// Chip-select settling interval before the falling edge
const CS_SETTLE_US: u32 = 100;

/// Hold duration for each stage of the reset pulse
const RESET_HOLD_MS: u32 = 100;

/// Longest primitive payload (rectangle: 4 coordinates + 2 color triplets)
const MAX_PAYLOAD: usize = 10;

/// Controller initialization sequence, sent one command byte per
/// chip-select assertion. The byte values are a hardware protocol
/// contract for this panel. Display-on comes after fill-enable and the
/// full-frame clear so the panel never shows uninitialized RAM.
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_REMAP,
    0x72, // RGB color order
    cmd::START_LINE,
    0x00,
    cmd::DISPLAY_OFFSET,
    0x00,
    cmd::NORMAL_DISPLAY,
    cmd::SET_MULTIPLEX,
    0x3F, // 1/64 duty
    cmd::SET_MASTER,
    0x8E,
    cmd::POWER_MODE,
    0x0B,
    cmd::PRECHARGE_SPEED,
    0x31,
    cmd::CLOCK_DIV,
    0xF0, // 7:4 oscillator frequency, 3:0 divide ratio
    cmd::PRECHARGE_A,
    0x64,
    cmd::PRECHARGE_B,
    0x78,
    cmd::PRECHARGE_C,
    0x64,
    cmd::PRECHARGE_LEVEL,
    0x3A,
    cmd::VCOMH,
    0x3E,
    cmd::MASTER_CURRENT,
    0x08,
    cmd::CONTRAST_A,
    0x91,
    cmd::CONTRAST_B,
    0xFF,
    cmd::CONTRAST_C,
    0x7D,
    cmd::FILL_MODE,
    0x01, // rectangles may carry a fill color
    cmd::CLEAR_WINDOW,
    0x00,
    0x00,
    GRID_MAX_COL,
    GRID_MAX_ROW,
    cmd::DISPLAY_ON,
];

/// Errors the panel driver can produce
///
/// `E` is the underlying SPI bus error so the raw status survives to the
/// caller. Nothing is retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError<E> {
    /// Transport failure while drawing; the panel keeps whatever partial
    /// state the failed command produced
    Io(E),
    /// Transport failure during bring-up; the attempt is abandoned and the
    /// caller may retry the whole reset sequence
    Init(E),
    /// Drawing attempted while the panel is not `Ready`
    NotReady,
}

/// SSD1331 panel driver
///
/// Owns the bus handle and the three control lines exclusively. Rendering
/// is strictly sequential; the driver must only ever be invoked from a
/// single logical caller.
pub struct Ssd1331<SPI, PIN, D> {
    spi: SPI,
    cs: PIN,
    dc: PIN,
    rst: PIN,
    delay: D,
    state: PanelState,
    foreground: Color,
    last_rendered: Option<DisplayValue>,
}

impl<SPI, PIN, D> Ssd1331<SPI, PIN, D>
where
    SPI: SpiBus,
    PIN: OutputPin,
    D: DelaySource,
{
    /// Create a driver in the `Uninitialized` state
    ///
    /// Nothing touches the bus until [`init`](Self::init) runs.
    pub fn new(spi: SPI, cs: PIN, dc: PIN, rst: PIN, delay: D) -> Self {
        Self {
            spi,
            cs,
            dc,
            rst,
            delay,
            state: PanelState::Uninitialized,
            foreground: Color::NORMAL,
            last_rendered: None,
        }
    }

    /// Current bring-up state
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Active foreground color (updated by successful renders)
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// Last value successfully rendered, if any
    pub fn last_rendered(&self) -> Option<DisplayValue> {
        self.last_rendered
    }

    /// Assert chip-select with a guaranteed high-to-low edge
    fn select(&mut self) {
        self.cs.set_high();
        self.delay.delay_us(CS_SETTLE_US);
        self.cs.set_low();
    }

    /// Send one command byte in its own chip-select assertion
    fn send_command(&mut self, byte: u8) -> Result<(), PanelError<SPI::Error>> {
        self.select();
        self.dc.set_low();
        let mut echo = [0u8; 1];
        let result = self.spi.transfer(&mut echo, &[byte]);
        self.cs.set_high();
        result.map_err(PanelError::Io)
    }

    /// Send an opcode and its payload as one framed transaction
    ///
    /// A single chip-select assertion covers the opcode (D/C command) and
    /// the payload (D/C data), so the controller cannot see a partial
    /// primitive interleaved with other bytes.
    fn send_framed(&mut self, opcode: u8, payload: &[u8]) -> Result<(), PanelError<SPI::Error>> {
        debug_assert!(payload.len() <= MAX_PAYLOAD);

        self.select();
        self.dc.set_low();
        let mut echo = [0u8; MAX_PAYLOAD];
        let mut result = self.spi.transfer(&mut echo[..1], &[opcode]);
        if result.is_ok() {
            self.dc.set_high();
            result = self.spi.transfer(&mut echo[..payload.len()], payload);
        }
        self.cs.set_high();
        result.map_err(PanelError::Io)
    }

    /// Pulse reset and run the full initialization command sequence
    ///
    /// Valid from any state; calling it while `Ready` is the forced
    /// re-initialization path. On a transport failure the state machine is
    /// left in `Initializing` and the whole sequence must be retried.
    pub fn init(&mut self) -> Result<(), PanelError<SPI::Error>> {
        self.state = self.state.transition(PanelEvent::BeginReset);
        self.rst.set_high();
        self.delay.delay_ms(RESET_HOLD_MS);
        self.rst.set_low();
        self.delay.delay_ms(RESET_HOLD_MS);
        self.rst.set_high();
        self.delay.delay_ms(RESET_HOLD_MS);
        self.state = self.state.transition(PanelEvent::ResetDone);

        for &byte in INIT_SEQUENCE {
            self.send_command(byte).map_err(|e| match e {
                PanelError::Io(raw) => PanelError::Init(raw),
                other => other,
            })?;
        }

        // Write-only protocol: completing the sequence is the only
        // evidence of readiness.
        self.state = self.state.transition(PanelEvent::InitDone);
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), PanelError<SPI::Error>> {
        if self.state.can_draw() {
            Ok(())
        } else {
            Err(PanelError::NotReady)
        }
    }

    /// Draw a straight line
    pub fn draw_line(
        &mut self,
        start: Coordinate,
        end: Coordinate,
        color: Color,
    ) -> Result<(), PanelError<SPI::Error>> {
        self.ensure_ready()?;
        self.send_framed(
            cmd::DRAW_LINE,
            &[start.col, start.row, end.col, end.row, color.r, color.g, color.b],
        )
    }

    /// Draw a rectangle with independent outline and fill colors
    pub fn draw_rect(
        &mut self,
        top_left: Coordinate,
        bottom_right: Coordinate,
        outline: Color,
        fill: Color,
    ) -> Result<(), PanelError<SPI::Error>> {
        self.ensure_ready()?;
        self.send_framed(
            cmd::DRAW_RECT,
            &[
                top_left.col,
                top_left.row,
                bottom_right.col,
                bottom_right.row,
                outline.r,
                outline.g,
                outline.b,
                fill.r,
                fill.g,
                fill.b,
            ],
        )
    }

    /// Fill the whole addressable grid with one color
    pub fn fill_screen(&mut self, color: Color) -> Result<(), PanelError<SPI::Error>> {
        self.draw_rect(
            Coordinate::new(0x00, 0x00),
            Coordinate::new(GRID_MAX_COL, GRID_MAX_ROW),
            color,
            color,
        )
    }

    /// Hardware clear of the whole addressable grid
    pub fn clear(&mut self) -> Result<(), PanelError<SPI::Error>> {
        self.ensure_ready()?;
        self.send_framed(cmd::CLEAR_WINDOW, &[0x00, 0x00, GRID_MAX_COL, GRID_MAX_ROW])
    }

    /// Draw one segment primitive
    pub fn draw(&mut self, primitive: &SegmentPrimitive) -> Result<(), PanelError<SPI::Error>> {
        match *primitive {
            SegmentPrimitive::Line { start, end, color } => self.draw_line(start, end, color),
            SegmentPrimitive::Rect {
                top_left,
                bottom_right,
                outline,
                fill,
            } => self.draw_rect(top_left, bottom_right, outline, fill),
        }
    }

    /// Render a power reading as three large digits plus unit glyphs
    ///
    /// An unrepresentable reading (negative, or 10000 and above) emits no
    /// bus traffic at all and leaves the previous frame, color, and
    /// last-rendered value untouched. There is no partial-draw rollback:
    /// if a transfer fails mid-frame the panel shows an incomplete glyph
    /// until the next successful render overwrites it.
    pub fn render_power(&mut self, reading: i32) -> Result<(), PanelError<SPI::Error>> {
        let value = match format_power(reading) {
            Some(value) => value,
            None => return Ok(()),
        };

        self.ensure_ready()?;
        for primitive in frame_primitives(&value) {
            self.draw(&primitive)?;
        }
        self.foreground = value.foreground();
        self.last_rendered = Some(value);
        Ok(())
    }
}
