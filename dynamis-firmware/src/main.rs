//! Dynamis - Power Monitor Firmware
//!
//! Reads instantaneous power from an INA219 over I2C and renders it as
//! large segment digits on an SSD1331 OLED over SPI.
//!
//! The render path is deliberately single-threaded and blocking: the
//! panel's chip-select framing is not atomic across callers, so one
//! control loop owns the sensor, the formatter, and the panel for the
//! lifetime of the firmware.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::spi::{self, Spi};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use dynamis_core::traits::PowerSensor;
use dynamis_drivers::display::Ssd1331;
use dynamis_drivers::sensor::ina219::{self, Ina219};
use dynamis_hal_rp2040::{BusyDelay, OutputLine, RpI2cBus, RpSpiBus};

/// Render loop interval in milliseconds
const RENDER_INTERVAL_MS: u64 = 500;

/// Power register LSB in microwatts for this board's shunt/calibration
const POWER_LSB_UW: u32 = 2_000;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Dynamis firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Panel on SPI0 plus three control lines
    let mut spi_config = spi::Config::default();
    spi_config.frequency = 4_000_000;
    let spi = Spi::new_blocking(p.SPI0, p.PIN_18, p.PIN_19, p.PIN_16, spi_config);

    let cs = OutputLine::new(Output::new(p.PIN_17, Level::High));
    let dc = OutputLine::new(Output::new(p.PIN_20, Level::Low));
    let rst = OutputLine::new(Output::new(p.PIN_21, Level::High));

    let mut panel = Ssd1331::new(RpSpiBus::new(spi), cs, dc, rst, BusyDelay);

    // Bring-up may be retried wholesale; nothing before Ready touches
    // the drawable state.
    while let Err(e) = panel.init() {
        warn!("panel bring-up failed, retrying: {}", e);
        Timer::after_millis(1_000).await;
    }
    info!("panel ready");

    // Sensor on I2C0
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c::Config::default());
    let mut sensor = Ina219::new(RpI2cBus::new(i2c), ina219::DEFAULT_ADDRESS, POWER_LSB_UW);
    if let Err(e) = sensor.configure() {
        warn!("sensor configuration failed: {}", e);
    }

    loop {
        // A failed or unrepresentable reading keeps the previous frame.
        match sensor.read_watts() {
            Some(watts) => {
                if let Err(e) = panel.render_power(watts) {
                    warn!("render failed: {}", e);
                }
            }
            None => warn!("no power reading available"),
        }

        Timer::after_millis(RENDER_INTERVAL_MS).await;
    }
}
