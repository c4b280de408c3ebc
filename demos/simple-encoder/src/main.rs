//! Simple encoder example
//!
//! Demonstrates basic usage of the halfstep-encoder crate on the Raspberry
//! Pi Pico 2. Polls a half-step rotary encoder every millisecond, keeps a
//! running position, and logs every change via defmt.
//!
//! # Wiring
//!
//! | Signal | Pico 2 Pin | Notes                     |
//! |--------|------------|---------------------------|
//! | ENC A  | GP2        | Internal pull-up enabled  |
//! | ENC B  | GP3        | Internal pull-up enabled  |
//! | ENC C  | GND        | Common                    |

#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Flex, Pull};
use embassy_time::{Duration, Ticker};
use embedded_hal::digital::{ErrorType, InputPin};
use {defmt_rtt as _, panic_probe as _};

use halfstep_encoder::{EmbassyClock, EncoderConfig, EncoderError, EncoderPin, RotaryHalfStep};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

/// Polling period. Mechanical encoders need a sample at least every few
/// milliseconds to avoid missing an intermediate reading.
const POLL_PERIOD: Duration = Duration::from_millis(1);

/// Encoder line on an RP2350 GPIO.
struct EncoderLine(Flex<'static>);

impl ErrorType for EncoderLine {
    type Error = Infallible;
}

impl InputPin for EncoderLine {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.is_high())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.is_low())
    }
}

impl EncoderPin for EncoderLine {
    fn configure_input(&mut self, pull_up: bool) -> Result<(), Infallible> {
        self.0.set_as_input();
        self.0.set_pull(if pull_up { Pull::Up } else { Pull::None });
        Ok(())
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- Encoder lines (GP2 = A, GP3 = B) ---
    let line_a = EncoderLine(Flex::new(p.PIN_2));
    let line_b = EncoderLine(Flex::new(p.PIN_3));

    let mut encoder = match RotaryHalfStep::new(line_a, line_b, EmbassyClock, EncoderConfig::default()) {
        Ok(encoder) => encoder,
        Err(EncoderError::Pin(never)) => match never {},
    };

    info!(
        "Encoder example started (sensitivity {}), rotate the knob to see position changes",
        encoder.sensitivity()
    );

    let mut position: i32 = 0;
    let mut ticker = Ticker::every(POLL_PERIOD);

    // Main loop: sample, accumulate, log on change.
    loop {
        ticker.next().await;

        let delta = match encoder.read() {
            Ok(delta) => delta,
            Err(EncoderError::Pin(never)) => match never {},
        };

        if delta != 0 {
            position += i32::from(delta);
            info!("Position: {} (delta {})", position, delta);
        }
    }
}
