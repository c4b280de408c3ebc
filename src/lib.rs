//! Three-speed half-step rotary encoder decoder.
//!
//! Decodes a mechanical quadrature encoder with detents at both `00` and
//! `11` from two polled GPIO lines, filters contact bounce, and scales each
//! step by how quickly it followed the previous one.
//!
//! # Architecture
//!
//! The crate is split into two layers:
//!
//! - **[`HalfStepDecoder`]** - the pure decoder: a constant 6 × 4 state
//!   table plus the speed heuristic. Takes two pin levels and a timestamp,
//!   performs no I/O and cannot fail.
//! - **[`RotaryHalfStep`]** - owns two [`EncoderPin`]s and a
//!   [`MillisClock`], configures the pins once, and samples them on every
//!   [`read`](RotaryHalfStep::read).
//!
//! # Quick start
//!
//! ```ignore
//! use halfstep_encoder::{EncoderConfig, RotaryHalfStep};
//!
//! let mut encoder = RotaryHalfStep::new(pin1, pin2, clock, EncoderConfig::default())?;
//!
//! // Poll from a loop, at least every few milliseconds.
//! match encoder.read()? {
//!     0 => {}
//!     delta => position += i32::from(delta),
//! }
//! ```
//!
//! # Features
//!
//! - **`defmt`** - [`defmt::Format`] implementations on public types and
//!   trace logging of decoded steps.
//! - **`embassy-time`** - `EmbassyClock`, a [`MillisClock`] backed by the
//!   Embassy time driver.

#![cfg_attr(not(test), no_std)]

pub use clock::MillisClock;
#[cfg(feature = "embassy-time")]
pub use clock::EmbassyClock;
pub use config::EncoderConfig;
pub use decoder::{HalfStepDecoder, Speed, Step, DEFAULT_SENSITIVITY};
pub use encoder::RotaryHalfStep;
pub use error::EncoderError;
pub use pins::EncoderPin;
pub use table::{DecoderState, Direction, Transition};

mod clock;
mod config;
mod decoder;
mod encoder;
mod error;
mod pins;
pub mod table;
