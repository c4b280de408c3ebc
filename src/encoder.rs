//! High-level interface for a two-pin half-step rotary encoder.
//!
//! [`RotaryHalfStep`] owns the two encoder lines and a millisecond clock,
//! and forwards every sample to a [`HalfStepDecoder`].

use embedded_hal::digital::ErrorType;

use crate::clock::MillisClock;
use crate::config::EncoderConfig;
use crate::decoder::HalfStepDecoder;
use crate::error::EncoderError;
use crate::pins::EncoderPin;

/// Pin error type shared by both encoder lines.
type PinError<A> = <A as ErrorType>::Error;

/// Three-speed half-step rotary encoder on two GPIO lines.
///
/// # Example
///
/// ```ignore
/// use halfstep_encoder::{EncoderConfig, RotaryHalfStep};
///
/// // `pin1`/`pin2` implement `EncoderPin`, `clock` implements `MillisClock`
/// let mut encoder = RotaryHalfStep::new(pin1, pin2, clock, EncoderConfig::default())?;
///
/// let mut position = 0i32;
/// loop {
///     position += i32::from(encoder.read()?);
/// }
/// ```
pub struct RotaryHalfStep<A, B, C> {
    pin1: A,
    pin2: B,
    clock: C,
    decoder: HalfStepDecoder,
}

impl<A, B, C> RotaryHalfStep<A, B, C>
where
    A: EncoderPin,
    B: EncoderPin<Error = PinError<A>>,
    C: MillisClock,
{
    /// Configure both lines as inputs and create the encoder.
    ///
    /// This is the only pin configuration performed; the lines are not
    /// touched again until [`read`](Self::read).
    ///
    /// # Arguments
    /// * `pin1` - encoder line sampled into the high bit
    /// * `pin2` - encoder line sampled into the low bit
    /// * `clock` - monotonic millisecond source for speed detection
    /// * `config` - pull-up and sensitivity settings
    ///
    /// # Errors
    /// * [`EncoderError::Pin`] if either line cannot be configured
    pub fn new(
        mut pin1: A,
        mut pin2: B,
        clock: C,
        config: EncoderConfig,
    ) -> Result<Self, EncoderError<PinError<A>>> {
        pin1.configure_input(config.pull_up)?;
        pin2.configure_input(config.pull_up)?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "half-step encoder: pull_up={}, sensitivity={}",
            config.pull_up,
            config.sensitivity
        );

        Ok(Self {
            pin1,
            pin2,
            clock,
            decoder: HalfStepDecoder::new(config.sensitivity),
        })
    }

    /// Sample both lines and return the speed-scaled step delta.
    ///
    /// See [`HalfStepDecoder::sample`] for the meaning of the result.
    /// Call this as often as possible; polling every few milliseconds
    /// works for most mechanical encoders.
    ///
    /// # Errors
    /// * [`EncoderError::Pin`] if either line cannot be read. The decoder
    ///   state is left untouched in that case.
    pub fn read(&mut self) -> Result<i8, EncoderError<PinError<A>>> {
        let level1 = self.pin1.is_high()?;
        let level2 = self.pin2.is_high()?;
        let now_ms = self.clock.now_ms();

        Ok(self.decoder.sample(level1, level2, now_ms))
    }

    /// Set the speed detection sensitivity (0..=255).
    pub fn set_sensitivity(&mut self, sensitivity: u8) {
        self.decoder.set_sensitivity(sensitivity);
    }

    /// Current speed detection sensitivity.
    pub fn sensitivity(&self) -> u8 {
        self.decoder.sensitivity()
    }

    /// The underlying decoder.
    pub fn decoder(&self) -> &HalfStepDecoder {
        &self.decoder
    }

    /// Give back the pins and the clock.
    pub fn release(self) -> (A, B, C) {
        (self.pin1, self.pin2, self.clock)
    }
}
