//! Half-step decoder core with three-speed step classification.
//!
//! [`HalfStepDecoder`] knows nothing about pins or clocks: callers feed it
//! two already-sampled levels and a millisecond timestamp. See
//! [`RotaryHalfStep`](crate::RotaryHalfStep) for the wrapper that does the
//! sampling.

use crate::table::{self, DecoderState, Direction};

/// Default sensitivity (milliseconds between steps for the medium tier).
pub const DEFAULT_SENSITIVITY: u8 = 100;

/// Rotation speed tier of a completed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// Single notch.
    Slow,
    /// Multiple notches.
    Medium,
    /// Multiple notches, fast.
    Fast,
}

impl Speed {
    /// Classify the time since the previous step.
    ///
    /// - `elapsed_ms < sensitivity / 2` → [`Speed::Fast`]
    /// - `elapsed_ms < sensitivity` → [`Speed::Medium`]
    /// - otherwise → [`Speed::Slow`]
    ///
    /// A sensitivity of 0 therefore always yields [`Speed::Slow`].
    pub fn classify(elapsed_ms: u32, sensitivity: u8) -> Self {
        let sensitivity = u32::from(sensitivity);
        if elapsed_ms < sensitivity / 2 {
            Speed::Fast
        } else if elapsed_ms < sensitivity {
            Speed::Medium
        } else {
            Speed::Slow
        }
    }

    /// Step magnitude for this tier (1, 2 or 3).
    pub const fn multiplier(self) -> i8 {
        match self {
            Speed::Slow => 1,
            Speed::Medium => 2,
            Speed::Fast => 3,
        }
    }
}

/// A completed detent step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    pub direction: Direction,
    pub speed: Speed,
}

impl Step {
    /// Signed, speed-scaled delta in `-3..=3` (never 0).
    pub const fn delta(self) -> i8 {
        self.direction.sign() * self.speed.multiplier()
    }
}

/// State-holding half-step decoder.
///
/// # Example
///
/// ```
/// use halfstep_encoder::HalfStepDecoder;
///
/// let mut decoder = HalfStepDecoder::default();
///
/// // One clockwise detent from the `11` rest position: 11 -> 01 -> 00.
/// assert_eq!(decoder.sample(true, true, 1_000), 0);
/// assert_eq!(decoder.sample(false, true, 1_002), 0);
/// assert_eq!(decoder.sample(false, false, 1_004), 1);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HalfStepDecoder {
    state: DecoderState,
    sensitivity: u8,
    last_change_ms: u32,
}

impl Default for HalfStepDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_SENSITIVITY)
    }
}

impl HalfStepDecoder {
    /// Create a decoder in the [`Start`](DecoderState::Start) state.
    ///
    /// `sensitivity` is 0..=255; higher values report fast rotation more
    /// readily, 0 disables speed detection.
    pub const fn new(sensitivity: u8) -> Self {
        Self {
            state: DecoderState::Start,
            sensitivity,
            last_change_ms: 0,
        }
    }

    /// Feed one pin sample and return the step delta.
    ///
    /// Returns:
    /// * `-3` / `3` - counter-clockwise / clockwise, multiple notches fast
    /// * `-2` / `2` - counter-clockwise / clockwise, multiple notches
    /// * `-1` / `1` - counter-clockwise / clockwise, single notch
    /// * `0` - no completed step
    ///
    /// Call this at least every few milliseconds so that no pin change is
    /// missed.
    pub fn sample(&mut self, pin1: bool, pin2: bool, now_ms: u32) -> i8 {
        self.sample_step(pin1, pin2, now_ms).map_or(0, Step::delta)
    }

    /// Same as [`sample`](Self::sample), returning the typed [`Step`].
    pub fn sample_step(&mut self, pin1: bool, pin2: bool, now_ms: u32) -> Option<Step> {
        let transition = table::transition(self.state, table::symbol(pin1, pin2));
        self.state = transition.next;

        let direction = transition.direction?;

        // The first step measures against a zero timestamp.
        let elapsed_ms = now_ms.wrapping_sub(self.last_change_ms);
        self.last_change_ms = now_ms;

        let step = Step {
            direction,
            speed: Speed::classify(elapsed_ms, self.sensitivity),
        };

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "step: {} {} after {} ms",
            step.direction,
            step.speed,
            elapsed_ms
        );

        Some(step)
    }

    // ── Configuration ────────────────────────────────────────────────

    /// Replace the sensitivity. Applies from the next completed step.
    pub fn set_sensitivity(&mut self, sensitivity: u8) {
        self.sensitivity = sensitivity;
    }

    /// Current sensitivity.
    pub fn sensitivity(&self) -> u8 {
        self.sensitivity
    }

    // ── Inspection ───────────────────────────────────────────────────

    /// Current table state.
    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Timestamp of the last completed step (0 before the first one).
    pub fn last_change_ms(&self) -> u32 {
        self.last_change_ms
    }
}
