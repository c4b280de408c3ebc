//! Millisecond time source used to measure the time between steps.

/// A monotonic millisecond counter.
///
/// The counter may wrap around at `u32::MAX`; the decoder computes elapsed
/// time with wrapping subtraction. It must never go backwards otherwise.
///
/// Any `Fn() -> u32` is a clock, which keeps tests and simple HALs short:
///
/// ```
/// use halfstep_encoder::MillisClock;
///
/// let clock = || 42u32;
/// assert_eq!(clock.now_ms(), 42);
/// ```
pub trait MillisClock {
    /// Current time in milliseconds.
    fn now_ms(&self) -> u32;
}

impl<F> MillisClock for F
where
    F: Fn() -> u32,
{
    fn now_ms(&self) -> u32 {
        self()
    }
}

/// Clock backed by the Embassy time driver.
///
/// The 64-bit tick count is truncated to 32 bits, which wraps after about
/// 49 days.
#[cfg(feature = "embassy-time")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy-time")]
impl MillisClock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn closure_is_a_clock() {
        let now = Cell::new(7u32);
        let clock = || now.get();
        assert_eq!(clock.now_ms(), 7);
        now.set(8);
        assert_eq!(clock.now_ms(), 8);
    }
}
