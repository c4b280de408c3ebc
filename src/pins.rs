//! Pin configuration capability for the encoder lines.

use embedded_hal::digital::InputPin;

/// An encoder line: a digital input that can be (re)configured as an input,
/// optionally with the internal pull-up enabled.
///
/// `embedded-hal` has no trait for pin mode changes, so HAL types are
/// usually wrapped in a small newtype that forwards to the HAL's own
/// configuration methods:
///
/// ```ignore
/// struct Line(embassy_rp::gpio::Flex<'static>);
///
/// impl EncoderPin for Line {
///     fn configure_input(&mut self, pull_up: bool) -> Result<(), Self::Error> {
///         self.0.set_as_input();
///         self.0.set_pull(if pull_up { Pull::Up } else { Pull::None });
///         Ok(())
///     }
/// }
/// ```
pub trait EncoderPin: InputPin {
    /// Configure the pin as a digital input.
    ///
    /// With `pull_up` set the internal pull-up resistor is enabled,
    /// otherwise the line is left floating (external pull-ups).
    fn configure_input(&mut self, pull_up: bool) -> Result<(), Self::Error>;
}
