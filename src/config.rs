//! Construction-time encoder configuration.

use crate::decoder::DEFAULT_SENSITIVITY;

/// Configuration for [`RotaryHalfStep`](crate::RotaryHalfStep).
///
/// [`EncoderConfig::default()`] enables the internal pull-ups and uses a
/// sensitivity of 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderConfig {
    /// Enable the internal pull-up resistors on both lines. Default: `true`.
    pub pull_up: bool,
    /// Speed detection sensitivity, 0..=255. A higher value is more
    /// sensitive to rotation speed; 0 disables speed detection.
    /// Default: 100.
    pub sensitivity: u8,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            pull_up: true,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let c = EncoderConfig::default();
        assert!(c.pull_up);
        assert_eq!(c.sensitivity, 100);
    }

    #[test]
    fn struct_update_keeps_defaults() {
        let c = EncoderConfig {
            sensitivity: 0,
            ..EncoderConfig::default()
        };
        assert!(c.pull_up);
        assert_eq!(c.sensitivity, 0);
    }
}
