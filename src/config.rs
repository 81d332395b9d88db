//! Encoder configuration and decode-mode selection.
//!
//! All knobs are fixed at construction time; there is no runtime
//! reconfiguration of mode, steps or axis. The configuration mirrors the
//! conventional device-tree bindings for GPIO rotary encoders, including the
//! deprecated `half-period` boolean that predates `steps-per-period`.

use crate::consts::MIN_LINES;
use crate::decoder::DecodeMode;
use crate::error::ConfigError;

/// Construction-time configuration for one encoder instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub struct EncoderConfig {
    /// Number of discrete positions per full rotation. Only meaningful in
    /// absolute axis mode; must be nonzero when `rollover` is set.
    pub steps: u32,

    /// Steps per electrical period; selects the decode strategy together
    /// with the line count. `None` falls back to the deprecated
    /// `half_period` flag.
    pub steps_per_period: Option<u32>,

    /// Deprecated predecessor of `steps_per_period`, mapping to a value of
    /// 2 when set. Consulted only when `steps_per_period` is `None`.
    pub half_period: bool,

    /// Wrap the position modulo `steps` instead of clamping at the bounds.
    pub rollover: bool,

    /// Logical input axis events are reported on.
    pub axis: u16,

    /// Report relative deltas instead of maintaining an absolute position.
    pub relative_axis: bool,

    /// Treat the lines as a multi-bit absolute encoder; bypasses the
    /// quadrature state machines and `steps_per_period` entirely.
    pub absolute_encoder: bool,

    /// Keep the edge interrupts armed as wakeup sources across suspend.
    pub wakeup_source: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            steps: 0,
            steps_per_period: None,
            half_period: false,
            rollover: false,
            axis: 0,
            relative_axis: false,
            absolute_encoder: false,
            wakeup_source: false,
        }
    }
}

impl EncoderConfig {
    /// Resolves the effective steps-per-period value.
    ///
    /// The current key wins when present; the deprecated `half_period`
    /// boolean is only consulted in its absence and maps to 2. With neither
    /// set, the one-step-per-period behavior applies.
    pub fn resolve_steps_per_period(&self) -> u32 {
        match self.steps_per_period {
            Some(value) => value,
            None if self.half_period => 2,
            None => 1,
        }
    }

    /// Selects the quadrature decode strategy for `line_count` sensor
    /// lines.
    ///
    /// The resolved steps-per-period value is shifted right by the number
    /// of lines beyond two; the ratio left over must name one of the three
    /// strategies. Not consulted for absolute encoders.
    pub fn decode_mode(&self, line_count: usize) -> Result<DecodeMode, ConfigError> {
        if line_count < MIN_LINES {
            return Err(ConfigError::NotEnoughLines);
        }

        let steps_per_period = self.resolve_steps_per_period();
        match steps_per_period >> (line_count - MIN_LINES) {
            4 => Ok(DecodeMode::QuarterPeriod),
            2 => Ok(DecodeMode::HalfPeriod),
            1 => Ok(DecodeMode::FullPeriod),
            _ => Err(ConfigError::StepsPerPeriod(steps_per_period)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selection_two_lines() {
        let mut config = EncoderConfig::default();

        config.steps_per_period = Some(1);
        assert_eq!(config.decode_mode(2), Ok(DecodeMode::FullPeriod));

        config.steps_per_period = Some(2);
        assert_eq!(config.decode_mode(2), Ok(DecodeMode::HalfPeriod));

        config.steps_per_period = Some(4);
        assert_eq!(config.decode_mode(2), Ok(DecodeMode::QuarterPeriod));
    }

    #[test]
    fn test_invalid_steps_per_period_is_rejected() {
        let config = EncoderConfig {
            steps_per_period: Some(3),
            ..EncoderConfig::default()
        };
        assert_eq!(
            config.decode_mode(2),
            Err(ConfigError::StepsPerPeriod(3))
        );
    }

    #[test]
    fn test_ratio_shifts_with_extra_lines() {
        let config = EncoderConfig {
            steps_per_period: Some(8),
            ..EncoderConfig::default()
        };
        // 8 >> 1 == 4 for a three-line encoder.
        assert_eq!(config.decode_mode(3), Ok(DecodeMode::QuarterPeriod));
    }

    #[test]
    fn test_single_line_is_rejected() {
        let config = EncoderConfig::default();
        assert_eq!(config.decode_mode(1), Err(ConfigError::NotEnoughLines));
    }

    #[test]
    fn test_deprecated_half_period_fallback() {
        let config = EncoderConfig {
            half_period: true,
            ..EncoderConfig::default()
        };
        assert_eq!(config.resolve_steps_per_period(), 2);
        assert_eq!(config.decode_mode(2), Ok(DecodeMode::HalfPeriod));
    }

    #[test]
    fn test_current_key_wins_over_deprecated_alias() {
        let config = EncoderConfig {
            steps_per_period: Some(1),
            half_period: true,
            ..EncoderConfig::default()
        };
        assert_eq!(config.resolve_steps_per_period(), 1);
        assert_eq!(config.decode_mode(2), Ok(DecodeMode::FullPeriod));
    }

    #[test]
    fn test_neither_key_defaults_to_full_period() {
        let config = EncoderConfig::default();
        assert_eq!(config.decode_mode(2), Ok(DecodeMode::FullPeriod));
    }
}
