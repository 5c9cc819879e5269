//! Visualizer configuration, validation, and error types.
//!
//! [`VisualizerConfig`] is the input for constructing a
//! [`Controller`](crate::controller::Controller). [`validate()`](VisualizerConfig::validate)
//! checks its bounds once at startup; the controller re-checks individual
//! settings as they change.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use sortviz_core::{AlgorithmKind, ArrayShape};

/// Smallest array the control surface accepts.
pub const MIN_ARRAY_SIZE: usize = 5;

/// Largest array the control surface accepts.
pub const MAX_ARRAY_SIZE: usize = 200;

/// Longest delay between actions, in milliseconds.
pub const MAX_DELAY_MS: u64 = 5000;

/// Highest speed level of the inverse-mapped speed control.
pub const MAX_SPEED_LEVEL: u64 = 1000;

/// Delay floor for speed levels, in milliseconds.
const MIN_LEVEL_DELAY_MS: u64 = 5;

// ── Speed ──────────────────────────────────────────────────────────

/// Pace of playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Speed {
    /// A fixed delay between actions.
    DelayMs(u64),
    /// A speed level in `0..=MAX_SPEED_LEVEL`; higher is faster. Maps to a
    /// delay of `max(5, 1000 - level)` milliseconds.
    Level(u64),
}

impl Speed {
    /// The delay between two applied actions.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use sortviz_engine::Speed;
    ///
    /// assert_eq!(Speed::DelayMs(300).delay(), Duration::from_millis(300));
    /// assert_eq!(Speed::Level(700).delay(), Duration::from_millis(300));
    /// assert_eq!(Speed::Level(1000).delay(), Duration::from_millis(5));
    /// ```
    pub fn delay(self) -> Duration {
        let ms = match self {
            Self::DelayMs(ms) => ms,
            Self::Level(level) => 1000u64.saturating_sub(level).max(MIN_LEVEL_DELAY_MS),
        };
        Duration::from_millis(ms)
    }

    /// Check the bounds of this speed.
    pub fn validate(self) -> Result<(), ConfigError> {
        match self {
            Self::DelayMs(ms) if ms > MAX_DELAY_MS => {
                Err(ConfigError::DelayOutOfRange { value: ms })
            }
            Self::Level(level) if level > MAX_SPEED_LEVEL => {
                Err(ConfigError::SpeedLevelOutOfRange { value: level })
            }
            _ => Ok(()),
        }
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::DelayMs(300)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DelayMs(ms) => write!(f, "{ms}ms"),
            Self::Level(level) => write!(f, "level {level} ({}ms)", self.delay().as_millis()),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`VisualizerConfig::validate()`] and the
/// controller's setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Array size outside `MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE`.
    SizeOutOfRange {
        /// The rejected size.
        value: usize,
    },
    /// Delay above `MAX_DELAY_MS`.
    DelayOutOfRange {
        /// The rejected delay in milliseconds.
        value: u64,
    },
    /// Speed level above `MAX_SPEED_LEVEL`.
    SpeedLevelOutOfRange {
        /// The rejected level.
        value: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeOutOfRange { value } => write!(
                f,
                "array size {value} is outside {MIN_ARRAY_SIZE}..={MAX_ARRAY_SIZE}"
            ),
            Self::DelayOutOfRange { value } => {
                write!(f, "delay {value}ms exceeds maximum of {MAX_DELAY_MS}ms")
            }
            Self::SpeedLevelOutOfRange { value } => {
                write!(f, "speed level {value} exceeds maximum of {MAX_SPEED_LEVEL}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── VisualizerConfig ───────────────────────────────────────────────

/// Complete configuration for a visualizer session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualizerConfig {
    /// Number of elements in generated arrays. Default: 60.
    pub size: usize,
    /// Layout of generated arrays. Default: random.
    pub shape: ArrayShape,
    /// Algorithm to visualize. Default: bubble.
    pub algorithm: AlgorithmKind,
    /// Playback pace. Default: 300 ms per action.
    pub speed: Speed,
    /// Seed for array generation.
    pub seed: u64,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            size: 60,
            shape: ArrayShape::default(),
            algorithm: AlgorithmKind::default(),
            speed: Speed::default(),
            seed: 0,
        }
    }
}

impl VisualizerConfig {
    /// Validate all bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_size(self.size)?;
        self.speed.validate()
    }
}

/// Check that `size` is an accepted array size.
pub fn validate_size(size: usize) -> Result<(), ConfigError> {
    if (MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(ConfigError::SizeOutOfRange { value: size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = VisualizerConfig::default();
        assert_eq!(cfg.size, 60);
        assert_eq!(cfg.speed.delay(), Duration::from_millis(300));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn size_bounds() {
        let mut cfg = VisualizerConfig::default();
        for ok in [MIN_ARRAY_SIZE, MAX_ARRAY_SIZE] {
            cfg.size = ok;
            assert!(cfg.validate().is_ok(), "size {ok}");
        }
        for bad in [0, MIN_ARRAY_SIZE - 1, MAX_ARRAY_SIZE + 1] {
            cfg.size = bad;
            assert_eq!(
                cfg.validate(),
                Err(ConfigError::SizeOutOfRange { value: bad })
            );
        }
    }

    #[test]
    fn speed_bounds() {
        assert!(Speed::DelayMs(0).validate().is_ok());
        assert!(Speed::DelayMs(MAX_DELAY_MS).validate().is_ok());
        assert_eq!(
            Speed::DelayMs(MAX_DELAY_MS + 1).validate(),
            Err(ConfigError::DelayOutOfRange { value: 5001 })
        );
        assert_eq!(
            Speed::Level(1001).validate(),
            Err(ConfigError::SpeedLevelOutOfRange { value: 1001 })
        );
    }

    #[test]
    fn level_delay_is_inverse_with_floor() {
        assert_eq!(Speed::Level(0).delay(), Duration::from_millis(1000));
        assert_eq!(Speed::Level(500).delay(), Duration::from_millis(500));
        assert_eq!(Speed::Level(996).delay(), Duration::from_millis(5));
        assert_eq!(Speed::Level(999).delay(), Duration::from_millis(5));
    }

    #[test]
    fn error_messages() {
        let e = ConfigError::SizeOutOfRange { value: 3 };
        assert_eq!(e.to_string(), "array size 3 is outside 5..=200");
        assert_eq!(Speed::Level(700).to_string(), "level 700 (300ms)");
    }
}
