//! Simulation and window tuning
//!
//! Nothing is read from disk or the environment; the defaults are the
//! compiled-in constants from `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::DemoError;
use crate::sim::Rect;

/// Tuning values handed to the simulation and the window shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Ticks per second
    pub tick_rate: u32,
    /// Velocity added per tick by gravity
    pub gravity: i32,
    /// Speed kept on a bounce (0.0 - 1.0, exclusive)
    pub damping: f32,
    /// Velocity set by arrow keys
    pub key_impulse: i32,
    /// Where the body starts
    pub body_start: Rect,
    /// Requested window size in pixels
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        let (x, y, w, h) = BODY_START;
        Self {
            tick_rate: TICK_RATE,
            gravity: GRAVITY,
            damping: DAMPING,
            key_impulse: KEY_IMPULSE,
            body_start: Rect::new(x, y, w, h),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
        }
    }
}

impl SimConfig {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), DemoError> {
        if self.tick_rate == 0 {
            return Err(DemoError::InvalidConfig("tick rate must be nonzero".into()));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(DemoError::InvalidConfig(format!(
                "damping must be in (0, 1), got {}",
                self.damping
            )));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(DemoError::InvalidConfig("window size must be nonzero".into()));
        }
        Ok(())
    }

    /// One-line JSON rendering for the startup log
    pub fn to_log_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("{self:?} ({e})"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_rate, 24);
        assert_eq!(config.gravity, 30);
        assert_eq!(config.body_start, Rect::new(100, 100, 100, 100));
    }

    #[test]
    fn test_rejects_bad_damping() {
        for damping in [0.0, 1.0, -0.5, 1.5, f32::NAN] {
            let config = SimConfig {
                damping,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(DemoError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_rejects_zero_tick_rate() {
        let config = SimConfig {
            tick_rate: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_string_is_json() {
        let json = SimConfig::default().to_log_string();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SimConfig::default());
    }
}
