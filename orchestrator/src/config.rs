//! Orchestrator configuration

use std::time::Duration;

/// Default deadline for the server round-trip
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Pacing delay per stage weight point
pub const DEFAULT_STAGE_UNIT: Duration = Duration::from_millis(20);

/// Extra pause injected after every `thinking_interval` lines
pub const DEFAULT_THINKING_PAUSE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq)]
pub struct OrchestratorConfig {
    pub timeout: Duration,
    /// Multiplier on every pacing delay; 0 disables pacing
    pub typing_scale: f64,
    pub stage_unit: Duration,
    pub thinking_pause: Duration,
    pub thinking_interval: usize,
    /// Check the cancel token on every typed line instead of once per file
    pub per_line_cancel: bool,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            typing_scale: 1.0,
            stage_unit: DEFAULT_STAGE_UNIT,
            thinking_pause: DEFAULT_THINKING_PAUSE,
            thinking_interval: 8,
            per_line_cancel: false,
        }
    }
}

impl OrchestratorConfig {
    /// Configuration with all pacing disabled
    pub fn instant() -> Self {
        Self {
            typing_scale: 0.0,
            ..Self::default()
        }
    }

    /// Apply `typing_scale` to a nominal delay
    pub fn scaled(&self, nominal: Duration) -> Duration {
        if !self.typing_scale.is_finite() || self.typing_scale <= 0.0 {
            return Duration::ZERO;
        }
        if self.typing_scale == 1.0 {
            return nominal;
        }
        nominal.mul_f64(self.typing_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaling() {
        let config = OrchestratorConfig {
            typing_scale: 0.5,
            ..OrchestratorConfig::default()
        };
        assert_eq!(config.scaled(Duration::from_millis(100)), Duration::from_millis(50));
        assert_eq!(OrchestratorConfig::instant().scaled(Duration::from_secs(1)), Duration::ZERO);

        let broken = OrchestratorConfig {
            typing_scale: f64::NAN,
            ..OrchestratorConfig::default()
        };
        assert_eq!(broken.scaled(Duration::from_secs(1)), Duration::ZERO);
    }
}
