//! Fixed generation stage plan

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// One phase of the simulated pipeline, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStage {
    Analysis,
    Architecture,
    Structure,
    Implementation,
    Optimization,
}

impl GenerationStage {
    pub const ALL: [GenerationStage; 5] = [
        GenerationStage::Analysis,
        GenerationStage::Architecture,
        GenerationStage::Structure,
        GenerationStage::Implementation,
        GenerationStage::Optimization,
    ];

    /// Nominal relative duration
    pub fn weight(&self) -> u32 {
        match self {
            GenerationStage::Analysis => 15,
            GenerationStage::Architecture => 20,
            GenerationStage::Structure => 15,
            GenerationStage::Implementation => 35,
            GenerationStage::Optimization => 15,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GenerationStage::Analysis => "Analyzing requirements",
            GenerationStage::Architecture => "Designing architecture",
            GenerationStage::Structure => "Planning file structure",
            GenerationStage::Implementation => "Implementing features",
            GenerationStage::Optimization => "Optimizing code",
        }
    }

    pub fn total_weight() -> u32 {
        Self::ALL.iter().map(GenerationStage::weight).sum()
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|stage| stage == self).unwrap_or(0)
    }

    /// Percent complete once every stage before this one has finished
    pub fn progress_before(&self) -> u8 {
        cumulative_percent(&Self::ALL[..self.position()])
    }

    /// Percent complete once this stage has finished
    pub fn progress_after(&self) -> u8 {
        cumulative_percent(&Self::ALL[..=self.position()])
    }

    /// Pacing delay for this stage; `jitter` is a factor around 1.0
    pub fn delay(&self, unit: Duration, jitter: f64) -> Duration {
        (unit * self.weight()).mul_f64(jitter.clamp(0.0, 2.0))
    }
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GenerationStage::Analysis => "analysis",
            GenerationStage::Architecture => "architecture",
            GenerationStage::Structure => "structure",
            GenerationStage::Implementation => "implementation",
            GenerationStage::Optimization => "optimization",
        };
        write!(f, "{name}")
    }
}

fn cumulative_percent(completed: &[GenerationStage]) -> u8 {
    let done: u32 = completed.iter().map(GenerationStage::weight).sum();
    let percent = (f64::from(done) * 100.0 / f64::from(GenerationStage::total_weight())).round();
    percent.min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_cumulative_weight() {
        assert_eq!(GenerationStage::Analysis.progress_before(), 0);
        assert_eq!(GenerationStage::Analysis.progress_after(), 15);
        assert_eq!(GenerationStage::Architecture.progress_after(), 35);
        assert_eq!(GenerationStage::Implementation.progress_before(), 50);
        assert_eq!(GenerationStage::Optimization.progress_after(), 100);
    }

    #[test]
    fn test_progress_monotonic_across_plan() {
        let mut last = 0;
        for stage in GenerationStage::ALL {
            assert!(stage.progress_before() >= last);
            assert!(stage.progress_after() > stage.progress_before());
            last = stage.progress_after();
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_delay_scales_with_weight() {
        let unit = Duration::from_millis(20);
        let close = |actual: Duration, expected_ms: u64| {
            let diff = actual.as_secs_f64() - Duration::from_millis(expected_ms).as_secs_f64();
            assert!(diff.abs() < 0.001, "{actual:?} vs {expected_ms}ms");
        };
        close(GenerationStage::Implementation.delay(unit, 1.0), 700);
        close(GenerationStage::Analysis.delay(unit, 0.8), 240);
        assert_eq!(GenerationStage::Analysis.delay(unit, 0.0), Duration::ZERO);
    }
}
