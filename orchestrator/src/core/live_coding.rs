//! Live-coding view of the file currently being typed
//!
//! A single slot: it describes at most one file at a time and is reset
//! between files and when a generation ends.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use shared::Language;

const MIN_LINE_DELAY_MS: u64 = 50;
const MAX_LINE_DELAY_MS: u64 = 150;
/// Nominal time budget for typing one whole file
const TYPING_BUDGET_MS: u64 = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    pub fn from_line_count(lines: usize) -> Self {
        if lines > 50 {
            Complexity::Complex
        } else if lines > 25 {
            Complexity::Medium
        } else {
            Complexity::Simple
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Complexity::Simple => "simple",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        };
        write!(f, "{label}")
    }
}

/// Cosmetic pattern labels shown next to the file being typed
pub fn pattern_labels(language: Language) -> Vec<&'static str> {
    match language {
        Language::Html => vec!["Semantic Markup", "Accessibility", "Responsive Layout"],
        Language::Css => vec!["Flexbox Layout", "CSS Variables", "Transitions"],
        Language::Javascript | Language::Typescript => {
            vec!["Event Delegation", "State Management", "DOM Manipulation"]
        }
        Language::Python => vec!["Modular Functions", "Error Handling"],
        Language::Json => vec!["Configuration"],
        Language::Text => vec![],
    }
}

/// Delay between typed lines; larger files type faster per line
pub fn line_delay(total_lines: usize) -> Duration {
    let per_line = match total_lines {
        0 => MAX_LINE_DELAY_MS,
        n => TYPING_BUDGET_MS / n as u64,
    };
    Duration::from_millis(per_line.clamp(MIN_LINE_DELAY_MS, MAX_LINE_DELAY_MS))
}

/// Percent of a file typed after `typed` of `total` lines
///
/// Only the final line reports 100; rounding never reaches it early.
pub fn typing_progress(typed: usize, total: usize) -> u8 {
    if total == 0 || typed >= total {
        return 100;
    }
    let percent = (typed as f64 * 100.0 / total as f64).round() as u8;
    percent.min(99)
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveCodingState {
    pub file_name: String,
    pub content: String,
    pub is_active: bool,
    pub language: Option<Language>,
    pub progress: u8,
    pub complexity: Option<Complexity>,
    pub patterns: Vec<&'static str>,
    #[serde(skip)]
    total_lines: usize,
    #[serde(skip)]
    typed_lines: usize,
}

impl LiveCodingState {
    /// Start typing a new file, replacing whatever was shown before
    pub fn begin(&mut self, file_name: &str, language: Language, total_lines: usize) {
        *self = Self {
            file_name: file_name.to_string(),
            content: String::new(),
            is_active: true,
            language: Some(language),
            progress: 0,
            complexity: Some(Complexity::from_line_count(total_lines)),
            patterns: pattern_labels(language),
            total_lines,
            typed_lines: 0,
        };
    }

    /// Append one line and return the updated progress
    pub fn push_line(&mut self, line: &str) -> u8 {
        self.content.push_str(line);
        self.content.push('\n');
        self.typed_lines += 1;
        self.progress = typing_progress(self.typed_lines, self.total_lines);
        self.progress
    }

    pub fn typed_lines(&self) -> usize {
        self.typed_lines
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
