//! Terminal rendering of generation events

use crate::core::{CancelPoint, GenerationEvent};

const BAR_WIDTH: usize = 20;

/// Progress bar like `[#####---------------] 25%`
pub fn progress_bar(percent: u8) -> String {
    let percent = percent.min(100) as usize;
    let filled = percent * BAR_WIDTH / 100;
    format!("[{}{}] {percent:>3}%", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// One display line for `event`, or `None` when the event has no output
pub fn render_event(event: &GenerationEvent) -> Option<String> {
    let line = match event {
        GenerationEvent::Submitted { prompt } => format!("> {prompt}"),
        GenerationEvent::StageStarted { stage, progress } => {
            format!("{} {}...", progress_bar(*progress), stage.label())
        }
        GenerationEvent::StageCompleted { .. } => return None,
        GenerationEvent::FallbackEngaged { reason } => {
            format!("(offline mode: server unavailable, showing local content; {reason})")
        }
        GenerationEvent::FileStarted {
            file_name,
            language,
            total_lines,
            complexity,
        } => format!("--- {file_name} ({language}, {total_lines} lines, {complexity}) ---"),
        GenerationEvent::LiveUpdate { line, lines_typed, .. } => format!("{lines_typed:>4} | {line}"),
        GenerationEvent::FileCompleted { file_name, lines } => format!("--- {file_name} done ({lines} lines) ---"),
        GenerationEvent::Completed { files, .. } if files.is_empty() => "Done.".to_string(),
        GenerationEvent::Completed { files, .. } => format!("Done. Created {}", files.join(", ")),
        GenerationEvent::Cancelled { point } => format!("Generation cancelled {}", describe_point(point)),
    };
    Some(line)
}

fn describe_point(point: &CancelPoint) -> String {
    match point {
        CancelPoint::Stage { stage } => format!("before {stage}"),
        CancelPoint::AwaitingResponse => "while waiting for the server".to_string(),
        CancelPoint::File { file_name } => format!("before {file_name}"),
        CancelPoint::Line { file_name, line } => format!("at {file_name}:{line}"),
        CancelPoint::BeforeCompletion => "before completion".to_string(),
    }
}
