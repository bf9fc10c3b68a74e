//! Console output helpers shared by the handlers.
//!
//! Colors only when stdout is a terminal, so piped output stays plain.

use chrono::{DateTime, Local};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use turndown_core::ShiftEvent;
use turndown_types::{SessionStatus, TaskCompletion};

pub fn color_enabled() -> bool {
    std::io::stdout().is_terminal()
}

pub fn success(msg: &str) {
    if color_enabled() {
        println!("{}", msg.green());
    } else {
        println!("{}", msg);
    }
}

pub fn status_display(status: SessionStatus) -> String {
    if !color_enabled() {
        return status.to_string();
    }
    match status {
        SessionStatus::InProgress => status.to_string().yellow().to_string(),
        SessionStatus::Completed => status.to_string().green().to_string(),
    }
}

pub fn format_time(ts: DateTime<Local>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

pub fn task_line(completion: &TaskCompletion) -> String {
    format!(
        "  - {} at {}",
        completion.task_id,
        format_time(completion.completed_at)
    )
}

/// One line per lifecycle notification, to stderr so it never mixes
/// with machine-readable stdout.
pub fn event_line(event: &ShiftEvent) {
    eprintln!(
        "[{}] {} room {} by {}",
        format_time(event.timestamp()),
        event.name(),
        event.room_id(),
        event.actor_id()
    );
}
