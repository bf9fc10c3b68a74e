use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::catalog::{RoomId, TaskId};

/// Store-assigned session identifier, monotonically unique within a kind.
pub type SessionId = i64;

/// Lifecycle state of a session.
///
/// Transitions only InProgress -> Completed; sessions are never reopened
/// and never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::InProgress => "in_progress",
            SessionStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "in_progress" => Some(SessionStatus::InProgress),
            "completed" => Some(SessionStatus::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The two session collections the store keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Cleaning,
    SpotCheck,
}

impl SessionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKind::Cleaning => "cleaning",
            SessionKind::SpotCheck => "spot_check",
        }
    }
}

impl std::str::FromStr for SessionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cleaning" => Ok(SessionKind::Cleaning),
            "spot_check" | "spotcheck" | "spot-check" => Ok(SessionKind::SpotCheck),
            other => Err(format!(
                "unknown session kind '{}' (expected cleaning or spot_check)",
                other
            )),
        }
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One completed task within a cleaning session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCompletion {
    pub task_id: TaskId,
    pub completed_at: DateTime<Local>,
}

/// One staff member's attempt to clean one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningSession {
    pub id: SessionId,
    pub room_id: RoomId,
    pub staff_id: String,
    pub started_at: DateTime<Local>,
    /// Absent until the session completes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Local>>,
    /// Completed tasks in the order they were first completed.
    pub tasks: Vec<TaskCompletion>,
    pub status: SessionStatus,
}

impl CleaningSession {
    pub fn is_in_progress(&self) -> bool {
        self.status == SessionStatus::InProgress
    }

    /// Completion entry for a task, if it has been completed.
    pub fn task_completion(&self, task_id: &TaskId) -> Option<&TaskCompletion> {
        self.tasks.iter().find(|t| &t.task_id == task_id)
    }
}

/// One supervisor's audit of one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotCheckSession {
    pub id: SessionId,
    pub room_id: RoomId,
    pub supervisor_id: String,
    pub started_at: DateTime<Local>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Local>>,
    /// Required, non-empty once the session completes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: SessionStatus,
}

impl SpotCheckSession {
    pub fn is_in_progress(&self) -> bool {
        self.status == SessionStatus::InProgress
    }
}

/// A session of either kind, for kind-agnostic queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionRecord {
    Cleaning(CleaningSession),
    SpotCheck(SpotCheckSession),
}

impl SessionRecord {
    pub fn kind(&self) -> SessionKind {
        match self {
            SessionRecord::Cleaning(_) => SessionKind::Cleaning,
            SessionRecord::SpotCheck(_) => SessionKind::SpotCheck,
        }
    }

    pub fn id(&self) -> SessionId {
        match self {
            SessionRecord::Cleaning(s) => s.id,
            SessionRecord::SpotCheck(s) => s.id,
        }
    }

    pub fn room_id(&self) -> &RoomId {
        match self {
            SessionRecord::Cleaning(s) => &s.room_id,
            SessionRecord::SpotCheck(s) => &s.room_id,
        }
    }

    pub fn status(&self) -> SessionStatus {
        match self {
            SessionRecord::Cleaning(s) => s.status,
            SessionRecord::SpotCheck(s) => s.status,
        }
    }

    pub fn ended_at(&self) -> Option<DateTime<Local>> {
        match self {
            SessionRecord::Cleaning(s) => s.ended_at,
            SessionRecord::SpotCheck(s) => s.ended_at,
        }
    }
}
