use chrono::{DateTime, Local};
use serde::Serialize;
use turndown_types::RoomId;

/// Lifecycle notification emitted after a successful transition.
///
/// Advisory only: events are delivered after the store mutation commits,
/// so a lost or ignored event never leaves the store inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ShiftEvent {
    CleaningStarted {
        room_id: RoomId,
        actor_id: String,
        timestamp: DateTime<Local>,
    },
    CleaningCompleted {
        room_id: RoomId,
        actor_id: String,
        timestamp: DateTime<Local>,
    },
    SpotCheckStarted {
        room_id: RoomId,
        actor_id: String,
        timestamp: DateTime<Local>,
    },
    SpotCheckCompleted {
        room_id: RoomId,
        actor_id: String,
        timestamp: DateTime<Local>,
    },
}

impl ShiftEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ShiftEvent::CleaningStarted { .. } => "cleaning_started",
            ShiftEvent::CleaningCompleted { .. } => "cleaning_completed",
            ShiftEvent::SpotCheckStarted { .. } => "spot_check_started",
            ShiftEvent::SpotCheckCompleted { .. } => "spot_check_completed",
        }
    }

    pub fn room_id(&self) -> &RoomId {
        match self {
            ShiftEvent::CleaningStarted { room_id, .. }
            | ShiftEvent::CleaningCompleted { room_id, .. }
            | ShiftEvent::SpotCheckStarted { room_id, .. }
            | ShiftEvent::SpotCheckCompleted { room_id, .. } => room_id,
        }
    }

    pub fn actor_id(&self) -> &str {
        match self {
            ShiftEvent::CleaningStarted { actor_id, .. }
            | ShiftEvent::CleaningCompleted { actor_id, .. }
            | ShiftEvent::SpotCheckStarted { actor_id, .. }
            | ShiftEvent::SpotCheckCompleted { actor_id, .. } => actor_id,
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        match self {
            ShiftEvent::CleaningStarted { timestamp, .. }
            | ShiftEvent::CleaningCompleted { timestamp, .. }
            | ShiftEvent::SpotCheckStarted { timestamp, .. }
            | ShiftEvent::SpotCheckCompleted { timestamp, .. } => *timestamp,
        }
    }
}
