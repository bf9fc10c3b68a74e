use chrono::{DateTime, Local, NaiveDate};
use rusqlite::{params, Connection, OptionalExtension};
use turndown_types::{CleaningSession, RoomId, SessionId, SessionStatus, TaskCompletion};

use super::{format_ts, parse_opt_ts, parse_status, parse_ts};
use crate::{Error, Result};

struct RawRow {
    id: SessionId,
    room_id: String,
    staff_id: String,
    started_at: String,
    ended_at: Option<String>,
    tasks: String,
    status: String,
}

fn from_raw(raw: RawRow) -> Result<CleaningSession> {
    let tasks: Vec<TaskCompletion> = serde_json::from_str(&raw.tasks)?;
    Ok(CleaningSession {
        id: raw.id,
        room_id: RoomId::new(raw.room_id),
        staff_id: raw.staff_id,
        started_at: parse_ts(&raw.started_at)?,
        ended_at: parse_opt_ts(raw.ended_at.as_deref())?,
        tasks,
        status: parse_status(&raw.status)?,
    })
}

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRow> {
    Ok(RawRow {
        id: row.get(0)?,
        room_id: row.get(1)?,
        staff_id: row.get(2)?,
        started_at: row.get(3)?,
        ended_at: row.get(4)?,
        tasks: row.get(5)?,
        status: row.get(6)?,
    })
}

const COLUMNS: &str = "id, room_id, staff_id, started_at, ended_at, tasks, status";

/// Insert a fresh in-progress session and return it with its assigned id.
pub fn create(
    conn: &Connection,
    room_id: &RoomId,
    staff_id: &str,
    started_at: DateTime<Local>,
) -> Result<CleaningSession> {
    conn.execute(
        r#"
        INSERT INTO cleaning_sessions (room_id, staff_id, started_at, tasks, status)
        VALUES (?1, ?2, ?3, '[]', ?4)
        "#,
        params![
            room_id.as_str(),
            staff_id,
            format_ts(&started_at),
            SessionStatus::InProgress.as_str()
        ],
    )?;

    Ok(CleaningSession {
        id: conn.last_insert_rowid(),
        room_id: room_id.clone(),
        staff_id: staff_id.to_string(),
        started_at,
        ended_at: None,
        tasks: Vec::new(),
        status: SessionStatus::InProgress,
    })
}

/// Most recently created session for the room (insertion order, not
/// timestamps).
pub fn latest_by_room(conn: &Connection, room_id: &RoomId) -> Result<Option<CleaningSession>> {
    let raw = conn
        .query_row(
            &format!(
                "SELECT {} FROM cleaning_sessions WHERE room_id = ?1 ORDER BY id DESC LIMIT 1",
                COLUMNS
            ),
            [room_id.as_str()],
            map_row,
        )
        .optional()?;

    raw.map(from_raw).transpose()
}

/// Overwrite the stored session matching the record's id.
pub fn update(conn: &Connection, session: &CleaningSession) -> Result<()> {
    let tasks = serde_json::to_string(&session.tasks)?;
    let changed = conn.execute(
        r#"
        UPDATE cleaning_sessions
        SET room_id = ?2, staff_id = ?3, started_at = ?4, ended_at = ?5, tasks = ?6, status = ?7
        WHERE id = ?1
        "#,
        params![
            session.id,
            session.room_id.as_str(),
            &session.staff_id,
            format_ts(&session.started_at),
            session.ended_at.as_ref().map(format_ts),
            tasks,
            session.status.as_str()
        ],
    )?;

    if changed == 0 {
        return Err(Error::NotFound(format!(
            "cleaning session {} does not exist",
            session.id
        )));
    }

    Ok(())
}

/// Count sessions a staff member started on the given local calendar day.
///
/// Linear scan over the staff member's rows; session lists stay small in
/// this single-hotel system.
pub fn count_started_on(conn: &Connection, staff_id: &str, date: NaiveDate) -> Result<usize> {
    let mut stmt =
        conn.prepare("SELECT started_at FROM cleaning_sessions WHERE staff_id = ?1")?;

    let timestamps = stmt
        .query_map([staff_id], |row| row.get::<_, String>(0))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut count = 0;
    for ts in &timestamps {
        if parse_ts(ts)?.date_naive() == date {
            count += 1;
        }
    }

    Ok(count)
}
