use chrono::{DateTime, Local, NaiveDate};
use rusqlite::{params, Connection, OptionalExtension};
use turndown_types::{RoomId, SessionId, SessionStatus, SpotCheckSession};

use super::{format_ts, parse_opt_ts, parse_status, parse_ts};
use crate::{Error, Result};

struct RawRow {
    id: SessionId,
    room_id: String,
    supervisor_id: String,
    started_at: String,
    ended_at: Option<String>,
    notes: Option<String>,
    status: String,
}

fn from_raw(raw: RawRow) -> Result<SpotCheckSession> {
    Ok(SpotCheckSession {
        id: raw.id,
        room_id: RoomId::new(raw.room_id),
        supervisor_id: raw.supervisor_id,
        started_at: parse_ts(&raw.started_at)?,
        ended_at: parse_opt_ts(raw.ended_at.as_deref())?,
        notes: raw.notes,
        status: parse_status(&raw.status)?,
    })
}

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRow> {
    Ok(RawRow {
        id: row.get(0)?,
        room_id: row.get(1)?,
        supervisor_id: row.get(2)?,
        started_at: row.get(3)?,
        ended_at: row.get(4)?,
        notes: row.get(5)?,
        status: row.get(6)?,
    })
}

const COLUMNS: &str = "id, room_id, supervisor_id, started_at, ended_at, notes, status";

/// Insert a fresh in-progress spot check and return it with its assigned id.
pub fn create(
    conn: &Connection,
    room_id: &RoomId,
    supervisor_id: &str,
    started_at: DateTime<Local>,
) -> Result<SpotCheckSession> {
    conn.execute(
        r#"
        INSERT INTO spot_check_sessions (room_id, supervisor_id, started_at, status)
        VALUES (?1, ?2, ?3, ?4)
        "#,
        params![
            room_id.as_str(),
            supervisor_id,
            format_ts(&started_at),
            SessionStatus::InProgress.as_str()
        ],
    )?;

    Ok(SpotCheckSession {
        id: conn.last_insert_rowid(),
        room_id: room_id.clone(),
        supervisor_id: supervisor_id.to_string(),
        started_at,
        ended_at: None,
        notes: None,
        status: SessionStatus::InProgress,
    })
}

/// Most recently created spot check for the room (insertion order).
pub fn latest_by_room(conn: &Connection, room_id: &RoomId) -> Result<Option<SpotCheckSession>> {
    let raw = conn
        .query_row(
            &format!(
                "SELECT {} FROM spot_check_sessions WHERE room_id = ?1 ORDER BY id DESC LIMIT 1",
                COLUMNS
            ),
            [room_id.as_str()],
            map_row,
        )
        .optional()?;

    raw.map(from_raw).transpose()
}

/// Overwrite the stored spot check matching the record's id.
pub fn update(conn: &Connection, session: &SpotCheckSession) -> Result<()> {
    let changed = conn.execute(
        r#"
        UPDATE spot_check_sessions
        SET room_id = ?2, supervisor_id = ?3, started_at = ?4, ended_at = ?5, notes = ?6, status = ?7
        WHERE id = ?1
        "#,
        params![
            session.id,
            session.room_id.as_str(),
            &session.supervisor_id,
            format_ts(&session.started_at),
            session.ended_at.as_ref().map(format_ts),
            &session.notes,
            session.status.as_str()
        ],
    )?;

    if changed == 0 {
        return Err(Error::NotFound(format!(
            "spot check session {} does not exist",
            session.id
        )));
    }

    Ok(())
}

/// Count spot checks a supervisor started on the given local calendar day.
pub fn count_started_on(conn: &Connection, supervisor_id: &str, date: NaiveDate) -> Result<usize> {
    let mut stmt =
        conn.prepare("SELECT started_at FROM spot_check_sessions WHERE supervisor_id = ?1")?;

    let timestamps = stmt
        .query_map([supervisor_id], |row| row.get::<_, String>(0))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut count = 0;
    for ts in &timestamps {
        if parse_ts(ts)?.date_naive() == date {
            count += 1;
        }
    }

    Ok(count)
}
