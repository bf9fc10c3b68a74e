use rusqlite::Connection;

use crate::Result;

// NOTE: Storage layout
//
// Session ids are AUTOINCREMENT so insertion order is the id order.
// "Latest session for a room" is therefore ORDER BY id DESC, never a
// timestamp comparison (two records cannot share a tick in this
// single-user system, but insertion order is the defined tie-break).
//
// Task completions are embedded in the cleaning row as a JSON array.
// They are only ever read and written through their owning session, so
// a child table would add joins without adding queries.

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS rooms (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            required INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS cleaning_sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            room_id TEXT NOT NULL,
            staff_id TEXT NOT NULL,
            started_at TEXT NOT NULL,
            ended_at TEXT,
            tasks TEXT NOT NULL DEFAULT '[]',
            status TEXT NOT NULL,
            FOREIGN KEY (room_id) REFERENCES rooms(id)
        );

        CREATE TABLE IF NOT EXISTS spot_check_sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            room_id TEXT NOT NULL,
            supervisor_id TEXT NOT NULL,
            started_at TEXT NOT NULL,
            ended_at TEXT,
            notes TEXT,
            status TEXT NOT NULL,
            FOREIGN KEY (room_id) REFERENCES rooms(id)
        );

        CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_cleaning_room ON cleaning_sessions(room_id);
        CREATE INDEX IF NOT EXISTS idx_cleaning_staff ON cleaning_sessions(staff_id);
        CREATE INDEX IF NOT EXISTS idx_spot_check_room ON spot_check_sessions(room_id);
        CREATE INDEX IF NOT EXISTS idx_spot_check_supervisor ON spot_check_sessions(supervisor_id);
        "#,
    )?;

    Ok(())
}
