use chrono::{DateTime, Local, NaiveDate};
use rusqlite::Connection;
use std::path::Path;
use turndown_types::{
    CleaningSession, Room, RoomId, SessionKind, SessionRecord, SpotCheckSession, Task, TaskId,
};

use crate::queries::{catalog, cleaning, settings, spot_check};
use crate::{schema, Error, Result};

/// Handle on the session store.
///
/// Owns the single SQLite connection; the shift controller is the only
/// writer (single-user model, no internal locking).
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(db_path)?;

        let db = Self { conn };
        schema::init_schema(&db.conn)?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        schema::init_schema(&db.conn)?;
        Ok(db)
    }

    // --- Cleaning sessions ---

    pub fn create_cleaning(
        &self,
        room_id: &RoomId,
        staff_id: &str,
        started_at: DateTime<Local>,
    ) -> Result<CleaningSession> {
        cleaning::create(&self.conn, room_id, staff_id, started_at)
    }

    pub fn latest_cleaning(&self, room_id: &RoomId) -> Result<Option<CleaningSession>> {
        cleaning::latest_by_room(&self.conn, room_id)
    }

    pub fn update_cleaning(&self, session: &CleaningSession) -> Result<()> {
        cleaning::update(&self.conn, session)
    }

    // --- Spot checks ---

    pub fn create_spot_check(
        &self,
        room_id: &RoomId,
        supervisor_id: &str,
        started_at: DateTime<Local>,
    ) -> Result<SpotCheckSession> {
        spot_check::create(&self.conn, room_id, supervisor_id, started_at)
    }

    pub fn latest_spot_check(&self, room_id: &RoomId) -> Result<Option<SpotCheckSession>> {
        spot_check::latest_by_room(&self.conn, room_id)
    }

    pub fn update_spot_check(&self, session: &SpotCheckSession) -> Result<()> {
        spot_check::update(&self.conn, session)
    }

    // --- Kind-agnostic queries ---

    pub fn latest_by_room(
        &self,
        kind: SessionKind,
        room_id: &RoomId,
    ) -> Result<Option<SessionRecord>> {
        match kind {
            SessionKind::Cleaning => Ok(self
                .latest_cleaning(room_id)?
                .map(SessionRecord::Cleaning)),
            SessionKind::SpotCheck => Ok(self
                .latest_spot_check(room_id)?
                .map(SessionRecord::SpotCheck)),
        }
    }

    /// Sessions of a kind the user started on the given local calendar day.
    pub fn count_started_on(
        &self,
        kind: SessionKind,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<usize> {
        match kind {
            SessionKind::Cleaning => cleaning::count_started_on(&self.conn, user_id, date),
            SessionKind::SpotCheck => spot_check::count_started_on(&self.conn, user_id, date),
        }
    }

    // --- Catalog ---

    pub fn upsert_room(&self, room: &Room) -> Result<()> {
        catalog::upsert_room(&self.conn, room)
    }

    pub fn upsert_task(&self, task: &Task) -> Result<()> {
        catalog::upsert_task(&self.conn, task)
    }

    pub fn get_room(&self, room_id: &RoomId) -> Result<Option<Room>> {
        catalog::get_room(&self.conn, room_id)
    }

    pub fn room_exists(&self, room_id: &RoomId) -> Result<bool> {
        catalog::room_exists(&self.conn, room_id)
    }

    pub fn task_exists(&self, task_id: &TaskId) -> Result<bool> {
        catalog::task_exists(&self.conn, task_id)
    }

    pub fn list_rooms(&self) -> Result<Vec<Room>> {
        catalog::list_rooms(&self.conn)
    }

    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        catalog::list_tasks(&self.conn)
    }

    // --- Settings ---

    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        settings::get(&self.conn, key)
    }

    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        settings::set(&self.conn, key, value)
    }
}
