use chrono::{DateTime, Local};
use turndown_store::Database;
use turndown_types::{Identity, Role, RoomId, SessionKind, TaskId};

use crate::Result;

/// Who is logged in, and what their daily quota is.
///
/// Responsibilities:
/// - Report the authenticated identity, if any
/// - Resolve the per-role daily quota for a session kind (0 = unlimited)
pub trait IdentityProvider {
    fn current_identity(&self) -> Option<Identity>;

    fn daily_quota(&self, role: Role, kind: SessionKind) -> u32;
}

/// Room and task existence checks against the catalog.
///
/// Display-name resolution stays in the presentation layer; the
/// controller only needs existence.
pub trait Catalog {
    fn room_exists(&self, room_id: &RoomId) -> Result<bool>;

    fn task_exists(&self, task_id: &TaskId) -> Result<bool>;
}

/// Source of "now" for timestamps and calendar-day comparisons.
///
/// Local time by design: "cleaned today" means the human notion of
/// today, not a rolling 24h window.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Catalog backed by the session store's room/task tables.
pub struct StoreCatalog<'a> {
    db: &'a Database,
}

impl<'a> StoreCatalog<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }
}

impl Catalog for StoreCatalog<'_> {
    fn room_exists(&self, room_id: &RoomId) -> Result<bool> {
        Ok(self.db.room_exists(room_id)?)
    }

    fn task_exists(&self, task_id: &TaskId) -> Result<bool> {
        Ok(self.db.task_exists(task_id)?)
    }
}
