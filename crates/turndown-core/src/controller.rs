use turndown_store::Database;
use turndown_types::{
    CleaningSession, Identity, Role, RoomId, SessionKind, SessionRecord, SessionStatus,
    SpotCheckSession, TaskCompletion, TaskId,
};

use crate::config::QuotaTracking;
use crate::counters::DailyCounters;
use crate::error::{Error, Result};
use crate::events::ShiftEvent;
use crate::providers::{Catalog, Clock, IdentityProvider};

/// Gates every session-lifecycle transition behind identity, quota, and
/// ordering rules, and keeps the store and daily counters consistent.
///
/// Collaborators are injected at construction; the controller holds no
/// global state. Single-user model: no internal locking, callers issue
/// one operation at a time.
pub struct ShiftController<'a> {
    store: &'a Database,
    identity: &'a dyn IdentityProvider,
    catalog: &'a dyn Catalog,
    clock: &'a dyn Clock,
    quota_tracking: QuotaTracking,
    counters: DailyCounters,
    subscribers: Vec<Box<dyn Fn(&ShiftEvent) + 'a>>,
}

impl<'a> ShiftController<'a> {
    pub fn new(
        store: &'a Database,
        identity: &'a dyn IdentityProvider,
        catalog: &'a dyn Catalog,
        clock: &'a dyn Clock,
        quota_tracking: QuotaTracking,
    ) -> Self {
        let counters = DailyCounters::new(clock.now().date_naive());
        Self {
            store,
            identity,
            catalog,
            clock,
            quota_tracking,
            counters,
            subscribers: Vec::new(),
        }
    }

    /// Register a lifecycle-event subscriber.
    ///
    /// Events are delivered synchronously after the store mutation
    /// commits; they are advisory and never gate a transition.
    pub fn subscribe(&mut self, subscriber: impl Fn(&ShiftEvent) + 'a) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn counters(&self) -> &DailyCounters {
        &self.counters
    }

    // --- Cleaning lifecycle ---

    /// Start a cleaning session for a room.
    ///
    /// Requires the staff role, remaining daily quota, an existing room,
    /// and no cleaning already in progress for the room. Quota is checked
    /// strictly before any mutation.
    pub fn start_cleaning(&mut self, room_id: &RoomId) -> Result<CleaningSession> {
        let identity = self.require_role(Role::Staff)?;
        self.check_quota(&identity, SessionKind::Cleaning)?;

        if !self.catalog.room_exists(room_id)? {
            return Err(Error::RoomNotFound(room_id.to_string()));
        }

        if let Some(latest) = self.store.latest_cleaning(room_id)? {
            if latest.is_in_progress() {
                return Err(Error::Conflict(format!(
                    "cleaning already in progress for room {}",
                    room_id
                )));
            }
        }

        let session = self
            .store
            .create_cleaning(room_id, &identity.user_id, self.clock.now())?;
        self.record_start(SessionKind::Cleaning);
        self.notify(&ShiftEvent::CleaningStarted {
            room_id: room_id.clone(),
            actor_id: identity.user_id,
            timestamp: session.started_at,
        });

        Ok(session)
    }

    /// Mark a task completed within the room's active cleaning session.
    ///
    /// Idempotent: re-completing a task updates its timestamp in place;
    /// the task keeps its original position in the completion order.
    pub fn complete_task(&mut self, room_id: &RoomId, task_id: &TaskId) -> Result<CleaningSession> {
        let mut session = self.active_cleaning(room_id)?;

        if !self.catalog.task_exists(task_id)? {
            return Err(Error::TaskNotFound(task_id.to_string()));
        }

        let now = self.clock.now();
        match session.tasks.iter_mut().find(|t| &t.task_id == task_id) {
            Some(existing) => existing.completed_at = now,
            None => session.tasks.push(TaskCompletion {
                task_id: task_id.clone(),
                completed_at: now,
            }),
        }
        self.store.update_cleaning(&session)?;

        Ok(session)
    }

    /// Complete the room's active cleaning session.
    pub fn complete_cleaning(&mut self, room_id: &RoomId) -> Result<CleaningSession> {
        let identity = self.require_role(Role::Staff)?;
        let mut session = self.active_cleaning(room_id)?;

        let now = self.clock.now();
        session.status = SessionStatus::Completed;
        session.ended_at = Some(now);
        self.store.update_cleaning(&session)?;

        self.notify(&ShiftEvent::CleaningCompleted {
            room_id: room_id.clone(),
            actor_id: identity.user_id,
            timestamp: now,
        });

        Ok(session)
    }

    // --- Spot check lifecycle ---

    /// Start a spot check for a room.
    ///
    /// Requires the supervisor role, remaining daily quota, and a room
    /// whose latest cleaning completed on the current local calendar day
    /// (not a rolling 24h window), with no spot check already in
    /// progress.
    pub fn start_spot_check(&mut self, room_id: &RoomId) -> Result<SpotCheckSession> {
        let identity = self.require_role(Role::Supervisor)?;
        self.check_quota(&identity, SessionKind::SpotCheck)?;

        let today = self.clock.now().date_naive();
        let cleaned_today = match self.store.latest_cleaning(room_id)? {
            Some(cleaning) if cleaning.status == SessionStatus::Completed => cleaning
                .ended_at
                .map(|end| end.date_naive() == today)
                .unwrap_or(false),
            _ => false,
        };
        if !cleaned_today {
            return Err(Error::InvalidState(format!(
                "room {} must be cleaned today before a spot check",
                room_id
            )));
        }

        if let Some(latest) = self.store.latest_spot_check(room_id)? {
            if latest.is_in_progress() {
                return Err(Error::Conflict(format!(
                    "spot check already in progress for room {}",
                    room_id
                )));
            }
        }

        let session = self
            .store
            .create_spot_check(room_id, &identity.user_id, self.clock.now())?;
        self.record_start(SessionKind::SpotCheck);
        self.notify(&ShiftEvent::SpotCheckStarted {
            room_id: room_id.clone(),
            actor_id: identity.user_id,
            timestamp: session.started_at,
        });

        Ok(session)
    }

    /// Complete the room's active spot check with the supervisor's notes.
    pub fn submit_spot_check(&mut self, room_id: &RoomId, notes: &str) -> Result<SpotCheckSession> {
        let identity = self.require_role(Role::Supervisor)?;
        let mut session = self.active_spot_check(room_id)?;

        if notes.trim().is_empty() {
            return Err(Error::Validation(
                "spot check notes must not be empty".to_string(),
            ));
        }

        let now = self.clock.now();
        session.status = SessionStatus::Completed;
        session.ended_at = Some(now);
        session.notes = Some(notes.to_string());
        self.store.update_spot_check(&session)?;

        self.notify(&ShiftEvent::SpotCheckCompleted {
            room_id: room_id.clone(),
            actor_id: identity.user_id,
            timestamp: now,
        });

        Ok(session)
    }

    // --- Queries ---

    /// Most recent session of a kind for the room, if any.
    pub fn latest_session(
        &self,
        kind: SessionKind,
        room_id: &RoomId,
    ) -> Result<Option<SessionRecord>> {
        Ok(self.store.latest_by_room(kind, room_id)?)
    }

    /// Quota usage for the current identity, honoring the tracking mode.
    pub fn quota_used(&mut self, kind: SessionKind) -> Result<u32> {
        let identity = self.require_identity()?;
        self.quota_used_by(&identity, kind)
    }

    // --- Guards ---

    fn require_identity(&self) -> Result<Identity> {
        self.identity
            .current_identity()
            .ok_or_else(|| Error::PermissionDenied("not logged in".to_string()))
    }

    fn require_role(&self, role: Role) -> Result<Identity> {
        let identity = self.require_identity()?;
        if identity.role != role {
            return Err(Error::PermissionDenied(format!(
                "only {} can perform this operation",
                role
            )));
        }
        Ok(identity)
    }

    fn quota_used_by(&mut self, identity: &Identity, kind: SessionKind) -> Result<u32> {
        let today = self.clock.now().date_naive();
        self.counters.roll(today);

        match self.quota_tracking {
            QuotaTracking::Process => Ok(self.counters.count(kind)),
            QuotaTracking::CalendarDay => Ok(self
                .store
                .count_started_on(kind, &identity.user_id, today)?
                as u32),
        }
    }

    fn check_quota(&mut self, identity: &Identity, kind: SessionKind) -> Result<()> {
        let limit = self.identity.daily_quota(identity.role, kind);
        if limit == 0 {
            return Ok(());
        }

        if self.quota_used_by(identity, kind)? >= limit {
            return Err(Error::QuotaExceeded { limit });
        }
        Ok(())
    }

    fn record_start(&mut self, kind: SessionKind) {
        self.counters.roll(self.clock.now().date_naive());
        self.counters.increment(kind);
    }

    fn active_cleaning(&self, room_id: &RoomId) -> Result<CleaningSession> {
        match self.store.latest_cleaning(room_id)? {
            Some(session) if session.is_in_progress() => Ok(session),
            _ => Err(Error::InvalidState(format!(
                "no active cleaning session for room {}",
                room_id
            ))),
        }
    }

    fn active_spot_check(&self, room_id: &RoomId) -> Result<SpotCheckSession> {
        match self.store.latest_spot_check(room_id)? {
            Some(session) if session.is_in_progress() => Ok(session),
            _ => Err(Error::InvalidState(format!(
                "no active spot check session for room {}",
                room_id
            ))),
        }
    }

    fn notify(&self, event: &ShiftEvent) {
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }
}

