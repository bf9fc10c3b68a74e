//! Deterministic stand-ins for the controller's collaborators.

use chrono::{DateTime, Local};
use std::cell::Cell;
use turndown_core::config::Quotas;
use turndown_core::providers::{Clock, IdentityProvider};
use turndown_types::{Identity, Role, SessionKind};

/// Identity provider with a fixed identity and configurable quotas.
pub struct StubIdentity {
    identity: Option<Identity>,
    quotas: Quotas,
}

impl StubIdentity {
    pub fn logged_in(user_id: &str, role: Role) -> Self {
        Self {
            identity: Some(Identity {
                user_id: user_id.to_string(),
                role,
            }),
            quotas: Quotas::default(),
        }
    }

    pub fn logged_out() -> Self {
        Self {
            identity: None,
            quotas: Quotas::default(),
        }
    }

    pub fn with_quotas(mut self, quotas: Quotas) -> Self {
        self.quotas = quotas;
        self
    }
}

impl IdentityProvider for StubIdentity {
    fn current_identity(&self) -> Option<Identity> {
        self.identity.clone()
    }

    fn daily_quota(&self, role: Role, kind: SessionKind) -> u32 {
        self.quotas.daily_quota(role, kind)
    }
}

/// Clock that reports a settable instant, for day-boundary tests.
pub struct FixedClock {
    now: Cell<DateTime<Local>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Local>) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn set(&self, now: DateTime<Local>) {
        self.now.set(now);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }
}
