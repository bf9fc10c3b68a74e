//! File-backed login sessions.
//!
//! `login` writes `identity.toml` into the data directory with a
//! timestamp; the session expires 24 hours after login and an expired
//! file is treated as logged out. Role is declared at login; there is
//! no credential check at this layer.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use turndown_core::config::Quotas;
use turndown_core::providers::IdentityProvider;
use turndown_types::{Identity, Role, SessionKind};

const IDENTITY_FILE: &str = "identity.toml";
const SESSION_TTL_HOURS: i64 = 24;

/// The persisted login session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredLogin {
    pub user_id: String,
    pub role: Role,
    pub logged_in_at: DateTime<Local>,
}

impl StoredLogin {
    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        now - self.logged_in_at > Duration::hours(SESSION_TTL_HOURS)
    }
}

/// Identity provider reading the login session from the data directory.
pub struct FileIdentity {
    path: PathBuf,
    quotas: Quotas,
}

impl FileIdentity {
    pub fn new(data_dir: &Path, quotas: Quotas) -> Self {
        Self {
            path: data_dir.join(IDENTITY_FILE),
            quotas,
        }
    }

    pub fn login(&self, user_id: &str, role: Role) -> Result<StoredLogin> {
        let login = StoredLogin {
            user_id: user_id.to_string(),
            role,
            logged_in_at: Local::now(),
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(&login)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("cannot write {}", self.path.display()))?;

        Ok(login)
    }

    /// Remove the login session. Returns false when nobody was logged in.
    pub fn logout(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&self.path)
            .with_context(|| format!("cannot remove {}", self.path.display()))?;
        Ok(true)
    }

    /// The unexpired login session, if any.
    ///
    /// Unreadable or malformed identity files read as logged out rather
    /// than failing the command.
    pub fn current(&self) -> Option<StoredLogin> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let login: StoredLogin = toml::from_str(&content).ok()?;
        if login.is_expired(Local::now()) {
            return None;
        }
        Some(login)
    }
}

impl IdentityProvider for FileIdentity {
    fn current_identity(&self) -> Option<Identity> {
        self.current().map(|login| Identity {
            user_id: login.user_id,
            role: login.role,
        })
    }

    fn daily_quota(&self, role: Role, kind: SessionKind) -> u32 {
        self.quotas.daily_quota(role, kind)
    }
}
