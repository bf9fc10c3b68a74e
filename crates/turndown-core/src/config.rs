use serde::{Deserialize, Serialize};
use std::path::Path;
use turndown_types::{Role, SessionKind};

use crate::error::{Error, Result};

/// Per-role daily start limits. 0 means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quotas {
    /// Rooms a staff member may start cleaning per day
    pub staff: u32,
    /// Spot checks a supervisor may start per day
    pub supervisor: u32,
    pub manager: u32,
    pub owner: u32,
}

impl Default for Quotas {
    fn default() -> Self {
        Self {
            staff: 5,
            supervisor: 1,
            manager: 0,
            owner: 0,
        }
    }
}

impl Quotas {
    /// Quota for a role starting sessions of a kind (0 = unlimited).
    ///
    /// A role only has a quota for the kind it actually starts; any
    /// other combination is unlimited and rejected on role instead.
    pub fn daily_quota(&self, role: Role, kind: SessionKind) -> u32 {
        match (role, kind) {
            (Role::Staff, SessionKind::Cleaning) => self.staff,
            (Role::Supervisor, SessionKind::SpotCheck) => self.supervisor,
            (Role::Manager, _) => self.manager,
            (Role::Owner, _) => self.owner,
            _ => 0,
        }
    }
}

/// How quota usage is counted across process restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum QuotaTracking {
    /// In-memory counters, fresh on every process start (the behavior of
    /// the system this replaces, where a reload reset the quota).
    Process,
    /// Derived from stored session records for the current local date;
    /// survives restarts.
    #[default]
    CalendarDay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub quotas: Quotas,
    pub quota_tracking: QuotaTracking,
    /// Locale used to resolve catalog display names ("en", "id", ...).
    pub default_locale: String,
    /// Informational target time for daily spot checks (HH:MM). Not
    /// enforced by the controller.
    pub spot_check_time: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quotas: Quotas::default(),
            quota_tracking: QuotaTracking::default(),
            default_locale: "en".to_string(),
            spot_check_time: Some("12:00".to_string()),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("malformed config: {}", e)))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("cannot create config dir: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("cannot serialize config: {}", e)))?;
        std::fs::write(path, content)
            .map_err(|e| Error::Config(format!("cannot write config: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_quotas_match_role_policy() {
        let quotas = Quotas::default();

        assert_eq!(quotas.daily_quota(Role::Staff, SessionKind::Cleaning), 5);
        assert_eq!(
            quotas.daily_quota(Role::Supervisor, SessionKind::SpotCheck),
            1
        );
        // 0 = unlimited
        assert_eq!(quotas.daily_quota(Role::Manager, SessionKind::Cleaning), 0);
        assert_eq!(quotas.daily_quota(Role::Owner, SessionKind::SpotCheck), 0);
        // Off-role combinations carry no quota of their own
        assert_eq!(quotas.daily_quota(Role::Staff, SessionKind::SpotCheck), 0);
    }

    #[test]
    fn load_nonexistent_returns_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("missing.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.quota_tracking, QuotaTracking::CalendarDay);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.quotas.staff = 3;
        config.quota_tracking = QuotaTracking::Process;
        config.default_locale = "id".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
