use serde::{Deserialize, Serialize};

/// Staff roles, ordered from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Staff,
    Supervisor,
    Manager,
    Owner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Staff => "staff",
            Role::Supervisor => "supervisor",
            Role::Manager => "manager",
            Role::Owner => "owner",
        }
    }

    /// Rank in the role hierarchy (staff=1 .. owner=4).
    pub fn rank(&self) -> u8 {
        match self {
            Role::Staff => 1,
            Role::Supervisor => 2,
            Role::Manager => 3,
            Role::Owner => 4,
        }
    }

    /// Whether this role is at least as privileged as `other`.
    pub fn at_least(&self, other: Role) -> bool {
        self.rank() >= other.rank()
    }

    pub fn permissions(&self) -> &'static [Permission] {
        use Permission::*;
        match self {
            Role::Staff => &[ViewTasks, ViewSchedule],
            Role::Supervisor => &[ViewTasks, ViewSchedule, ViewAnalytics],
            Role::Manager => &[ViewTasks, ViewSchedule, ViewAnalytics, ViewConfig],
            Role::Owner => &[
                ViewTasks,
                ViewSchedule,
                ViewAnalytics,
                ViewConfig,
                EditConfig,
            ],
        }
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }

    pub fn all() -> &'static [Role] {
        &[Role::Staff, Role::Supervisor, Role::Manager, Role::Owner]
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "staff" => Ok(Role::Staff),
            "supervisor" => Ok(Role::Supervisor),
            "manager" => Ok(Role::Manager),
            "owner" => Ok(Role::Owner),
            other => Err(format!(
                "unknown role '{}' (expected staff, supervisor, manager, or owner)",
                other
            )),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Capability grants per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewTasks,
    ViewSchedule,
    ViewAnalytics,
    ViewConfig,
    EditConfig,
}

/// The authenticated user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    pub role: Role,
}
