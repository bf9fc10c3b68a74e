use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Room identifier (e.g., "101", "202")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RoomId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Task identifier (e.g., "make_bed", "replace_towels")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Explicit locale-code -> display-string mapping.
///
/// Catalog entries carry one display name per supported locale
/// (e.g., "en", "id"). Resolution falls back to any available entry
/// so a missing translation never hides a room or task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleMap(BTreeMap<String, String>);

impl LocaleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, locale: impl Into<String>, name: impl Into<String>) -> Self {
        self.0.insert(locale.into(), name.into());
        self
    }

    pub fn insert(&mut self, locale: impl Into<String>, name: impl Into<String>) {
        self.0.insert(locale.into(), name.into());
    }

    /// Resolve a display name for the given locale.
    ///
    /// Falls back to the first available locale (alphabetical), or None
    /// when the map is empty.
    pub fn resolve(&self, locale: &str) -> Option<&str> {
        self.0
            .get(locale)
            .or_else(|| self.0.values().next())
            .map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|s| s.as_str())
    }
}

/// Catalog entry for a hotel room.
///
/// Immutable in normal operation; created via catalog seed or owner edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Display name per supported locale.
    pub name: LocaleMap,
}

impl Room {
    /// Display name for the locale, falling back to the room id.
    pub fn display_name(&self, locale: &str) -> &str {
        self.name.resolve(locale).unwrap_or(self.id.as_str())
    }
}

/// Catalog entry for a housekeeping task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Display name per supported locale.
    pub name: LocaleMap,
    /// Whether the task must be completed before a cleaning can finish.
    /// Informational for the presentation layer; the controller does not
    /// block completion on it.
    pub required: bool,
}

impl Task {
    pub fn display_name(&self, locale: &str) -> &str {
        self.name.resolve(locale).unwrap_or(self.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_map_resolves_exact_locale() {
        let map = LocaleMap::new()
            .with("en", "Room 101")
            .with("id", "Kamar 101");

        assert_eq!(map.resolve("en"), Some("Room 101"));
        assert_eq!(map.resolve("id"), Some("Kamar 101"));
    }

    #[test]
    fn locale_map_falls_back_when_locale_missing() {
        let map = LocaleMap::new().with("en", "Make bed");

        assert_eq!(map.resolve("id"), Some("Make bed"));
    }

    #[test]
    fn room_display_name_falls_back_to_id() {
        let room = Room {
            id: RoomId::new("101"),
            name: LocaleMap::new(),
        };

        assert_eq!(room.display_name("en"), "101");
    }
}
