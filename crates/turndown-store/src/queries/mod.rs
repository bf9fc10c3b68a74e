pub mod catalog;
pub mod cleaning;
pub mod settings;
pub mod spot_check;

use chrono::{DateTime, Local};

use crate::{Error, Result};

pub(crate) fn format_ts(ts: &DateTime<Local>) -> String {
    ts.to_rfc3339()
}

pub(crate) fn parse_ts(s: &str) -> Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|e| Error::Corrupt(format!("bad timestamp '{}': {}", s, e)))
}

pub(crate) fn parse_opt_ts(s: Option<&str>) -> Result<Option<DateTime<Local>>> {
    s.map(parse_ts).transpose()
}

pub(crate) fn parse_status(s: &str) -> Result<turndown_types::SessionStatus> {
    turndown_types::SessionStatus::parse(s)
        .ok_or_else(|| Error::Corrupt(format!("unknown session status '{}'", s)))
}
