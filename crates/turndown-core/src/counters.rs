use chrono::NaiveDate;
use turndown_types::SessionKind;

/// In-process per-day start counters for the current user's role.
///
/// Reset to zero whenever the tracked date differs from the current
/// date; incremented on successful starts only, never decremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCounters {
    date: NaiveDate,
    cleaning: u32,
    spot_check: u32,
}

impl DailyCounters {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            cleaning: 0,
            spot_check: 0,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Reset counts when the calendar day has changed.
    pub fn roll(&mut self, today: NaiveDate) {
        if self.date != today {
            *self = Self::new(today);
        }
    }

    pub fn count(&self, kind: SessionKind) -> u32 {
        match kind {
            SessionKind::Cleaning => self.cleaning,
            SessionKind::SpotCheck => self.spot_check,
        }
    }

    pub fn increment(&mut self, kind: SessionKind) {
        match kind {
            SessionKind::Cleaning => self.cleaning += 1,
            SessionKind::SpotCheck => self.spot_check += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn increments_are_per_kind() {
        let mut counters = DailyCounters::new(date(2026, 8, 25));
        counters.increment(SessionKind::Cleaning);
        counters.increment(SessionKind::Cleaning);
        counters.increment(SessionKind::SpotCheck);

        assert_eq!(counters.count(SessionKind::Cleaning), 2);
        assert_eq!(counters.count(SessionKind::SpotCheck), 1);
    }

    #[test]
    fn roll_resets_on_new_day_only() {
        let mut counters = DailyCounters::new(date(2026, 8, 25));
        counters.increment(SessionKind::Cleaning);

        counters.roll(date(2026, 8, 25));
        assert_eq!(counters.count(SessionKind::Cleaning), 1);

        counters.roll(date(2026, 8, 26));
        assert_eq!(counters.count(SessionKind::Cleaning), 0);
        assert_eq!(counters.date(), date(2026, 8, 26));
    }
}
