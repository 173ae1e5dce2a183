use chrono::{Datelike, NaiveDate, Weekday};

/// The weekday on which no event may be created. Disabled days are also
/// dimmed in every calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayPolicy {
    disabled: Weekday,
}

impl WeekdayPolicy {
    pub fn new(disabled: Weekday) -> Self {
        Self { disabled }
    }

    pub fn disabled_weekday(&self) -> Weekday {
        self.disabled
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        date.weekday() == self.disabled
    }
}

impl Default for WeekdayPolicy {
    fn default() -> Self {
        Self::new(Weekday::Sun)
    }
}
