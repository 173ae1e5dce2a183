use chrono::{Days, NaiveDate, NaiveDateTime};
use eventcal::{
    calendar::{Event, EventStatus, EventStore, StoreError, WeekdayPolicy},
};

fn at(date: NaiveDate, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    date.and_hms_opt(hour, minute, 0)
}

/// Demonstration events: the two fixed entries every fresh calendar used to
/// ship with, plus a few around `today` so the current views are not empty.
pub fn sample_events(today: NaiveDate) -> Vec<Event> {
    let mut events = Vec::new();

    let fixed = [
        ("1", "Meeting", (2025, 2, 18, 10), (2025, 2, 18, 12), EventStatus::Pending),
        ("2", "Workshop", (2025, 2, 19, 14), (2025, 2, 21, 16), EventStatus::InProgress),
    ];
    for (id, title, (sy, sm, sd, sh), (ey, em, ed, eh), status) in fixed {
        let start = NaiveDate::from_ymd_opt(sy, sm, sd).and_then(|d| at(d, sh, 0));
        let end = NaiveDate::from_ymd_opt(ey, em, ed).and_then(|d| at(d, eh, 0));
        let Some(start) = start else { continue };
        events.push(Event {
            id: id.to_string(),
            title: title.to_string(),
            start,
            end,
            status,
        });
    }

    let Some(tomorrow) = today.checked_add_days(Days::new(1)) else { return events };
    let Some(yesterday) = today.checked_sub_days(Days::new(1)) else { return events };

    let relative = [
        ("Morning Standup", today, (9, 0), (9, 30), EventStatus::InProgress),
        ("Team Sync", today, (14, 0), (15, 0), EventStatus::Pending),
        ("Code Review", tomorrow, (10, 0), (11, 0), EventStatus::Pending),
        ("Sprint Planning", tomorrow, (15, 0), (16, 30), EventStatus::Pending),
        ("Lunch with Team", yesterday, (12, 30), (13, 30), EventStatus::Complete),
    ];
    for (i, (title, date, (sh, sm), (eh, em), status)) in relative.into_iter().enumerate() {
        let (Some(start), Some(end)) = (at(date, sh, sm), at(date, eh, em)) else {
            continue;
        };
        events.push(Event {
            id: format!("sample_{}", i),
            title: title.to_string(),
            start,
            end: Some(end),
            status,
        });
    }

    events
}

pub fn sample_store(policy: WeekdayPolicy, today: NaiveDate) -> Result<EventStore, StoreError> {
    EventStore::seeded(policy, sample_events(today))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_store_seeds_every_event() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();

        let store = sample_store(WeekdayPolicy::default(), today).unwrap();

        assert_eq!(store.len(), 7);
        assert_eq!(store.get("1").map(|e| e.title.as_str()), Some("Meeting"));
        assert_eq!(store.get("2").map(|e| e.status), Some(EventStatus::InProgress));
        assert_eq!(store.events_on(today).len(), 2);
    }

    #[test]
    fn fixed_samples_do_not_collide_with_relative_ones() {
        let today = NaiveDate::from_ymd_opt(2025, 2, 18).unwrap();
        assert!(sample_store(WeekdayPolicy::default(), today).is_ok());
    }
}
