use chrono::{NaiveDate, NaiveDateTime, Weekday};
use thiserror::Error;
use uuid::Uuid;

use crate::calendar::{DisplayEvent, Draft, Event, WeekdayPolicy, palette};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Events cannot be scheduled on a {}", weekday_name(.0))]
    InvalidSelection(Weekday),
    #[error("Events cannot be scheduled on past dates!")]
    PastDate,
    #[error("Please enter an event title!")]
    EmptyTitle,
    #[error("Please select both start and end date/time!")]
    IncompleteRange,
    #[error("Event end must not be before its start!")]
    EndBeforeStart,
    #[error("Event not found: {0}")]
    NotFound(String),
    #[error("Duplicate event id: {0}")]
    DuplicateId(String),
}

pub fn weekday_name(weekday: &Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Caller-supplied "are you sure" step consulted before an event is removed.
#[cfg_attr(test, mockall::automock)]
pub trait Confirm {
    fn confirm(&mut self, event: &Event) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&Event) -> bool,
{
    fn confirm(&mut self, event: &Event) -> bool {
        self(event)
    }
}

/// The session's event collection.
///
/// Events keep insertion order. Every mutation goes through `commit`,
/// `remove` or `move_event`, and each of them either applies fully or
/// leaves the collection untouched.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
    policy: WeekdayPolicy,
    version: u64,
}

impl EventStore {
    pub fn new(policy: WeekdayPolicy) -> Self {
        Self {
            events: Vec::new(),
            policy,
            version: 0,
        }
    }

    /// Builds a store around existing events, e.g. demo data.
    pub fn seeded(policy: WeekdayPolicy, events: Vec<Event>) -> Result<Self, StoreError> {
        let mut store = Self::new(policy);
        for event in events {
            if event.title.trim().is_empty() {
                return Err(StoreError::EmptyTitle);
            }
            if !event.has_valid_range() {
                return Err(StoreError::EndBeforeStart);
            }
            if store.contains(&event.id) {
                return Err(StoreError::DuplicateId(event.id));
            }
            store.events.push(event);
        }
        tracing::debug!("Seeded store with {} events", store.events.len());
        Ok(store)
    }

    pub fn policy(&self) -> WeekdayPolicy {
        self.policy
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Increases on every successful mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .events
            .iter()
            .filter(|event| event.occurs_on(date))
            .collect();
        events.sort_by_key(|event| event.start);
        events
    }

    pub fn display_model(&self) -> Vec<DisplayEvent> {
        palette::display_model(&self.events)
    }

    pub fn propose_creation(
        &self,
        range_start: NaiveDateTime,
        range_end: Option<NaiveDateTime>,
        today: NaiveDate,
    ) -> Result<Draft, StoreError> {
        if self.policy.is_disabled(range_start.date()) {
            return Err(StoreError::InvalidSelection(self.policy.disabled_weekday()));
        }
        if range_start.date() < today {
            return Err(StoreError::PastDate);
        }
        Ok(Draft::for_range(range_start, range_end))
    }

    /// Turns a completed draft into an event appended to the collection.
    /// On success the draft is reset.
    pub fn commit(&mut self, draft: &mut Draft) -> Result<&Event, StoreError> {
        if draft.title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let (Some(start), Some(end)) = (draft.start(), draft.end()) else {
            return Err(StoreError::IncompleteRange);
        };
        if end < start {
            return Err(StoreError::EndBeforeStart);
        }

        let event = Event {
            id: self.allocate_id(),
            title: draft.title.clone(),
            start,
            end: Some(end),
            status: draft.status,
        };
        tracing::info!("Committed event {} ({})", event.id, event.title);

        self.events.push(event);
        self.version += 1;
        draft.clear();

        Ok(&self.events[self.events.len() - 1])
    }

    /// Removes the event once `confirm` agrees. Unknown ids are ignored
    /// without asking.
    pub fn remove<C>(&mut self, id: &str, confirm: &mut C) -> Option<Event>
    where
        C: Confirm + ?Sized,
    {
        let index = self.events.iter().position(|event| event.id == id)?;
        if !confirm.confirm(&self.events[index]) {
            return None;
        }

        let removed = self.events.remove(index);
        self.version += 1;
        tracing::info!("Removed event {} ({})", removed.id, removed.title);
        Some(removed)
    }

    pub fn move_event(
        &mut self,
        id: &str,
        new_start: NaiveDateTime,
        new_end: Option<NaiveDateTime>,
        today: NaiveDate,
    ) -> Result<&Event, StoreError> {
        if new_start.date() < today {
            return Err(StoreError::PastDate);
        }
        let index = self
            .events
            .iter()
            .position(|event| event.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if new_end.is_some_and(|end| end < new_start) {
            return Err(StoreError::EndBeforeStart);
        }

        let event = &mut self.events[index];
        event.start = new_start;
        event.end = new_end;
        self.version += 1;
        tracing::info!("Moved event {} to {}", event.id, new_start);

        Ok(&self.events[index])
    }

    fn allocate_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}
