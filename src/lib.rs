pub mod calendar;
pub mod input;
pub mod ui;
pub mod storage;
pub mod app;

pub use calendar::{Event, EventStatus, EventStore, StoreError, WeekdayPolicy};
pub use app::{AppState, Mode, ViewType};

pub use input::{normal_mode, command_mode};
