pub mod day;
pub mod event_list;
pub mod month;
pub mod week;
