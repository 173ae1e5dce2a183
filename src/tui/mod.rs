mod session;
mod presentation;
mod sample_events;
mod calendar_views;
mod dialogs;

pub use sample_events::sample_store;
pub use session::run_tui;
