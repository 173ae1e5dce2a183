pub mod draft;
pub mod event;
pub mod palette;
pub mod policy;
pub mod store;

pub use draft::Draft;
pub use event::{Event, EventStatus};
pub use palette::{Border, DisplayEvent, Fill};
pub use policy::WeekdayPolicy;
pub use store::{Confirm, EventStore, StoreError};
