//! Progress notification for slow steps (provider calls, git commit).

pub mod indicator;
pub mod observer;
pub mod ticker;

pub use indicator::ProgressIndicator;
pub use observer::{Observer, Status, Subscriber};
pub use ticker::{TICK_PERIOD, drive_with_ticks};
