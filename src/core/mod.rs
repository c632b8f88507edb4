pub mod config;
pub mod events;
pub mod log;
pub mod members;
pub mod reference;
pub mod tracker;

pub use tracker::{AttendanceTracker, Clock, SystemClock};
