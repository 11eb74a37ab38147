#![forbid(unsafe_code)]

pub mod filter;
pub mod model;
pub mod reminders;
pub mod stats;
pub mod time;

pub use time::Clock;
