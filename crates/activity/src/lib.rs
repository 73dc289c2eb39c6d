//! Activity feed over catalog events.
//!
//! A pure, in-memory projection: catalog events go in, human-readable
//! activity entries come out. Where those entries are persisted or rendered
//! is the surrounding application's concern.

pub mod entry;
pub mod feed;
pub mod time;

pub use entry::{ActivityAction, ActivityEntry};
pub use feed::ActivityFeed;
pub use time::format_time_ago;
