//! Thin wrappers over browser events. Each one subscribes when the owning
//! component mounts and removes its listener on cleanup.

mod magnetic;
mod media_query;
mod scroll;

pub use magnetic::{magnetic_offset, use_magnetic, Bounds, MAGNETIC_PADDING};
pub use media_query::{use_media_query, MOBILE_QUERY};
pub use scroll::{use_scroll_direction, ScrollDirection, ScrollState, ScrollTracker};
