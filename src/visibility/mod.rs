//! # Visibility
//!
//! Turns a stream of intersection records for one anchor element into
//! "became visible" edges. The observation primitive itself is abstracted behind
//! [`Observation`](watcher::Observation) so the edge logic does not depend on the
//! browser, the desktop webview, or a test double.

mod entry;
mod watcher;

pub use entry::{IntersectionEntry, TriggerMargin};
pub use watcher::{Observation, TriggerMode, VisibilityWatcher};
