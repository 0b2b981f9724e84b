//! worldwatch-core: name resolution, time-window evaluation, record
//! classification, and report assembly for the world-state monitor.
//!
//! Everything in here is pure over its inputs: the mapping store is loaded
//! once and passed by reference, and no function touches the network.

pub mod classify;
pub mod mappings;
pub mod report;
pub mod resolve;
pub mod timewindow;

pub use mappings::{LoadWarning, MappingStore, category, load_store};
pub use report::render;
pub use timewindow::{DurationParts, Window, WindowStatus};
