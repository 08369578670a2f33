//! Word lists for picking targets
//!
//! Provides an embedded target list compiled into the binary, file loading
//! for custom lists, and strategies for picking the next target.

mod embedded;
pub mod loader;
pub mod picker;

pub use embedded::{TARGETS, TARGETS_COUNT};
pub use picker::{CyclePicker, RandomPicker, WordPicker};
