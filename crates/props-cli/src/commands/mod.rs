//! Command implementations for props-cli

pub mod map;
pub mod merge;
pub mod output;
pub mod read;

pub use map::run_map;
pub use merge::run_merge;
pub use read::run_read;
