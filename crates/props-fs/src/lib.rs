//! Filesystem access for dotenv-props
//!
//! Resolves document arguments (including the `-` sentinel), reads source
//! files, writes output atomically and loads the optional settings file.

pub mod config;
pub mod document;
pub mod error;
pub mod io;

pub use config::{ConfigStore, OutputSettings, Settings};
pub use document::DocumentRef;
pub use error::{Error, Result};
