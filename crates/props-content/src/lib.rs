//! Dotenv and properties codecs for dotenv-props
//!
//! Both formats decode into a [`ConfigMapping`]; only the properties format
//! is ever written back out.

pub mod error;
pub mod format;
pub mod handlers;
pub mod mapping;

pub use error::{Error, Result};
pub use format::{Format, FormatHandler};
pub use handlers::{DotenvHandler, PropertiesHandler, WriterOptions};
pub use mapping::ConfigMapping;
