//! Format handlers

mod dotenv;
mod properties;

pub use dotenv::DotenvHandler;
pub use properties::{PropertiesHandler, WriterOptions};
