//! Core operations for dotenv-props
//!
//! Loads documents through the format handlers, remaps keys between
//! mappings and folds several documents into one.
//!
//! # Example
//!
//! ```ignore
//! use props_content::Format;
//! use props_core::{MappingPair, loader, map_keys};
//! use props_fs::DocumentRef;
//!
//! let source = loader::load(Format::Dotenv, &DocumentRef::from(".env"))?;
//! let destination = loader::load(Format::Properties, &DocumentRef::Empty)?;
//! let pairs = [MappingPair::new("MYSQL_USERNAME", "spring.datasource.username")];
//! let result = map_keys(&source, destination, &pairs);
//! ```

pub mod error;
pub mod loader;
pub mod mapper;
pub mod merger;

pub use error::{Error, Result};
pub use mapper::{MappingPair, map_keys};
pub use merger::{MergeReport, merge, merge_documents};
