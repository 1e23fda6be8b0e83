//! Error handling
//!
//! The version operation itself cannot fail; these errors come from
//! loading configuration and writing output.

pub mod types;

pub use types::{Error, Result};
