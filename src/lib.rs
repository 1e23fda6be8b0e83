//! Minimal project template
//!
//! A library exposing its release version, and an `app` binary printing it.
//!
//! # Examples
//!
//! ```rust
//! assert_eq!(app::get_version(), "0.0.1");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod utils;

pub use config::Settings;
pub use error::{Error, Result};
pub use utils::{VERSION, get_version};
