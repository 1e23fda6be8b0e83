//! Configuration management
//!
//! Settings only influence diagnostics; the version line printed by the
//! executable never depends on them.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::{LoggingSettings, Settings};
