//! Library version information
//!
//! The version string comes from the package manifest, so `Cargo.toml`
//! is the only place it is written down.

/// Release version of this library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the library version
///
/// Always returns the same non-empty string for a given build.
///
/// ```rust
/// assert_eq!(app::get_version(), "0.0.1");
/// ```
pub fn get_version() -> &'static str {
    VERSION
}
