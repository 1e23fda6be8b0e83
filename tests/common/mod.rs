//! Common test utilities and helpers

/// Test helper functions
pub mod helpers {
    /// Version literal the library is expected to report
    pub const EXPECTED_VERSION: &str = "0.0.1";

    /// Exact stdout of the executable
    pub fn expected_stdout() -> String {
        format!("Version: {}\n", EXPECTED_VERSION)
    }
}
