//! Prints the library version
//!
//! # Usage
//!
//! ```bash
//! app
//! ```
//!
//! # Output
//!
//! ```text
//! Version: 0.0.1
//! ```

use app::cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_lenient(std::env::args_os());
    run(&cli)?;
    Ok(())
}
