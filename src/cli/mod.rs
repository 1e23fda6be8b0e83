//! Executable logic
//!
//! Prints the version line to stdout. Diagnostics go to stderr so stdout
//! only ever carries `Version: <value>`.

use crate::{Result, config::ConfigLoader, config::LoggingSettings, utils::version};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::io::Write;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Command line of the `app` binary
///
/// Arguments never change what is printed; unknown ones are ignored.
#[derive(Parser, Debug, Default)]
#[command(name = "app", about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Enable verbose logging on stderr
    #[arg(long)]
    pub verbose: bool,

    /// TOML file with logging settings
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Arguments accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

impl Cli {
    /// Parse arguments, falling back to defaults instead of failing
    pub fn parse_lenient<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).unwrap_or_default()
    }
}

/// Initialize the stderr logger
///
/// `RUST_LOG` takes precedence over the configured level. Calling this more
/// than once is harmless.
pub fn init_logging(logging: &LoggingSettings) {
    let level = if logging.verbose {
        "debug"
    } else {
        logging.level.as_str()
    };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// The line printed by the executable, without trailing newline
pub fn render_version_line() -> String {
    format!("Version: {}", version::get_version())
}

/// Write the version line to `out`
pub fn write_version<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", render_version_line())?;
    out.flush()?;
    Ok(())
}

/// Run the executable
pub fn run(cli: &Cli) -> Result<()> {
    let (mut settings, load_error) = ConfigLoader::new().load_or_defaults(cli.config.as_deref());
    settings.logging.verbose |= cli.verbose;
    init_logging(&settings.logging);

    match load_error {
        Some(e) => warn!("Failed to load settings: {}. Using defaults.", e),
        None => debug!("Configuration loaded: {:?}", settings),
    }

    if !cli.ignored.is_empty() {
        debug!("Ignoring arguments: {:?}", cli.ignored);
    }
    debug!("Reporting version {}", version::get_version());

    write_version(&mut std::io::stdout().lock())
}
