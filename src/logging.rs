//! Logger setup for the binary.

use color_eyre::eyre::Result;
use log::LevelFilter;

/// Installs a stderr logger at `level`.
///
/// The `RUST_LOG` environment variable, when set, takes precedence over `level`.
///
/// # Errors
///
/// This function fails if a logger has already been installed.
pub fn init_logging(level: LevelFilter) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init()?;

    Ok(())
}
