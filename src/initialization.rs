use std::env;
use log::info;
use crate::config::{load_config, Config};
use crate::errors::ConfigError;
use crate::logging::setup_logger;

/// Loads configuration and sets up logging
///
/// The configuration file is given as `--config=<path>`, built-in defaults are used without it.
pub fn init() -> Result<Config, ConfigError> {
    let args: Vec<String> = env::args().collect();

    let config = match config_path(&args) {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    let _ = setup_logger(&config.general.log_path, config.general.log_level, config.general.log_to_stdout)?;

    info!("starting weatherforecast version: {}", env!("CARGO_PKG_VERSION"));

    Ok(config)
}

/// Picks the configuration path out of the command line arguments
///
/// # Arguments
///
/// * 'args' - command line arguments
fn config_path(args: &[String]) -> Option<&str> {
    args.iter()
        .find_map(|a| a.strip_prefix("--config="))
}
