use std::path::PathBuf;

use color_eyre::eyre::{Result, eyre};
use lazy_static::lazy_static;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

use crate::config::project_dirs;

lazy_static! {
    pub static ref LOG_ENV: String = format!("{}_LOG", env!("CARGO_PKG_NAME").to_uppercase());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

pub fn log_dir() -> Result<PathBuf> {
    project_dirs()
        .map(|d| d.data_local_dir().to_path_buf())
        .ok_or_else(|| eyre!("Could not determine a directory for log files"))
}

/// Logs go to a file: stdout belongs to the terminal UI.
pub fn initialize_logging() -> Result<()> {
    let directory = log_dir()?;
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(directory.join(LOG_FILE.as_str()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV.as_str())
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME"))));

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}
