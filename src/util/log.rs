use std::path::PathBuf;

use color_eyre::eyre::eyre;
use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "songle.log";
const LOG_ENV: &str = "SONGLE_LOG_LEVEL";

pub fn data_dir() -> color_eyre::Result<PathBuf> {
    ProjectDirs::from("com", "songle", "songle")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .ok_or_else(|| eyre!("Could not determine a data directory"))
}

/// Routes `tracing` output to a file; the terminal belongs to the UI.
pub fn initialize_logging() -> color_eyre::Result<()> {
    let directory = data_dir()?;
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(directory.join(LOG_FILE))?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME"))));

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(filter)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}
