use color_eyre::Result;
use std::path::PathBuf;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize file logging using tracing.
///
/// Uses RUST_LOG environment variable for filtering, or defaults to INFO
/// level. Examples:
///   RUST_LOG=riffle::window=debug  - Only debug the navigation window
pub fn init() -> Result<()> {
    let log_file = std::fs::File::create(log_file_path())?;

    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .try_from_env()
        .or_else(|_| EnvFilter::try_new("info"))?;

    let file_subscriber = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}

/// Log next to the persisted state in ~/.riffle, falling back to the working
/// directory when no home directory is available.
fn log_file_path() -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        let dir = home.join(".riffle");
        if dir.exists() || std::fs::create_dir_all(&dir).is_ok() {
            return dir.join("riffle.log");
        }
    }
    PathBuf::from("riffle.log")
}
