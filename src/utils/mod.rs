use std::sync::Once;
use std::{env, fs, io, path::Path, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".muni_masters";
const REGISTRY_DIR: &str = "registries";
const BACKUP_DIR: &str = "backups";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("muni_masters=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.muni_masters`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("MUNI_MASTERS_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Absolute path to the managed registries directory under `base`.
pub fn registries_dir_in(base: &Path) -> PathBuf {
    base.join(REGISTRY_DIR)
}

/// Base directory for backup snapshots under `base`.
pub fn backups_dir_in(base: &Path) -> PathBuf {
    base.join(BACKUP_DIR)
}

/// Creates `path` and its parents when absent.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
