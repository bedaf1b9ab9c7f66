//! File logging for the summarizer.
//!
//! Stdout is the interactive console, so nothing is logged unless
//! `BART_SUMMARIZER_LOG` names a file. The level follows `RUST_LOG` and
//! defaults to `info`.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "BART_SUMMARIZER_LOG";

/// Install the file subscriber when logging is requested.
///
/// Returns the file being written. Its name carries a `.{unix_secs}.{pid}`
/// suffix so that sessions running side by side keep separate logs.
pub fn init_tracing() -> Option<PathBuf> {
    let base = std::env::var_os(LOG_ENV_VAR)?;
    let path = log_file_path(Path::new(&base), unix_secs(), std::process::id());

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: cannot open log file {}: {}", path.display(), err);
            return None;
        }
    };

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_timer(fmt::time::UtcTime::rfc_3339()),
        )
        .try_init()
        .ok()?;

    Some(path)
}

fn log_file_path(base: &Path, unix_secs: u64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{}.{}", unix_secs, pid));
    PathBuf::from(name)
}

fn unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
