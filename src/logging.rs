use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::settings::{log_path, Settings};

/// `RUST_LOG` wins over the configured level.
fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("educarenda={}", settings.log_level))
    })
}

/// Log to stderr. Used by the one-shot commands.
pub fn init_stderr(settings: &Settings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Log to a file in the config dir so the TUI keeps the terminal to itself.
/// Returns false when the file can't be opened; logging is then off for
/// the session and the app runs anyway.
pub fn init_file(settings: &Settings) -> bool {
    init_file_at(settings, &log_path())
}

fn open_log(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

fn init_file_at(settings: &Settings, path: &Path) -> bool {
    match open_log(path) {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter(settings))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
            true
        }
        Err(e) => {
            // The terminal is still ours until the TUI starts
            let stderr = tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_target(false)
                .finish();
            tracing::subscriber::with_default(stderr, || {
                warn!(path = %path.display(), error = %e, "cannot open log file, logging disabled");
            });
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritable_log_path_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("educarenda.log");

        assert!(open_log(&path).is_err());
        assert!(!init_file_at(&Settings::default(), &path));
    }

    #[test]
    fn test_open_log_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("educarenda.log");
        open_log(&path).unwrap();
        assert!(path.exists());
    }
}
