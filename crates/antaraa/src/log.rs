//! Logging for antaraa.
use anyhow::Context;
use antaraa_core::get_data_dir;
use std::io::LineWriter;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::time::OffsetTime;

const MAX_LOG_SIZE: u64 = 100 * 1024;

/// Initializes file based logging at `<data_dir>/antaraa.log`.
///
/// A log larger than 100KB is moved to `antaraa.log.old` first. Message
/// contents are never logged, only turn metadata and errors.
///
/// # Errors
///
/// Fails if the data directory or log file cannot be prepared, or the local
/// time offset cannot be determined.
pub fn setup_logging() -> anyhow::Result<()> {
    let data_dir = get_data_dir().context("Failed to get data directory")?;
    let log_path = rotate_log(&data_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    // Flush after every line
    let writer = Mutex::new(LineWriter::new(log_file));

    tracing_subscriber::fmt()
        .with_env_filter("antaraa=debug,antaraa_core=debug,rustyline=info")
        .with_writer(writer)
        .with_ansi(false)
        .with_timer(OffsetTime::local_rfc_3339()?)
        .init();
    Ok(())
}

/// Returns the log path, moving an oversized log out of the way.
fn rotate_log(data_dir: &Path) -> std::io::Result<PathBuf> {
    let log_path = data_dir.join("antaraa.log");

    if log_path.exists() && std::fs::metadata(&log_path)?.len() > MAX_LOG_SIZE {
        let backup_path = data_dir.join("antaraa.log.old");
        if backup_path.exists() {
            std::fs::remove_file(&backup_path)?;
        }
        std::fs::rename(&log_path, backup_path)?;
    }

    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_log_keeps_small_log() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("antaraa.log"), "short").unwrap();

        let log_path = rotate_log(dir.path()).unwrap();

        assert_eq!(std::fs::read_to_string(log_path).unwrap(), "short");
        assert!(!dir.path().join("antaraa.log.old").exists());
    }

    #[test]
    fn test_rotate_log_moves_large_log() {
        let dir = tempfile::tempdir().unwrap();
        let big = "x".repeat(MAX_LOG_SIZE as usize + 1);
        std::fs::write(dir.path().join("antaraa.log"), &big).unwrap();
        std::fs::write(dir.path().join("antaraa.log.old"), "stale").unwrap();

        let log_path = rotate_log(dir.path()).unwrap();

        assert!(!log_path.exists());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("antaraa.log.old")).unwrap(),
            big
        );
    }
}
