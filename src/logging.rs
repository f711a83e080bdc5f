//! File logging.
//!
//! The terminal belongs to the TUI while the game runs, so log records go to
//! a file instead of stderr.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Install a global logger writing to `path`, truncating any previous log
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    WriteLogger::init(level, config, file).context("Failed to install logger")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snake.log");

        init(&path, LevelFilter::Info).unwrap();
        log::info!("hello from the log test");
        log::logger().flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("hello from the log test"));

        // The global logger can only be installed once
        assert!(init(&dir.path().join("again.log"), LevelFilter::Info).is_err());
    }

    #[test]
    fn test_init_reports_bad_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("snake.log");

        let err = init(&path, LevelFilter::Info).unwrap_err();
        assert!(err.to_string().contains("Failed to create log file"));
    }
}
