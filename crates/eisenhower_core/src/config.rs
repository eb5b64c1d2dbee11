//! Application configuration.
//!
//! # Responsibility
//! - Collect the fixed settings the app starts with.
//!
//! # Invariants
//! - The process reads no arguments and no environment variables; every
//!   value here is a built-in default.
//! - Relative paths resolve against the working directory.

use crate::logging::default_log_level;
use crate::persist::DEFAULT_TASK_FILE_NAME;
use crate::render::GridLayout;
use std::path::PathBuf;

pub const WINDOW_TITLE: &str = "Interactive Eisenhower Matrix";
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub window_title: &'static str,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub tasks_file: PathBuf,
    pub log_level: &'static str,
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            window_title: WINDOW_TITLE,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            tasks_file: PathBuf::from(DEFAULT_TASK_FILE_NAME),
            log_level: default_log_level(),
            log_dir: cwd.join(LOG_DIR_NAME),
        }
    }
}

impl AppConfig {
    /// Grid laid out for the configured canvas size.
    pub fn grid_layout(&self) -> GridLayout {
        GridLayout::new(self.canvas_width, self.canvas_height)
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use std::path::Path;

    #[test]
    fn defaults_match_reference_window() {
        let config = AppConfig::default();
        assert_eq!(config.tasks_file, Path::new("tasks.json"));
        assert_eq!((config.canvas_width, config.canvas_height), (800.0, 600.0));
        assert!(config.log_dir.ends_with("logs"));
    }
}
