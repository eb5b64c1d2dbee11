//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `eisenhower_core` linkage without starting the GUI.
//! - Report what the desktop app would load from the working directory.

use eisenhower_core::{AppConfig, TaskFile};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = AppConfig::default();
    let task_file = TaskFile::new(&config.tasks_file);

    println!("eisenhower_core version={}", eisenhower_core::core_version());
    match task_file.load() {
        Ok(records) => {
            println!(
                "tasks file={} count={}",
                task_file.path().display(),
                records.len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("tasks file={} error={err}", task_file.path().display());
            ExitCode::FAILURE
        }
    }
}
