//! Desktop entry point.
//!
//! # Responsibility
//! - Start logging, load the task file, open the matrix window.
//! - Refuse to start when the task file is unreadable or malformed.

mod app;
mod board_canvas;

use app::MatrixApp;
use eisenhower_core::{init_logging, AppConfig, TaskFile};
use iced::{Size, Task, Theme};
use log::error;

fn main() -> iced::Result {
    let config = AppConfig::default();
    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("file logging disabled: {err}");
    }

    let task_file = TaskFile::new(&config.tasks_file);
    let records = match task_file.load() {
        Ok(records) => records,
        Err(err) => {
            error!("event=startup module=app status=error error={err}");
            eprintln!("cannot load `{}`: {err}", task_file.path().display());
            std::process::exit(1);
        }
    };

    let app = match MatrixApp::new(&config, task_file, &records) {
        Ok(app) => app,
        Err(err) => {
            error!("event=startup module=app status=error error={err}");
            eprintln!("cannot restore tasks: {err}");
            std::process::exit(1);
        }
    };

    iced::application(config.window_title, MatrixApp::update, MatrixApp::view)
        .subscription(MatrixApp::subscription)
        .theme(|_| Theme::Light)
        .window_size(Size::new(
            config.canvas_width as f32,
            config.canvas_height as f32,
        ))
        .exit_on_close_request(false)
        .run_with(move || (app, Task::none()))
}
