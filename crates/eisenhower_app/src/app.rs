//! Application state and message loop.
//!
//! # Responsibility
//! - Route canvas, prompt and keyboard messages into the board.
//! - Render the modal description prompt over the canvas.
//! - Save the task file when the window is asked to close.
//!
//! # Invariants
//! - The board is only mutated from `update`.
//! - Close requests always end the process, even when saving fails.

use crate::board_canvas::BoardCanvas;
use eisenhower_core::controller::{PROMPT_MESSAGE, PROMPT_TITLE};
use eisenhower_core::{
    AppConfig, Board, BoardEffect, BoardInput, Scene, TaskFile, TaskRecord, TaskValidationError,
};
use iced::widget::{
    button, canvas, column, container, horizontal_space, opaque, row, stack, text, text_input,
    Space,
};
use iced::{keyboard, window, Background, Border, Color, Element, Length, Subscription, Task};
use log::{error, info};

const PROMPT_INPUT_ID: &str = "task-description";

#[derive(Debug, Clone)]
pub enum Message {
    Board(BoardInput),
    PromptChanged(String),
    PromptSubmit,
    PromptCancel,
    EscapePressed,
    CloseRequested(window::Id),
}

pub struct MatrixApp {
    board: Board<Scene>,
    task_file: TaskFile,
    prompt_text: String,
}

impl MatrixApp {
    /// Builds the board for `config` and restores `records` onto it.
    pub fn new(
        config: &AppConfig,
        task_file: TaskFile,
        records: &[TaskRecord],
    ) -> Result<Self, TaskValidationError> {
        let mut board = Board::new(Scene::new(), &config.grid_layout());
        board.load(records)?;
        info!(
            "event=app_ready module=app status=ok tasks={} file={}",
            board.store().len(),
            task_file.path().display()
        );
        Ok(Self {
            board,
            task_file,
            prompt_text: String::new(),
        })
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Board(input) => self.dispatch(input),
            Message::PromptChanged(value) => {
                self.prompt_text = value;
                Task::none()
            }
            Message::PromptSubmit => {
                let value = std::mem::take(&mut self.prompt_text);
                self.dispatch(BoardInput::PromptSubmitted(value))
            }
            Message::PromptCancel => {
                self.prompt_text.clear();
                self.dispatch(BoardInput::PromptCancelled)
            }
            Message::EscapePressed => {
                if self.board.is_prompting() {
                    self.prompt_text.clear();
                    self.dispatch(BoardInput::PromptCancelled)
                } else {
                    self.dispatch(BoardInput::MenuDismissed)
                }
            }
            Message::CloseRequested(_) => {
                self.save();
                iced::exit()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let board = canvas(BoardCanvas::new(&self.board))
            .width(Length::Fill)
            .height(Length::Fill);

        if self.board.is_prompting() {
            stack![board, self.view_prompt()].into()
        } else {
            board.into()
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            window::close_requests().map(Message::CloseRequested),
            keyboard::on_key_press(|key, _modifiers| match key {
                keyboard::Key::Named(keyboard::key::Named::Escape) => {
                    Some(Message::EscapePressed)
                }
                _ => None,
            }),
        ])
    }

    fn dispatch(&mut self, input: BoardInput) -> Task<Message> {
        match self.board.dispatch(input) {
            Ok(BoardEffect::PromptOpened { .. }) => {
                self.prompt_text.clear();
                text_input::focus(text_input::Id::new(PROMPT_INPUT_ID))
            }
            Ok(_) => Task::none(),
            Err(err) => {
                error!("event=dispatch module=app status=error error={err}");
                debug_assert!(false, "board contract violation: {err}");
                Task::none()
            }
        }
    }

    fn save(&self) {
        if let Err(err) = self.task_file.save(&self.board.snapshot()) {
            eprintln!(
                "failed to save tasks to `{}`: {err}",
                self.task_file.path().display()
            );
        }
    }

    fn view_prompt(&self) -> Element<'_, Message> {
        let dialog = container(
            column![
                text(PROMPT_TITLE).size(16),
                Space::with_height(10),
                text(PROMPT_MESSAGE).size(13),
                Space::with_height(6),
                text_input("", &self.prompt_text)
                    .id(text_input::Id::new(PROMPT_INPUT_ID))
                    .on_input(Message::PromptChanged)
                    .on_submit(Message::PromptSubmit)
                    .padding(8)
                    .size(14),
                Space::with_height(12),
                row![
                    horizontal_space(),
                    button(text("OK")).on_press(Message::PromptSubmit),
                    Space::with_width(8),
                    button(text("Cancel")).on_press(Message::PromptCancel),
                ]
                .align_y(iced::Alignment::Center),
            ]
            .padding(20)
            .width(320),
        )
        .width(Length::Shrink)
        .style(|_| container::Style {
            background: Some(Background::Color(Color::WHITE)),
            border: Border {
                color: Color::BLACK,
                width: 1.0,
                radius: 4.0_f32.into(),
            },
            ..Default::default()
        });

        // Swallows clicks so the board underneath stays untouched.
        let backdrop = opaque(
            container(Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_| container::Style {
                    background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.3))),
                    ..Default::default()
                }),
        );

        let centered = container(dialog)
            .center_x(Length::Fill)
            .center_y(Length::Fill);

        stack![backdrop, centered].into()
    }
}
