//! Canvas projection of the board scene.
//!
//! Paints the retained `Scene` plus the context menu, and turns raw mouse
//! events into `BoardInput` values. Holds no task state.

use crate::app::Message;
use eisenhower_core::controller::{ContextMenu, MENU_DELETE_LABEL};
use eisenhower_core::render::LabelOrientation;
use eisenhower_core::{Board, BoardInput, Point, Rect, Scene, Visual};
use iced::widget::canvas::{self, event, Frame, Geometry, Path, Stroke, Text};
use iced::{alignment, mouse, Color, Pixels, Rectangle, Renderer, Size, Theme, Vector};
use std::f32::consts::FRAC_PI_2;

// #ADD8E6
const TASK_FILL: Color = Color {
    r: 0.678,
    g: 0.847,
    b: 0.902,
    a: 1.0,
};
const BUTTON_FILL: Color = Color {
    r: 0.9,
    g: 0.9,
    b: 0.9,
    a: 1.0,
};
const MENU_FILL: Color = Color {
    r: 0.96,
    g: 0.96,
    b: 0.96,
    a: 1.0,
};
const BUTTON_TEXT_SIZE: f32 = 11.0;
const MENU_TEXT_SIZE: f32 = 12.0;
const MENU_TEXT_INSET: f32 = 10.0;

/// Mouse button state carried between canvas events.
#[derive(Debug, Default)]
pub struct PointerState {
    primary_down: bool,
}

pub struct BoardCanvas<'a> {
    board: &'a Board<Scene>,
}

impl<'a> BoardCanvas<'a> {
    pub fn new(board: &'a Board<Scene>) -> Self {
        Self { board }
    }
}

impl canvas::Program<Message> for BoardCanvas<'_> {
    type State = PointerState;

    fn update(
        &self,
        state: &mut PointerState,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        if self.board.is_prompting() {
            state.primary_down = false;
            return (event::Status::Ignored, None);
        }

        let canvas::Event::Mouse(mouse_event) = event else {
            return (event::Status::Ignored, None);
        };

        match translate(state, mouse_event, bounds, cursor) {
            Some(input) => (event::Status::Captured, Some(Message::Board(input))),
            None => (event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &PointerState,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(iced::Point::ORIGIN, bounds.size(), Color::WHITE);

        for (_, visual) in self.board.surface().items() {
            paint_visual(&mut frame, visual);
        }
        if let Some(menu) = self.board.menu() {
            paint_menu(&mut frame, menu);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &PointerState,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.primary_down && self.board.active().is_some() {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(position)
                if self
                    .board
                    .store()
                    .delete_button_at(to_board_point(position))
                    .is_some() =>
            {
                mouse::Interaction::Pointer
            }
            _ => mouse::Interaction::default(),
        }
    }
}

/// Maps one mouse event to a board input.
///
/// Presses only count inside the canvas; motion keeps tracking outside it
/// while the primary button is held, like a pointer grab.
fn translate(
    state: &mut PointerState,
    event: mouse::Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
) -> Option<BoardInput> {
    match event {
        mouse::Event::ButtonPressed(mouse::Button::Left) => {
            let position = cursor.position_in(bounds)?;
            state.primary_down = true;
            Some(BoardInput::PrimaryPress(to_board_point(position)))
        }
        mouse::Event::CursorMoved { .. } if state.primary_down => {
            let position = cursor.position_from(bounds.position())?;
            Some(BoardInput::PrimaryMove(to_board_point(position)))
        }
        mouse::Event::ButtonReleased(mouse::Button::Left) if state.primary_down => {
            state.primary_down = false;
            Some(BoardInput::PrimaryRelease)
        }
        mouse::Event::ButtonPressed(mouse::Button::Right) => {
            let position = cursor.position_in(bounds)?;
            Some(BoardInput::SecondaryPress(to_board_point(position)))
        }
        _ => None,
    }
}

fn to_board_point(point: iced::Point) -> Point {
    Point::new(f64::from(point.x), f64::from(point.y))
}

fn to_canvas_point(point: Point) -> iced::Point {
    iced::Point::new(point.x as f32, point.y as f32)
}

fn rect_path(rect: &Rect) -> Path {
    Path::rectangle(
        to_canvas_point(rect.min),
        Size::new(rect.width() as f32, rect.height() as f32),
    )
}

fn outline(width: f32) -> Stroke<'static> {
    Stroke::default().with_width(width).with_color(Color::BLACK)
}

fn centered_text(content: &str, position: iced::Point, size: f32) -> Text {
    Text {
        content: content.to_string(),
        position,
        color: Color::BLACK,
        size: Pixels(size),
        horizontal_alignment: alignment::Horizontal::Center,
        vertical_alignment: alignment::Vertical::Center,
        ..Text::default()
    }
}

fn paint_visual(frame: &mut Frame, visual: &Visual) {
    match visual {
        Visual::Line { from, to, width } => {
            let path = Path::line(to_canvas_point(*from), to_canvas_point(*to));
            frame.stroke(&path, outline(*width as f32));
        }
        Visual::Text {
            at,
            content,
            size,
            orientation,
        } => match orientation {
            LabelOrientation::Horizontal => {
                frame.fill_text(centered_text(content, to_canvas_point(*at), *size as f32));
            }
            LabelOrientation::Vertical => {
                let anchor = to_canvas_point(*at);
                frame.with_save(|frame| {
                    frame.translate(Vector::new(anchor.x, anchor.y));
                    frame.rotate(-FRAC_PI_2);
                    frame.fill_text(centered_text(content, iced::Point::ORIGIN, *size as f32));
                });
            }
        },
        Visual::TaskBox { bounds } => {
            let path = rect_path(bounds);
            frame.fill(&path, TASK_FILL);
            frame.stroke(&path, outline(1.0));
        }
        Visual::Button { bounds, caption } => {
            let path = rect_path(bounds);
            frame.fill(&path, BUTTON_FILL);
            frame.stroke(&path, outline(1.0));
            frame.fill_text(centered_text(
                caption,
                to_canvas_point(bounds.center()),
                BUTTON_TEXT_SIZE,
            ));
        }
    }
}

fn paint_menu(frame: &mut Frame, menu: &ContextMenu) {
    let item = menu.delete_item_bounds();
    let path = rect_path(&item);
    frame.fill(&path, MENU_FILL);
    frame.stroke(&path, outline(1.0));

    let origin = to_canvas_point(item.min);
    frame.fill_text(Text {
        content: MENU_DELETE_LABEL.to_string(),
        position: iced::Point::new(
            origin.x + MENU_TEXT_INSET,
            origin.y + item.height() as f32 / 2.0,
        ),
        color: Color::BLACK,
        size: Pixels(MENU_TEXT_SIZE),
        vertical_alignment: alignment::Vertical::Center,
        ..Text::default()
    });
}

#[cfg(test)]
mod tests {
    use super::{translate, PointerState};
    use eisenhower_core::{BoardInput, Point};
    use iced::{mouse, Rectangle, Size};

    fn bounds() -> Rectangle {
        Rectangle::new(iced::Point::new(10.0, 20.0), Size::new(800.0, 600.0))
    }

    fn at(x: f32, y: f32) -> mouse::Cursor {
        mouse::Cursor::Available(iced::Point::new(x, y))
    }

    #[test]
    fn press_is_reported_in_canvas_coordinates() {
        let mut state = PointerState::default();
        let input = translate(
            &mut state,
            mouse::Event::ButtonPressed(mouse::Button::Left),
            bounds(),
            at(110.0, 120.0),
        );
        assert_eq!(input, Some(BoardInput::PrimaryPress(Point::new(100.0, 100.0))));
        assert!(state.primary_down);
    }

    #[test]
    fn motion_without_primary_button_is_ignored() {
        let mut state = PointerState::default();
        let input = translate(
            &mut state,
            mouse::Event::CursorMoved {
                position: iced::Point::new(50.0, 50.0),
            },
            bounds(),
            at(50.0, 50.0),
        );
        assert_eq!(input, None);
    }

    #[test]
    fn held_motion_tracks_outside_the_canvas_until_release() {
        let mut state = PointerState { primary_down: true };
        let moved = translate(
            &mut state,
            mouse::Event::CursorMoved {
                position: iced::Point::new(900.0, 5.0),
            },
            bounds(),
            at(900.0, 5.0),
        );
        assert_eq!(moved, Some(BoardInput::PrimaryMove(Point::new(890.0, -15.0))));

        let released = translate(
            &mut state,
            mouse::Event::ButtonReleased(mouse::Button::Left),
            bounds(),
            at(900.0, 5.0),
        );
        assert_eq!(released, Some(BoardInput::PrimaryRelease));
        assert!(!state.primary_down);
    }

    #[test]
    fn right_press_outside_canvas_is_ignored() {
        let mut state = PointerState::default();
        let input = translate(
            &mut state,
            mouse::Event::ButtonPressed(mouse::Button::Right),
            bounds(),
            at(0.0, 0.0),
        );
        assert_eq!(input, None);
    }
}
