//! Static matrix grid layout.

use crate::model::geometry::Point;

pub const GRID_LINE_WIDTH: f64 = 2.0;
pub const AXIS_LABEL_SIZE: f64 = 12.0;
/// Distance of the axis labels from the top and left edges.
pub const AXIS_LABEL_INSET: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelOrientation {
    Horizontal,
    /// Rotated 90 degrees counter-clockwise.
    Vertical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub from: Point,
    pub to: Point,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridLabel {
    pub at: Point,
    pub text: &'static str,
    pub size: f64,
    pub orientation: LabelOrientation,
}

/// Centrelines and axis labels for a canvas of a given size.
///
/// Urgency runs along the top edge, importance down the left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub lines: [GridLine; 2],
    pub labels: [GridLabel; 4],
}

impl GridLayout {
    pub fn new(width: f64, height: f64) -> Self {
        let mid_x = width / 2.0;
        let mid_y = height / 2.0;

        let line = |from, to| GridLine {
            from,
            to,
            width: GRID_LINE_WIDTH,
        };
        let label = |at, text, orientation| GridLabel {
            at,
            text,
            size: AXIS_LABEL_SIZE,
            orientation,
        };

        Self {
            lines: [
                line(Point::new(mid_x, 0.0), Point::new(mid_x, height)),
                line(Point::new(0.0, mid_y), Point::new(width, mid_y)),
            ],
            labels: [
                label(
                    Point::new(mid_x / 2.0, AXIS_LABEL_INSET),
                    "Urgent",
                    LabelOrientation::Horizontal,
                ),
                label(
                    Point::new(3.0 * mid_x / 2.0, AXIS_LABEL_INSET),
                    "Not Urgent",
                    LabelOrientation::Horizontal,
                ),
                label(
                    Point::new(AXIS_LABEL_INSET, mid_y / 2.0),
                    "Important",
                    LabelOrientation::Vertical,
                ),
                label(
                    Point::new(AXIS_LABEL_INSET, 3.0 * mid_y / 2.0),
                    "Not Important",
                    LabelOrientation::Vertical,
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GridLayout, LabelOrientation};
    use crate::model::geometry::Point;

    #[test]
    fn default_canvas_places_labels_at_half_midpoints() {
        let layout = GridLayout::new(800.0, 600.0);

        assert_eq!(layout.lines[0].from, Point::new(400.0, 0.0));
        assert_eq!(layout.lines[1].to, Point::new(800.0, 300.0));

        let placed: Vec<_> = layout
            .labels
            .iter()
            .map(|label| (label.text, label.at, label.orientation))
            .collect();
        assert_eq!(
            placed,
            vec![
                (
                    "Urgent",
                    Point::new(200.0, 20.0),
                    LabelOrientation::Horizontal,
                ),
                (
                    "Not Urgent",
                    Point::new(600.0, 20.0),
                    LabelOrientation::Horizontal,
                ),
                (
                    "Important",
                    Point::new(20.0, 150.0),
                    LabelOrientation::Vertical,
                ),
                (
                    "Not Important",
                    Point::new(20.0, 450.0),
                    LabelOrientation::Vertical,
                ),
            ]
        );
    }
}
