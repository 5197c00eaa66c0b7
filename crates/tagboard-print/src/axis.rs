//! Coordinate-axis overlay marking the board origin.

use tagboard_core::{DrawingSurface, Point2, Rgb, Stroke, TextStyle};

pub const AXIS_STROKE_WIDTH: f32 = 3.0;
pub const AXIS_LABEL_SIZE: f32 = 20.0;
const MAX_HEAD_LENGTH: f32 = 12.0;

const X_STROKE: Stroke = Stroke {
    width: AXIS_STROKE_WIDTH,
    color: Rgb::RED,
};
const Y_STROKE: Stroke = Stroke {
    width: AXIS_STROKE_WIDTH,
    color: Rgb::GREEN,
};
const LABEL: TextStyle = TextStyle {
    size: AXIS_LABEL_SIZE,
    color: Rgb::DARK_BLUE,
};

/// Draw an `x` arrow to the right and a `y` arrow downwards from `origin`,
/// each with an arrowhead and a label just past its tip.
///
/// Does nothing when `length` is zero.
pub fn draw_axes<S: DrawingSurface + ?Sized>(surface: &mut S, origin: Point2<f32>, length: f32) {
    if length <= 0.0 {
        return;
    }
    let head = (length / 4.0).min(MAX_HEAD_LENGTH);
    let label_gap = 0.75 * AXIS_LABEL_SIZE;

    let x_tip = Point2::new(origin.x + length, origin.y);
    surface.draw_line(origin, x_tip, X_STROKE);
    surface.draw_line(x_tip, Point2::new(x_tip.x - head, x_tip.y - head / 2.0), X_STROKE);
    surface.draw_line(x_tip, Point2::new(x_tip.x - head, x_tip.y + head / 2.0), X_STROKE);
    surface.draw_text(Point2::new(x_tip.x + label_gap, x_tip.y), "x", LABEL);

    let y_tip = Point2::new(origin.x, origin.y + length);
    surface.draw_line(origin, y_tip, Y_STROKE);
    surface.draw_line(y_tip, Point2::new(y_tip.x - head / 2.0, y_tip.y - head), Y_STROKE);
    surface.draw_line(y_tip, Point2::new(y_tip.x + head / 2.0, y_tip.y - head), Y_STROKE);
    surface.draw_text(Point2::new(y_tip.x, y_tip.y + label_gap), "y", LABEL);
}
