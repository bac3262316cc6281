//! # Corbel Sketch
//!
//! Renderer-agnostic geometry for the corbel diagram: the b × h section
//! scaled into a unit box, the reinforcement line at d1 below the top face,
//! and the design forces as labelled arrows.
//!
//! Coordinates are normalized to `[0, 1] × [0, 1]` with the origin at the
//! bottom-left and y pointing up. A renderer maps them onto its own canvas
//! (see `corbel_gui::ui::shared::diagrams`).
//!
//! Only the input geometry and forces are drawn; the sketch does not depend
//! on the computed result.

use serde::Serialize;

use crate::calculations::corbel::CorbelInput;
use crate::report::{format_force, format_length};

/// Largest side of the section in unit-box coordinates
const SECTION_EXTENT: f64 = 0.55;

/// Bottom margin below the section
const BOTTOM_MARGIN: f64 = 0.1;

/// Length of the force arrows
const ARROW_LENGTH: f64 = 0.2;

/// Inset of the vertical arrow from the free (right) edge
const ARROW_INSET: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle anchored at its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// A force arrow pointing from `tail` to `head`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arrow {
    pub tail: Point,
    pub head: Point,
    pub label: String,
}

impl Arrow {
    /// The two short strokes forming the arrow head, `size` long each
    pub fn head_strokes(&self, size: f64) -> [Segment; 2] {
        let dx = self.head.x - self.tail.x;
        let dy = self.head.y - self.tail.y;
        let len = (dx * dx + dy * dy).sqrt();
        let (ux, uy) = if len > 0.0 { (dx / len, dy / len) } else { (0.0, -1.0) };

        // Back along the shaft, spread 30 degrees either side
        let (sin, cos) = (0.5_f64, 3.0_f64.sqrt() / 2.0);
        let left = Point::new(
            self.head.x - size * (ux * cos - uy * sin),
            self.head.y - size * (uy * cos + ux * sin),
        );
        let right = Point::new(
            self.head.x - size * (ux * cos + uy * sin),
            self.head.y - size * (uy * cos - ux * sin),
        );
        [
            Segment { start: self.head, end: left },
            Segment { start: self.head, end: right },
        ]
    }
}

/// Everything a renderer needs to draw the corbel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorbelSketch {
    pub section: Rect,
    /// Reinforcement line, d1 below the top face
    pub cover_line: Segment,
    pub vertical_force: Arrow,
    /// Present only when Hed > 0
    pub horizontal_force: Option<Arrow>,
    pub width_label: String,
    pub depth_label: String,
    pub cover_label: String,
}

impl CorbelSketch {
    /// Build the sketch from the input geometry and forces.
    ///
    /// Expects a validated input (b > 0, h > 0, 0 <= d1 < h).
    pub fn from_input(input: &CorbelInput) -> Self {
        let scale = SECTION_EXTENT / input.b_m.max(input.h_m);
        let width = input.b_m * scale;
        let height = input.h_m * scale;

        let section = Rect {
            x: (1.0 - width) / 2.0,
            y: BOTTOM_MARGIN,
            width,
            height,
        };

        let cover_y = section.top() - input.d1_m * scale;
        let cover_line = Segment {
            start: Point::new(section.left(), cover_y),
            end: Point::new(section.right(), cover_y),
        };

        let load_x = section.right() - ARROW_INSET.min(width / 2.0);
        let vertical_force = Arrow {
            tail: Point::new(load_x, section.top() + ARROW_LENGTH),
            head: Point::new(load_x, section.top()),
            label: format!("Fed = {}", format_force(input.vertical_force())),
        };

        let horizontal_force = input.has_horizontal_force().then(|| Arrow {
            tail: Point::new(section.right(), section.top()),
            head: Point::new(section.right() + ARROW_LENGTH, section.top()),
            label: format!("Hed = {}", format_force(input.horizontal_force())),
        });

        CorbelSketch {
            section,
            cover_line,
            vertical_force,
            horizontal_force,
            width_label: format!("b = {}", format_length(input.width())),
            depth_label: format!("h = {}", format_length(input.depth())),
            cover_label: format!("d1 = {}", format_length(input.cover())),
        }
    }

    /// Every point of the sketch, for bounds checks
    pub fn points(&self) -> Vec<Point> {
        let mut points = vec![
            Point::new(self.section.left(), self.section.bottom()),
            Point::new(self.section.right(), self.section.top()),
            self.cover_line.start,
            self.cover_line.end,
            self.vertical_force.tail,
            self.vertical_force.head,
        ];
        if let Some(arrow) = &self.horizontal_force {
            points.push(arrow.tail);
            points.push(arrow.head);
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_default_sketch_has_no_horizontal_arrow() {
        let sketch = CorbelSketch::from_input(&CorbelInput::default());
        assert!(sketch.horizontal_force.is_none());
        assert_eq!(sketch.vertical_force.label, "Fed = 32.25 kN");
        assert_eq!(sketch.cover_label, "d1 = 0.050 m");
    }

    #[test]
    fn test_aspect_ratio_preserved() {
        let input = CorbelInput::default();
        let sketch = CorbelSketch::from_input(&input);
        let ratio = sketch.section.height / sketch.section.width;
        assert!((ratio - input.h_m / input.b_m).abs() < TOL);
        assert!((sketch.section.width - SECTION_EXTENT).abs() < TOL);
    }

    #[test]
    fn test_cover_line_position() {
        let input = CorbelInput::default();
        let sketch = CorbelSketch::from_input(&input);
        let scale = sketch.section.height / input.h_m;
        let expected = sketch.section.top() - input.d1_m * scale;
        assert!((sketch.cover_line.start.y - expected).abs() < TOL);
        assert!(sketch.cover_line.start.y > sketch.section.bottom());
    }

    #[test]
    fn test_horizontal_arrow_when_force_present() {
        let input = CorbelInput { hed_kn: 5.0, ..CorbelInput::default() };
        let sketch = CorbelSketch::from_input(&input);
        let arrow = sketch.horizontal_force.expect("Hed arrow");
        assert!(arrow.head.x > arrow.tail.x);
        assert_eq!(arrow.label, "Hed = 5.00 kN");
    }

    #[test]
    fn test_sketch_fits_unit_box() {
        for (b, h) in [(1.0, 0.15), (0.3, 1.2), (0.5, 0.5)] {
            let input = CorbelInput { b_m: b, h_m: h, hed_kn: 1.0, ..CorbelInput::default() };
            let sketch = CorbelSketch::from_input(&input);
            for p in sketch.points() {
                assert!((0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y), "{:?} out of box", p);
            }
        }
    }

    #[test]
    fn test_arrow_head_points_back_along_shaft() {
        let sketch = CorbelSketch::from_input(&CorbelInput::default());
        let [left, right] = sketch.vertical_force.head_strokes(0.02);
        // Downward arrow: head strokes rise above the tip on both sides
        assert!(left.end.y > left.start.y);
        assert!(right.end.y > right.start.y);
        assert!((left.end.x - sketch.vertical_force.head.x) * (right.end.x - sketch.vertical_force.head.x) < 0.0);
    }
}
