//! Canvas drawing of the corbel sketch
//!
//! Renders the section rectangle, the dashed reinforcement line, the force
//! arrows and the dimension labels. Geometry comes from
//! `corbel_core::diagram::CorbelSketch` in unit-box coordinates (y up); this
//! module only maps it onto the canvas.

use iced::widget::canvas::{self, Frame, Geometry, LineDash, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use corbel_core::diagram::{self, Arrow, CorbelSketch, Segment};

use crate::Message;

const MARGIN: f32 = 20.0;
const ARROW_HEAD_SIZE: f64 = 0.03;

/// Canvas program for drawing the corbel
pub struct CorbelDiagram {
    sketch: CorbelSketch,
}

impl CorbelDiagram {
    pub fn new(sketch: CorbelSketch) -> Self {
        Self { sketch }
    }
}

/// Maps the unit box onto the largest centered square that fits the canvas
struct Viewport {
    origin_x: f32,
    origin_y: f32,
    side: f32,
}

impl Viewport {
    fn fit(width: f32, height: f32) -> Self {
        let side = (width.min(height) - 2.0 * MARGIN).max(1.0);
        Self {
            origin_x: (width - side) / 2.0,
            origin_y: (height - side) / 2.0,
            side,
        }
    }

    fn map(&self, p: diagram::Point) -> Point {
        Point::new(
            self.origin_x + p.x as f32 * self.side,
            self.origin_y + (1.0 - p.y as f32) * self.side,
        )
    }

    fn segment(&self, segment: &Segment) -> Path {
        Path::line(self.map(segment.start), self.map(segment.end))
    }
}

fn draw_label(frame: &mut Frame, content: &str, position: Point, color: Color, align: iced::alignment::Horizontal) {
    frame.fill_text(Text {
        content: content.to_string(),
        position,
        color,
        size: iced::Pixels(10.0),
        align_x: align.into(),
        ..Text::default()
    });
}

fn draw_arrow(frame: &mut Frame, view: &Viewport, arrow: &Arrow, color: Color) {
    let stroke = Stroke::default().with_color(color).with_width(2.0);
    frame.stroke(&Path::line(view.map(arrow.tail), view.map(arrow.head)), stroke);
    for head in arrow.head_strokes(ARROW_HEAD_SIZE) {
        frame.stroke(&view.segment(&head), stroke);
    }
}

impl canvas::Program<Message> for CorbelDiagram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let view = Viewport::fit(bounds.width, bounds.height);

        let concrete_color = Color::from_rgb(0.3, 0.3, 0.3);
        let steel_color = Color::from_rgb(0.2, 0.5, 0.8);
        let force_color = Color::from_rgb(0.8, 0.2, 0.2);
        let label_color = Color::from_rgb(0.4, 0.4, 0.4);

        let section = &self.sketch.section;
        let top_left = view.map(diagram::Point::new(section.left(), section.top()));
        let bottom_right = view.map(diagram::Point::new(section.right(), section.bottom()));

        let outline = Path::new(|b| {
            b.move_to(top_left);
            b.line_to(Point::new(bottom_right.x, top_left.y));
            b.line_to(bottom_right);
            b.line_to(Point::new(top_left.x, bottom_right.y));
            b.close();
        });
        frame.fill(&outline, Color::from_rgb(0.92, 0.92, 0.92));
        frame.stroke(&outline, Stroke::default().with_color(concrete_color).with_width(2.0));

        let dashed = Stroke {
            line_dash: LineDash {
                segments: &[6.0, 4.0],
                offset: 0,
            },
            ..Stroke::default().with_color(steel_color).with_width(1.5)
        };
        frame.stroke(&view.segment(&self.sketch.cover_line), dashed);

        draw_arrow(&mut frame, &view, &self.sketch.vertical_force, force_color);
        let fed_tail = view.map(self.sketch.vertical_force.tail);
        draw_label(
            &mut frame,
            &self.sketch.vertical_force.label,
            Point::new(fed_tail.x, fed_tail.y - 14.0),
            force_color,
            iced::alignment::Horizontal::Center,
        );

        if let Some(arrow) = &self.sketch.horizontal_force {
            draw_arrow(&mut frame, &view, arrow, force_color);
            let hed_head = view.map(arrow.head);
            draw_label(
                &mut frame,
                &arrow.label,
                Point::new(hed_head.x, hed_head.y + 4.0),
                force_color,
                iced::alignment::Horizontal::Center,
            );
        }

        let mid_x = (top_left.x + bottom_right.x) / 2.0;
        let mid_y = (top_left.y + bottom_right.y) / 2.0;
        draw_label(
            &mut frame,
            &self.sketch.width_label,
            Point::new(mid_x, bottom_right.y + 4.0),
            label_color,
            iced::alignment::Horizontal::Center,
        );
        draw_label(
            &mut frame,
            &self.sketch.depth_label,
            Point::new(top_left.x - 6.0, mid_y),
            label_color,
            iced::alignment::Horizontal::Right,
        );
        let cover_start = view.map(self.sketch.cover_line.start);
        draw_label(
            &mut frame,
            &self.sketch.cover_label,
            Point::new(cover_start.x + 4.0, cover_start.y + 2.0),
            steel_color,
            iced::alignment::Horizontal::Left,
        );

        vec![frame.into_geometry()]
    }
}
