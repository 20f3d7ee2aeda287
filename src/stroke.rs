// Stroke compositor: owns the persistent drawing layer.
//
// The layer starts black (no ink) and is only ever painted on. Erasing is
// painting black with the wider eraser line, never clearing.

use crate::draw::{fill_circle, thick_line};
use crate::layout::{Ink, Layout};
use crate::types::{FrameBuffer, Point};

pub struct StrokeCompositor {
    layer: FrameBuffer,
    /// Last fingertip of the stroke in progress; `None` between strokes.
    prev: Option<Point>,
}

/// What one Draw frame painted, for logging and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub layer_thickness: i32,
}

impl StrokeCompositor {
    pub fn new(width: usize, height: usize) -> Self {
        Self { layer: FrameBuffer::new(width, height), prev: None }
    }

    pub fn layer(&self) -> &FrameBuffer {
        &self.layer
    }

    pub fn prev_point(&self) -> Option<Point> {
        self.prev
    }

    /// End the current stroke; the next one starts at its own first point.
    pub fn lift(&mut self) {
        self.prev = None;
    }

    /// Extend the stroke to `tip`.
    ///
    /// The segment goes into the layer, and a brush-width copy goes onto
    /// `live` so the user sees it this very frame. With the eraser the two
    /// differ: the layer gets the eraser width, the live frame the brush width.
    pub fn extend(&mut self, live: &mut FrameBuffer, tip: Point, ink: Ink, layout: &Layout) -> Segment {
        let color = ink.rgb();

        // Fingertip marker on the live view.
        fill_circle(live, tip, layout.brush_radius, color);

        let from = *self.prev.get_or_insert(tip);
        let layer_thickness = layout.layer_thickness(ink);

        thick_line(live, from, tip, layout.feedback_thickness(), color);
        thick_line(&mut self.layer, from, tip, layer_thickness, color);

        self.prev = Some(tip);
        Segment { from, to: tip, layer_thickness }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Resolution;

    fn setup() -> (Layout, StrokeCompositor, FrameBuffer) {
        let layout = Resolution::P720.layout();
        let comp = StrokeCompositor::new(layout.width, layout.height);
        let live = FrameBuffer::filled(layout.width, layout.height, 0x0080_8080);
        (layout, comp, live)
    }

    #[test]
    fn layer_starts_empty() {
        let (layout, comp, _) = setup();
        assert_eq!(comp.layer().width, layout.width);
        assert_eq!(comp.layer().height, layout.height);
        assert!(comp.layer().pixels.iter().all(|&p| p == 0));
        assert_eq!(comp.prev_point(), None);
    }

    #[test]
    fn first_point_of_a_stroke_is_a_dot() {
        let (layout, mut comp, mut live) = setup();
        let seg = comp.extend(&mut live, Point::new(400, 300), Ink::Red, &layout);
        assert_eq!(seg.from, seg.to);
        assert_eq!(comp.layer().get(400, 300), Some(Ink::Red.rgb()));
        assert_eq!(comp.layer().get(20, 20), Some(0));
    }

    #[test]
    fn consecutive_frames_join_into_a_line() {
        let (layout, mut comp, mut live) = setup();
        comp.extend(&mut live, Point::new(300, 300), Ink::Blue, &layout);
        let seg = comp.extend(&mut live, Point::new(600, 300), Ink::Blue, &layout);
        assert_eq!(seg.from, Point::new(300, 300));
        for x in (300..=600).step_by(25) {
            assert_eq!(comp.layer().get(x, 300), Some(Ink::Blue.rgb()), "x={x}");
            assert_eq!(live.get(x, 300), Some(Ink::Blue.rgb()), "x={x}");
        }
        assert_eq!(comp.prev_point(), Some(Point::new(600, 300)));
    }

    #[test]
    fn lifting_starts_a_fresh_stroke() {
        let (layout, mut comp, mut live) = setup();
        comp.extend(&mut live, Point::new(200, 500), Ink::Green, &layout);
        comp.lift();
        let seg = comp.extend(&mut live, Point::new(900, 500), Ink::Green, &layout);
        assert_eq!(seg.from, Point::new(900, 500));
        // Nothing bridged the gap between the two strokes.
        assert_eq!(comp.layer().get(550, 500), Some(0));
    }

    #[test]
    fn eraser_paints_wide_black_on_the_layer_only() {
        let (layout, mut comp, mut live) = setup();
        comp.extend(&mut live, Point::new(400, 400), Ink::Red, &layout);
        comp.lift();

        let seg = comp.extend(&mut live, Point::new(430, 400), Ink::Eraser, &layout);
        assert_eq!(seg.layer_thickness, layout.eraser_radius);
        assert_eq!(comp.layer().get(400, 400), Some(0));
        // 35 px away: inside the eraser half-width (40), outside the brush's (10).
        assert_eq!(comp.layer().get(430, 365), Some(0));
        assert_eq!(live.get(430, 365), Some(0x0080_8080));
    }
}
