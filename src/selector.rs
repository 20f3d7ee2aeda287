// Tool/color selection from the header hot-zones.

use crate::draw::{draw_text_5x7, fill_rect};
use crate::layout::{HotZone, Ink, Layout};
use crate::types::{FrameBuffer, Point};

/// The active tool: its ink and the header banner that shows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolSelection {
    pub ink: Ink,
    pub header_index: usize,
}

impl ToolSelection {
    /// Startup tool: whatever the layout lists first.
    pub fn initial(layout: &Layout) -> Self {
        match layout.hotzones.first() {
            Some(zone) => Self::from_zone(zone),
            None => Self { ink: Ink::Red, header_index: 0 },
        }
    }

    fn from_zone(zone: &HotZone) -> Self {
        Self { ink: zone.ink, header_index: zone.header_index }
    }

    pub fn color(&self) -> u32 {
        self.ink.rgb()
    }

    /// Try to pick a tool with the index fingertip.
    ///
    /// Only points above the bottom of the header band count (including ones
    /// past the top edge). The first zone whose column holds the point wins;
    /// a miss leaves the selection alone. Returns true on a change.
    pub fn select(&mut self, tip: Point, layout: &Layout) -> bool {
        if tip.y >= layout.ui_band_height {
            return false;
        }
        let Some(zone) = layout.hotzones.iter().find(|z| z.rect.spans_x(tip.x)) else {
            return false;
        };
        let next = Self::from_zone(zone);
        let changed = next != *self;
        *self = next;
        changed
    }
}

/// Feedback box between the index and middle tips while selecting.
pub fn draw_select_marker(fb: &mut FrameBuffer, index_tip: Point, middle_tip: Point, color: u32) {
    let top_left = Point::new(index_tip.x, index_tip.y - 15);
    let bottom_right = Point::new(middle_tip.x, middle_tip.y + 25);
    fill_rect(fb, top_left, bottom_right, color);
    draw_text_5x7(fb, top_left.x, top_left.y - 18, "SELECT", 0x0024_FF0C, 2);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Resolution;

    #[test]
    fn starts_on_the_first_tool() {
        let layout = Resolution::P720.layout();
        let sel = ToolSelection::initial(&layout);
        assert_eq!(sel, ToolSelection { ink: Ink::Red, header_index: 0 });
    }

    #[test]
    fn hit_switches_ink_and_header_together() {
        let layout = Resolution::P720.layout();
        let mut sel = ToolSelection::initial(&layout);
        assert!(sel.select(Point::new(700, 50), &layout));
        assert_eq!(sel, ToolSelection { ink: Ink::Green, header_index: 1 });
        assert!(sel.select(Point::new(1100, 129), &layout));
        assert_eq!(sel.ink, Ink::Eraser);
        assert_eq!(sel.header_index, 3);
    }

    #[test]
    fn misses_never_change_the_selection() {
        let layout = Resolution::P720.layout();
        let mut sel = ToolSelection::initial(&layout);
        sel.select(Point::new(900, 10), &layout);
        let before = sel;
        let misses = [
            Point::new(100, 50),  // left of every zone
            Point::new(550, 50),  // gap between red and green
            Point::new(500, 50),  // open edge
            Point::new(700, 130), // right column, below the band
            Point::new(700, 400),
            Point::new(-5, -5),
        ];
        for p in misses {
            assert!(!sel.select(p, &layout), "{p:?}");
            assert_eq!(sel, before, "{p:?}");
        }
    }

    #[test]
    fn fingertip_above_the_frame_edge_still_selects() {
        let layout = Resolution::P720.layout();
        let mut sel = ToolSelection::initial(&layout);
        assert!(sel.select(Point::new(700, -4), &layout));
        assert_eq!(sel.ink, Ink::Green);
    }

    #[test]
    fn reselecting_the_same_tool_reports_no_change() {
        let layout = Resolution::P1080.layout();
        let mut sel = ToolSelection::initial(&layout);
        assert!(!sel.select(Point::new(700, 60), &layout));
        assert_eq!(sel.ink, Ink::Red);
    }

    #[test]
    fn first_matching_zone_wins_on_overlap() {
        let mut layout = Resolution::P720.layout();
        // Make the blue zone swallow the green one; green is listed first.
        layout.hotzones[2].rect.left = 550;
        let mut sel = ToolSelection::initial(&layout);
        sel.select(Point::new(700, 50), &layout);
        assert_eq!(sel.ink, Ink::Green);
    }

    #[test]
    fn zones_follow_the_active_preset() {
        let p = Point::new(1100, 50);
        let mut sel720 = ToolSelection::initial(&Resolution::P720.layout());
        let mut sel1080 = ToolSelection::initial(&Resolution::P1080.layout());
        sel720.select(p, &Resolution::P720.layout());
        sel1080.select(p, &Resolution::P1080.layout());
        assert_eq!(sel720.ink, Ink::Eraser);
        assert_eq!(sel1080.ink, Ink::Green);
    }

    #[test]
    fn marker_fills_between_the_tips() {
        let mut fb = FrameBuffer::new(200, 200);
        draw_select_marker(&mut fb, Point::new(50, 100), Point::new(80, 90), 0x11);
        assert_eq!(fb.get(60, 100), Some(0x11));
        assert_eq!(fb.get(60, 86), Some(0x11));
        assert_eq!(fb.get(60, 114), Some(0x11));
        assert_eq!(fb.get(90, 100), Some(0));
    }
}
