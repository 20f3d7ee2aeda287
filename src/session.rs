// Per-frame pipeline and the state it carries between frames.
//
// classify -> resolve mode -> select or draw -> merge -> header.
// Only the tool selection and the stroke compositor (layer + previous point)
// survive from one frame to the next.

use crate::error::Error;
use crate::fingers::{self, DominantHand};
use crate::gesture::GestureMode;
use crate::headers::HeaderSet;
use crate::landmarks::{ids, LandmarkOverlay};
use crate::layout::Layout;
use crate::merge::{merge_ink, overlay_header};
use crate::selector::{draw_select_marker, ToolSelection};
use crate::stroke::StrokeCompositor;
use crate::types::{FrameBuffer, HandLandmarks, Point};
use tracing::{debug, trace};

pub struct Session {
    layout: Layout,
    dominant: DominantHand,
    overlay: LandmarkOverlay,
    headers: HeaderSet,
    selection: ToolSelection,
    compositor: StrokeCompositor,
}

impl Session {
    pub fn new(layout: Layout, dominant: DominantHand, headers: HeaderSet, overlay: LandmarkOverlay) -> Self {
        let selection = ToolSelection::initial(&layout);
        let compositor = StrokeCompositor::new(layout.width, layout.height);
        Self { layout, dominant, overlay, headers, selection, compositor }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn selection(&self) -> ToolSelection {
        self.selection
    }

    pub fn drawing_layer(&self) -> &FrameBuffer {
        self.compositor.layer()
    }

    /// Run one frame. `frame` comes in as the live camera image and leaves as
    /// the composed image to display. `hand` is `None` when nothing was detected.
    pub fn process_frame(&mut self, frame: &mut FrameBuffer, hand: Option<&HandLandmarks>) -> Result<GestureMode, Error> {
        let layer = self.compositor.layer();
        if frame.width != layer.width || frame.height != layer.height {
            return Err(Error::SizeMismatch(format!(
                "frame {}x{} vs drawing layer {}x{}",
                frame.width, frame.height, layer.width, layer.height
            )));
        }

        if let Some(hand) = hand {
            self.overlay.draw(frame, hand);
        }

        let states = hand.and_then(|h| fingers::classify(h, self.dominant));
        let mode = GestureMode::resolve(states.as_ref());
        if let Some(states) = &states {
            trace!(fingers = ?states.bits(), mode = mode.label(), "classified");
        }

        // The tips exist whenever the classifier produced states.
        let tips = hand.and_then(|h| Some((h.point(ids::INDEX_FINGER_TIP)?, h.point(ids::MIDDLE_FINGER_TIP)?)));

        match (mode, tips) {
            (GestureMode::Draw, Some((index_tip, _))) => {
                let seg = self.compositor.extend(frame, index_tip, self.selection.ink, &self.layout);
                trace!(?seg, "stroke");
            }
            (GestureMode::Select, Some((index_tip, middle_tip))) => {
                self.compositor.lift();
                self.select(index_tip);
                draw_select_marker(frame, index_tip, middle_tip, self.selection.color());
            }
            _ => self.compositor.lift(),
        }

        merge_ink(frame, self.compositor.layer())?;
        if let Some(header) = self.headers.get(self.selection.header_index) {
            overlay_header(frame, header)?;
        }

        Ok(mode)
    }

    fn select(&mut self, tip: Point) {
        if self.selection.select(tip, &self.layout) {
            debug!(ink = ?self.selection.ink, header = self.selection.header_index, "tool selected");
        }
    }
}
