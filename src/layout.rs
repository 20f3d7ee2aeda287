// Resolution presets: frame size, brush sizes and the header hot-zones.
// Everything that differs between 720p and 1080p lives in one `Layout`,
// so the selector and the stroke compositor read the same numbers.

use crate::types::{pack_rgb, Point};
use std::fmt;
use std::str::FromStr;

/// The drawing tools offered in the header, in header-image order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ink {
    Red,
    Green,
    Blue,
    Eraser,
}

impl Ink {
    /// 0x00RRGGBB as drawn into the layer.
    pub const fn rgb(self) -> u32 {
        match self {
            Ink::Red => 0x00E7_4C3C,
            Ink::Green => 0x002E_CC71,
            Ink::Blue => 0x0034_98DB,
            // Same as the empty drawing layer: painting it removes ink.
            Ink::Eraser => 0x0000_0000,
        }
    }

    pub const fn is_eraser(self) -> bool {
        matches!(self, Ink::Eraser)
    }
}

/// Axis-aligned screen rectangle. Hot-zones only match on x (open edges);
/// the header band check decides y.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    #[inline]
    pub fn spans_x(&self, x: i32) -> bool {
        x > self.left && x < self.right
    }
}

/// One selectable tool: where it sits in the header and which banner shows it active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HotZone {
    pub rect: Rect,
    pub ink: Ink,
    pub header_index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    P720,
    P1080,
}

impl Resolution {
    pub const fn size(self) -> (usize, usize) {
        match self {
            Resolution::P720 => (1280, 720),
            Resolution::P1080 => (1920, 1080),
        }
    }

    pub fn layout(self) -> Layout {
        Layout::for_resolution(self)
    }

    /// Subdirectory name under the headers root.
    pub const fn dir_name(self) -> &'static str {
        match self {
            Resolution::P720 => "720",
            Resolution::P1080 => "1080",
        }
    }
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "720" | "720p" | "1280x720" => Ok(Resolution::P720),
            "1080" | "1080p" | "1920x1080" => Ok(Resolution::P1080),
            other => Err(format!("unknown resolution '{other}' (use 720 or 1080)")),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.size();
        write!(f, "{w}x{h}")
    }
}

/// Height of the header strip in both presets.
pub const UI_BAND_HEIGHT: i32 = 130;

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub resolution: Resolution,
    pub width: usize,
    pub height: usize,
    /// Ordered; the first zone containing the fingertip wins.
    pub hotzones: Vec<HotZone>,
    pub brush_radius: i32,
    pub eraser_radius: i32,
    pub ui_band_height: i32,
    pub fps_pos: Point,
}

impl Layout {
    pub fn for_resolution(resolution: Resolution) -> Self {
        let (width, height) = resolution.size();
        let band = UI_BAND_HEIGHT;
        let zone = |left, right, ink, header_index| HotZone {
            rect: Rect::new(left, 0, right, band),
            ink,
            header_index,
        };

        match resolution {
            Resolution::P720 => Self {
                resolution,
                width,
                height,
                hotzones: vec![
                    zone(350, 500, Ink::Red, 0),
                    zone(600, 750, Ink::Green, 1),
                    zone(800, 950, Ink::Blue, 2),
                    zone(1050, 1200, Ink::Eraser, 3),
                ],
                brush_radius: 20,
                eraser_radius: 80,
                ui_band_height: band,
                fps_pos: Point::new(20, 690),
            },
            Resolution::P1080 => Self {
                resolution,
                width,
                height,
                hotzones: vec![
                    zone(620, 850, Ink::Red, 0),
                    zone(990, 1200, Ink::Green, 1),
                    zone(1300, 1500, Ink::Blue, 2),
                    zone(1620, 1810, Ink::Eraser, 3),
                ],
                brush_radius: 25,
                eraser_radius: 100,
                ui_band_height: band,
                fps_pos: Point::new(20, 1030),
            },
        }
    }

    /// Number of distinct header banners the layout refers to.
    pub fn header_count(&self) -> usize {
        self.hotzones.iter().map(|z| z.header_index + 1).max().unwrap_or(0)
    }

    /// Line thickness used on the drawing layer for this ink.
    pub fn layer_thickness(&self, ink: Ink) -> i32 {
        if ink.is_eraser() { self.eraser_radius } else { self.brush_radius }
    }

    /// Line thickness used for the immediate feedback stroke on the live frame.
    pub fn feedback_thickness(&self) -> i32 {
        self.brush_radius
    }
}

/// Neutral backdrop of a synthesized header banner.
pub const HEADER_BACKDROP: u32 = 0x0020_2020;
/// Outline color marking the active tool in a synthesized banner.
pub const HEADER_OUTLINE: u32 = 0x00FF_FFFF;

/// Swatch color for a hot-zone in a synthesized banner; the eraser gets a dark grey.
pub fn swatch_color(ink: Ink) -> u32 {
    if ink.is_eraser() { pack_rgb(60, 60, 60) } else { ink.rgb() }
}
