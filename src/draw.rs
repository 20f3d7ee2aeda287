// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the composed camera + ink image.
// 2) Filled discs, thick round-capped lines and rectangles for strokes and UI.
// 3) A tiny 5x7 bitmap font to render HUD text on top of the video.

use crate::error::Error;
use crate::types::{FrameBuffer, Point};
use minifb::{Key, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the camera feed.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Keep the window responsive on frames we had nothing to show for.
    pub fn pump(&mut self) {
        self.window.update();
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }
}

/* ---------- Software drawing: pixels, discs, lines, rects ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Solid disc of `radius` pixels around `center`.
pub fn fill_circle(fb: &mut FrameBuffer, center: Point, radius: i32, color: u32) {
    if radius < 0 {
        return;
    }
    let r2 = (radius as i64) * (radius as i64);
    for y in (center.y - radius)..=(center.y + radius) {
        for x in (center.x - radius)..=(center.x + radius) {
            let dx = (x - center.x) as i64;
            let dy = (y - center.y) as i64;
            if dx * dx + dy * dy <= r2 {
                put_pixel(fb, x, y, color);
            }
        }
    }
}

/// Line of the given `thickness` with round caps between `a` and `b`.
/// A zero-length segment paints a dot of the same thickness.
pub fn thick_line(fb: &mut FrameBuffer, a: Point, b: Point, thickness: i32, color: u32) {
    let thickness = thickness.max(1);
    let half = thickness as f32 / 2.0;
    let reach = (half.ceil() as i32) + 1;

    // Only walk the segment's bounding box (grown by the half width), clipped to the frame.
    let x0 = (a.x.min(b.x) - reach).max(0);
    let y0 = (a.y.min(b.y) - reach).max(0);
    let x1 = (a.x.max(b.x) + reach).min(fb.width as i32 - 1);
    let y1 = (a.y.max(b.y) + reach).min(fb.height as i32 - 1);
    if x0 > x1 || y0 > y1 {
        return;
    }

    let (ax, ay) = (a.x as f32, a.y as f32);
    let (dx, dy) = ((b.x - a.x) as f32, (b.y - a.y) as f32);
    let len2 = dx * dx + dy * dy;
    let half2 = half * half;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let (px, py) = (x as f32 - ax, y as f32 - ay);
            // Project onto the segment, clamp to its ends, measure the gap.
            let t = if len2 > 0.0 { ((px * dx + py * dy) / len2).clamp(0.0, 1.0) } else { 0.0 };
            let (ex, ey) = (px - t * dx, py - t * dy);
            if ex * ex + ey * ey <= half2 {
                fb.pixels[y as usize * fb.width + x as usize] = color;
            }
        }
    }
}

/// Filled rectangle spanning two opposite corners (any order), inclusive.
pub fn fill_rect(fb: &mut FrameBuffer, p1: Point, p2: Point, color: u32) {
    let (x0, x1) = (p1.x.min(p2.x).max(0), p1.x.max(p2.x).min(fb.width as i32 - 1));
    let (y0, y1) = (p1.y.min(p2.y).max(0), p1.y.max(p2.y).min(fb.height as i32 - 1));
    for y in y0..=y1 {
        for x in x0..=x1 {
            fb.pixels[y as usize * fb.width + x as usize] = color;
        }
    }
}

/// Rectangle outline `width` pixels thick, drawn inside the corners.
pub fn stroke_rect(fb: &mut FrameBuffer, p1: Point, p2: Point, width: i32, color: u32) {
    let (l, r) = (p1.x.min(p2.x), p1.x.max(p2.x));
    let (t, b) = (p1.y.min(p2.y), p1.y.max(p2.y));
    let w = width.max(1) - 1;
    fill_rect(fb, Point::new(l, t), Point::new(r, t + w), color);
    fill_rect(fb, Point::new(l, b - w), Point::new(r, b), color);
    fill_rect(fb, Point::new(l, t), Point::new(l + w, b), color);
    fill_rect(fb, Point::new(r - w, t), Point::new(r, b), color);
}

/* ---------- 5x7 bitmap font (ASCII subset for "30 FPS" and "SELECT") ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Uppercase letters we need: C E F L P S T
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),

        // Word gap
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y), each font pixel `scale`x`scale` screen pixels.
/// A 1-font-pixel black shadow is drawn first for contrast.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32, scale: i32) {
    let Some(rows) = glyph5x7(ch) else { return };
    for (dx, dy, c) in [(scale, scale, 0x0000_0000), (0, 0, color)] {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    let px = x + rx * scale + dx;
                    let py = y + ry as i32 * scale + dy;
                    fill_rect(fb, Point::new(px, py), Point::new(px + scale - 1, py + scale - 1), c);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs scaled by `scale`.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32, scale: i32) {
    let scale = scale.max(1);
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color, scale);
        x += 6 * scale; // 5 pixels glyph width + 1 pixel spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_line_is_a_round_dot() {
        let mut fb = FrameBuffer::new(50, 50);
        let p = Point::new(25, 25);
        thick_line(&mut fb, p, p, 10, 0xFF);
        assert_eq!(fb.get(25, 25), Some(0xFF));
        assert_eq!(fb.get(29, 25), Some(0xFF));
        assert_eq!(fb.get(25, 21), Some(0xFF));
        // corner of the bounding box stays outside the round cap
        assert_eq!(fb.get(29, 29), Some(0));
        assert_eq!(fb.get(31, 25), Some(0));
    }

    #[test]
    fn thick_line_covers_its_width_along_the_segment() {
        let mut fb = FrameBuffer::new(100, 40);
        thick_line(&mut fb, Point::new(10, 20), Point::new(90, 20), 6, 0xAB);
        for x in 10..=90 {
            assert_eq!(fb.get(x, 18), Some(0xAB));
            assert_eq!(fb.get(x, 22), Some(0xAB));
            assert_eq!(fb.get(x, 26), Some(0));
        }
    }

    #[test]
    fn drawing_off_screen_is_clipped() {
        let mut fb = FrameBuffer::new(10, 10);
        thick_line(&mut fb, Point::new(-50, -50), Point::new(-20, -20), 8, 1);
        fill_circle(&mut fb, Point::new(-100, 5), 3, 1);
        fill_rect(&mut fb, Point::new(20, 20), Point::new(30, 30), 1);
        assert!(fb.pixels.iter().all(|&p| p == 0));

        fill_circle(&mut fb, Point::new(0, 0), 2, 7);
        assert_eq!(fb.get(0, 0), Some(7));
        assert_eq!(fb.get(2, 0), Some(7));
    }

    #[test]
    fn rect_corners_in_any_order() {
        let mut fb = FrameBuffer::new(10, 10);
        fill_rect(&mut fb, Point::new(6, 7), Point::new(2, 3), 9);
        assert_eq!(fb.get(2, 3), Some(9));
        assert_eq!(fb.get(6, 7), Some(9));
        assert_eq!(fb.get(7, 7), Some(0));
    }

    #[test]
    fn outline_leaves_the_middle_untouched() {
        let mut fb = FrameBuffer::new(20, 20);
        stroke_rect(&mut fb, Point::new(2, 2), Point::new(17, 17), 2, 5);
        assert_eq!(fb.get(2, 2), Some(5));
        assert_eq!(fb.get(3, 10), Some(5));
        assert_eq!(fb.get(10, 10), Some(0));
    }

    #[test]
    fn font_covers_every_hud_string() {
        for ch in "0123456789 FPS SELECT".chars() {
            assert!(glyph5x7(ch).is_some(), "missing glyph {ch:?}");
        }
        assert!(glyph5x7('W').is_none());
    }
}
