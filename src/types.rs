// Core types shared by the per-frame pipeline.

/// A packed 0x00RRGGBB pixel buffer, the format minifb displays directly.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// All-black buffer. This is also the "no ink anywhere" drawing layer.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Same-size solid fill, handy for tests and synthesized banners.
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Mirror the image left-to-right in place (selfie view).
    pub fn flip_horizontal(&mut self) {
        for row in self.pixels.chunks_exact_mut(self.width.max(1)) {
            row.reverse();
        }
    }

    /// Unpack to tightly packed RGB bytes (what the landmark helper reads).
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 3);
        for &px in &self.pixels {
            let [r, g, b] = unpack_rgb(px);
            out.extend_from_slice(&[r, g, b]);
        }
        out
    }
}

#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[inline]
pub fn unpack_rgb(px: u32) -> [u8; 3] {
    [((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8]
}

/// Integer pixel position on the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One tracked hand-skeleton point, already scaled to frame pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Landmark {
    pub index: usize, // 0..=20 in the 21-point hand model
    pub x: i32,
    pub y: i32,
}

/// The landmark set of the single tracked hand for one frame.
/// Index-unique; lives only for the frame it was detected in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandLandmarks {
    points: Vec<Landmark>,
}

impl HandLandmarks {
    /// Build from detector output. Later duplicates of an index are dropped,
    /// as are indices outside the 21-point model.
    pub fn new(points: impl IntoIterator<Item = Landmark>) -> Self {
        let mut out: Vec<Landmark> = Vec::with_capacity(21);
        for lm in points {
            if lm.index > 20 || out.iter().any(|p| p.index == lm.index) {
                continue;
            }
            out.push(lm);
        }
        Self { points: out }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.points.iter().find(|p| p.index == index)
    }

    pub fn point(&self, index: usize) -> Option<Point> {
        self.get(index).map(|lm| Point::new(lm.x, lm.y))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.points.iter()
    }
}
