// Header banners: one image per tool, shown across the top band.
//
// Banners come from a directory (sorted by file name) and are resized to
// `frame width x band height` when needed. Without usable files a plain
// banner is drawn from the layout so the app still runs.

use crate::draw::{fill_rect, stroke_rect};
use crate::error::Error;
use crate::layout::{swatch_color, Layout, HEADER_BACKDROP, HEADER_OUTLINE};
use crate::types::{pack_rgb, FrameBuffer, Point};
use image::imageops::{self, FilterType};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct HeaderSet {
    banners: Vec<FrameBuffer>,
}

impl HeaderSet {
    /// Load banners from `dir`, falling back to synthesized ones on any problem.
    pub fn load_or_synthesize(dir: &Path, layout: &Layout) -> Self {
        match Self::load(dir, layout) {
            Ok(set) => {
                info!(dir = %dir.display(), count = set.len(), "loaded header banners");
                set
            }
            Err(e) => {
                warn!("{e}; using generated header banners");
                Self::synthesize(layout)
            }
        }
    }

    /// Read every image in `dir` in file-name order. Hidden files are skipped.
    pub fn load(dir: &Path, layout: &Layout) -> Result<Self, Error> {
        let entries = fs::read_dir(dir)
            .map_err(|e| Error::HeaderLoad(format!("read {}: {e}", dir.display())))?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| !n.starts_with('.'))
            })
            .collect();
        paths.sort();

        let (w, h) = (layout.width as u32, layout.ui_band_height as u32);
        let mut banners = Vec::with_capacity(paths.len());
        for path in &paths {
            let img = image::open(path)
                .map_err(|e| Error::HeaderLoad(format!("decode {}: {e}", path.display())))?
                .to_rgb8();
            let img = if img.dimensions() != (w, h) {
                warn!(
                    file = %path.display(),
                    "header is {}x{}, resizing to {w}x{h}",
                    img.width(),
                    img.height()
                );
                imageops::resize(&img, w, h, FilterType::Triangle)
            } else {
                img
            };

            let pixels = img.pixels().map(|p| pack_rgb(p[0], p[1], p[2])).collect();
            banners.push(FrameBuffer { width: w as usize, height: h as usize, pixels });
        }

        let needed = layout.header_count();
        if banners.len() < needed {
            return Err(Error::HeaderLoad(format!(
                "{} has {} banners, the layout needs {needed}",
                dir.display(),
                banners.len()
            )));
        }
        Ok(Self { banners })
    }

    /// One banner per header index: swatches at each hot-zone, the active one outlined.
    pub fn synthesize(layout: &Layout) -> Self {
        let band = layout.ui_band_height;
        let banners = (0..layout.header_count())
            .map(|active| {
                let mut fb = FrameBuffer::filled(layout.width, band as usize, HEADER_BACKDROP);
                for zone in &layout.hotzones {
                    let r = zone.rect;
                    let (tl, br) = (Point::new(r.left + 8, r.top + 16), Point::new(r.right - 8, r.bottom - 16));
                    fill_rect(&mut fb, tl, br, swatch_color(zone.ink));
                    if zone.header_index == active {
                        stroke_rect(&mut fb, Point::new(r.left, r.top + 8), Point::new(r.right, r.bottom - 8), 4, HEADER_OUTLINE);
                    }
                }
                fb
            })
            .collect();
        Self { banners }
    }

    pub fn len(&self) -> usize {
        self.banners.len()
    }

    pub fn get(&self, index: usize) -> Option<&FrameBuffer> {
        self.banners.get(index)
    }
}

/// `<root>/<720|1080>` for the given layout.
pub fn default_dir(root: &Path, layout: &Layout) -> PathBuf {
    root.join(layout.resolution.dir_name())
}
