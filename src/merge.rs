// Frame merge: ink over live video, then the header strip on top.
//
// Luma of the drawing layer is thresholded into an inverse mask (ink -> 0,
// empty -> 255). live AND mask punches holes where ink is, OR layer fills
// them with the ink colors. Ink always wins over whatever the camera sees.

use crate::error::Error;
use crate::types::FrameBuffer;

/// Layer pixels brighter than this count as ink.
pub const INK_THRESHOLD: u8 = 50;

/// 8-bit BT.601 luma of a 0x00RRGGBB pixel (fixed point, rounded).
#[inline]
pub fn luma(px: u32) -> u8 {
    let r = (px >> 16) & 0xFF;
    let g = (px >> 8) & 0xFF;
    let b = px & 0xFF;
    ((r * 4899 + g * 9617 + b * 1868 + 8192) >> 14) as u8
}

/// Whether the layer pixel hides the live video.
#[inline]
pub fn is_ink(px: u32) -> bool {
    luma(px) > INK_THRESHOLD
}

/// Inverse binary mask of one layer pixel, replicated over the three channels.
#[inline]
fn inverse_mask(px: u32) -> u32 {
    if is_ink(px) { 0 } else { 0x00FF_FFFF }
}

/// Merge the drawing layer into `live` in place.
pub fn merge_ink(live: &mut FrameBuffer, layer: &FrameBuffer) -> Result<(), Error> {
    if live.width != layer.width || live.height != layer.height {
        return Err(Error::SizeMismatch(format!(
            "merge: live {}x{} vs layer {}x{}",
            live.width, live.height, layer.width, layer.height
        )));
    }

    for (out, &ink) in live.pixels.iter_mut().zip(&layer.pixels) {
        *out = (*out & inverse_mask(ink)) | ink;
    }
    Ok(())
}

/// Replace the top rows of `frame` with the header banner.
pub fn overlay_header(frame: &mut FrameBuffer, header: &FrameBuffer) -> Result<(), Error> {
    if header.width != frame.width || header.height > frame.height {
        return Err(Error::SizeMismatch(format!(
            "header {}x{} does not fit frame {}x{}",
            header.width, header.height, frame.width, frame.height
        )));
    }
    let n = header.width * header.height;
    frame.pixels[..n].copy_from_slice(&header.pixels);
    Ok(())
}
