// Opens a camera and converts frames into a buffer suitable for the window.
// Frames come out mirrored (selfie view) and at exactly the requested size,
// so the drawing layer can keep one fixed size for the whole run.

use crate::error::Error;
use crate::types::{pack_rgb, FrameBuffer};

// Bring in nokhwa types for camera control.
use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    },
};

use image::{
    RgbImage,
    imageops::{self, FilterType},
};
use tracing::{info, warn};

// A small wrapper around nokhwa::Camera so our main loop stays clean.
pub struct CameraCapture {
    cam: Camera,
    width: u32,  // size handed to the rest of the app
    height: u32,
    mirror: bool,
}

impl CameraCapture {
    /// Open camera `index` near `width x height`.
    /// If the device picks another size, frames are resized to the requested one.
    pub fn new(index: u32, width: u32, height: u32, mirror: bool) -> Result<Self, Error> {
        let idx = CameraIndex::Index(index);

        let fmt = CameraFormat::new(
            Resolution::new(width, height),
            FrameFormat::MJPEG, // most webcams only reach 720p+ compressed
            30,                 // target FPS
        );

        let req = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(fmt));

        let mut cam = Camera::new(idx, req)
            .map_err(|e| Error::CameraInit(format!("Create camera: {e}")))?;

        cam.open_stream()
            .map_err(|e| Error::CameraInit(format!("Open stream: {e}")))?;

        let actual = cam.resolution();
        if (actual.width(), actual.height()) != (width, height) {
            warn!(
                "camera delivers {}x{}, frames will be resized to {width}x{height}",
                actual.width(),
                actual.height()
            );
        } else {
            info!("camera streaming at {width}x{height}");
        }

        Ok(Self { cam, width, height, mirror })
    }

    /// Grab one frame (blocks until the camera has one) as 0x00RRGGBB pixels.
    pub fn next_frame(&mut self) -> Result<FrameBuffer, Error> {
        let frame = self
            .cam
            .frame()
            .map_err(|e| Error::CameraFrame(format!("Fetch frame: {e}")))?;

        let decoded = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| Error::CameraFrame(format!("Decode RGB: {e}")))?;

        // Rebuild as our own `image` buffer; nokhwa may link a different version.
        let (w, h) = decoded.dimensions();
        let mut rgb_img = RgbImage::from_raw(w, h, decoded.into_raw())
            .ok_or_else(|| Error::CameraFrame(format!("short frame buffer for {w}x{h}")))?;

        if (w, h) != (self.width, self.height) {
            rgb_img = imageops::resize(&rgb_img, self.width, self.height, FilterType::Triangle);
        }

        let pixels = rgb_img
            .pixels()
            .map(|p| pack_rgb(p[0], p[1], p[2]))
            .collect();

        let mut out = FrameBuffer {
            width: self.width as usize,
            height: self.height as usize,
            pixels,
        };
        if self.mirror {
            out.flip_horizontal();
        }
        Ok(out)
    }

    /// The size every frame from `next_frame` has.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
