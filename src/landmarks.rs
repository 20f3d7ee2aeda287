//! Hand landmark sources.
//!
//! The hand model itself runs outside this crate. `MediaPipeProcess` talks to
//! a helper script over stdin/stdout: each frame goes out as a small header
//! plus raw RGB bytes, and one JSON line comes back per frame.
//!
//! Only a single hand is supported. A result holding more than one hand
//! above the confidence threshold is reported as an error for that frame
//! instead of picking one of them.

use crate::draw::fill_circle;
use crate::error::Error;
use crate::types::{FrameBuffer, HandLandmarks, Landmark, Point};
use serde::Deserialize;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout, Command, Stdio};
use tracing::{info, trace};

/// Hand landmark indices (MediaPipe 21-point hand model).
#[allow(dead_code)]
pub mod ids {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_FINGER_MCP: usize = 5;
    pub const INDEX_FINGER_PIP: usize = 6;
    pub const INDEX_FINGER_DIP: usize = 7;
    pub const INDEX_FINGER_TIP: usize = 8;
    pub const MIDDLE_FINGER_MCP: usize = 9;
    pub const MIDDLE_FINGER_PIP: usize = 10;
    pub const MIDDLE_FINGER_DIP: usize = 11;
    pub const MIDDLE_FINGER_TIP: usize = 12;
    pub const RING_FINGER_MCP: usize = 13;
    pub const RING_FINGER_PIP: usize = 14;
    pub const RING_FINGER_DIP: usize = 15;
    pub const RING_FINGER_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;
}

/// Anything that can find (at most) one hand in a frame.
pub trait LandmarkSource {
    /// `Ok(None)` when no hand is visible.
    fn detect(&mut self, frame: &FrameBuffer) -> Result<Option<HandLandmarks>, Error>;
}

/* ---------- JSON coming back from the helper ---------- */

#[derive(Deserialize, Debug)]
struct LandmarkJson {
    x: f32,
    y: f32,
    #[allow(dead_code)]
    #[serde(default)]
    z: f32,
}

#[derive(Deserialize, Debug)]
struct HandJson {
    #[serde(default)]
    handedness: String,
    score: f32,
    landmarks: Vec<LandmarkJson>,
}

#[derive(Deserialize, Debug)]
struct DetectionResult {
    #[serde(default)]
    hands: Vec<HandJson>,
    #[serde(default)]
    error: Option<String>,
}

/// How many frame widths/heights a landmark may lie outside the frame.
const OFF_FRAME_LIMIT: i32 = 4;

/// Turn one JSON line into the single tracked hand, scaled to frame pixels.
fn parse_detection(
    line: &str,
    width: usize,
    height: usize,
    min_confidence: f32,
) -> Result<Option<HandLandmarks>, Error> {
    let result: DetectionResult = serde_json::from_str(line.trim())
        .map_err(|e| Error::Landmarks(format!("bad detector reply ({e}): {}", line.trim())))?;

    if let Some(error) = result.error {
        return Err(Error::Landmarks(format!("detector: {error}")));
    }

    let mut confident = result.hands.into_iter().filter(|h| h.score >= min_confidence);
    let Some(hand) = confident.next() else {
        return Ok(None);
    };
    let extra = confident.count();
    if extra > 0 {
        return Err(Error::Landmarks(format!(
            "{} hands in view, only one is supported",
            extra + 1
        )));
    }

    trace!(handedness = %hand.handedness, score = hand.score, "hand detected");

    // Same truncation the model's pixel conversion uses: int(x * width).
    // Points may sit a little off-frame; wild values are pinned to a few frames out.
    let to_px = |v: f32, extent: usize| {
        let bound = (extent as i32).saturating_mul(OFF_FRAME_LIMIT);
        ((v * extent as f32) as i32).clamp(-bound, bound)
    };
    let points = hand.landmarks.iter().enumerate().map(|(index, lm)| Landmark {
        index,
        x: to_px(lm.x, width),
        y: to_px(lm.y, height),
    });
    Ok(Some(HandLandmarks::new(points)))
}

/* ---------- helper-process source ---------- */

/// MediaPipe hand landmarker running in a helper process.
pub struct MediaPipeProcess {
    process: Child,
    stdout_reader: BufReader<ChildStdout>,
    min_confidence: f32,
}

impl MediaPipeProcess {
    /// Start `interpreter script` and wait for its "READY" line.
    pub fn spawn(interpreter: &str, script: &Path, min_confidence: f32) -> Result<Self, Error> {
        if !script.exists() {
            return Err(Error::LandmarkInit(format!(
                "landmark helper not found at {}",
                script.display()
            )));
        }

        info!(script = %script.display(), "starting hand landmark helper");

        let mut process = Command::new(interpreter)
            .arg(script)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| Error::LandmarkInit(format!("spawn {interpreter}: {e}")))?;

        let stdout = process
            .stdout
            .take()
            .ok_or_else(|| Error::LandmarkInit("helper has no stdout".into()))?;
        let mut stdout_reader = BufReader::new(stdout);

        let mut ready = String::new();
        stdout_reader
            .read_line(&mut ready)
            .map_err(|e| Error::LandmarkInit(format!("waiting for READY: {e}")))?;
        if ready.trim() != "READY" {
            let _ = process.kill();
            return Err(Error::LandmarkInit(format!(
                "helper did not signal READY, got: {}",
                ready.trim()
            )));
        }

        info!("hand landmark helper ready");

        Ok(Self {
            process,
            stdout_reader,
            min_confidence: min_confidence.clamp(0.0, 1.0),
        })
    }
}

impl LandmarkSource for MediaPipeProcess {
    fn detect(&mut self, frame: &FrameBuffer) -> Result<Option<HandLandmarks>, Error> {
        if frame.pixels.is_empty() {
            return Ok(None);
        }

        let io = |e: std::io::Error| Error::Landmarks(format!("helper pipe: {e}"));
        let stdin = self
            .process
            .stdin
            .as_mut()
            .ok_or_else(|| Error::Landmarks("helper stdin closed".into()))?;

        // Header (width, height, channels) then the RGB bytes.
        stdin.write_all(&(frame.width as u32).to_le_bytes()).map_err(io)?;
        stdin.write_all(&(frame.height as u32).to_le_bytes()).map_err(io)?;
        stdin.write_all(&3u32.to_le_bytes()).map_err(io)?;
        stdin.write_all(&frame.to_rgb_bytes()).map_err(io)?;
        stdin.flush().map_err(io)?;

        let mut reply = String::new();
        let n = self.stdout_reader.read_line(&mut reply).map_err(io)?;
        if n == 0 {
            return Err(Error::Landmarks("helper exited".into()));
        }

        parse_detection(&reply, frame.width, frame.height, self.min_confidence)
    }
}

impl Drop for MediaPipeProcess {
    fn drop(&mut self) {
        // Don't leave the helper running after the window closes.
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}

/// Default location of the helper script, relative to the working directory.
pub fn default_helper_path() -> PathBuf {
    PathBuf::from("scripts/hand_landmarks.py")
}

/* ---------- optional skeleton overlay ---------- */

/// Which landmarks to paint on the live frame.
#[derive(Clone, Debug, Default)]
pub struct LandmarkOverlay {
    pub show_points: bool,
    pub highlighted: Vec<usize>,
}

impl LandmarkOverlay {
    const POINT_COLOR: u32 = 0x00FF_0000;
    const HIGHLIGHT_COLOR: u32 = 0x00C0_392B;

    pub fn draw(&self, fb: &mut FrameBuffer, hand: &HandLandmarks) {
        for lm in hand.iter() {
            let p = Point::new(lm.x, lm.y);
            if self.show_points {
                fill_circle(fb, p, 3, Self::POINT_COLOR);
            }
            if self.highlighted.contains(&lm.index) {
                fill_circle(fb, p, 10, Self::HIGHLIGHT_COLOR);
            }
        }
    }
}
