// What you SEE:
// • Live (mirrored) camera is always the base image.
// • Raise only your index finger: you draw with the selected color.
// • Raise index + middle: selection mode. Touch a swatch in the top band to switch
//   color; the last swatch is the eraser.
// • Ink stays put on top of the video until you erase it. ESC quits.

mod camera;
mod config;
mod draw;
mod error;
mod fingers;
mod gesture;
mod headers;
mod landmarks;
mod layout;
mod merge;
mod selector;
mod session;
mod stroke;
mod types;

#[macro_use]
extern crate tracing;

use camera::CameraCapture;
use config::Args;
use draw::{draw_text_5x7, Drawer};
use error::Error;
use headers::HeaderSet;
use landmarks::{LandmarkSource, MediaPipeProcess};
use session::Session;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args: Args = argh::from_env();
    let layout = args.layout();
    info!(resolution = %layout.resolution, hand = ?args.hand, "starting");

    /* --- Camera + window setup --- */
    let mut cam = CameraCapture::new(args.camera, layout.width as u32, layout.height as u32, !args.no_mirror)?;
    let (w, h) = cam.resolution();
    let mut drawer = Drawer::new("Air Canvas", w as usize, h as usize)?;

    /* --- Hand landmarks (helper process) --- */
    let mut tracker = MediaPipeProcess::spawn(&args.python, &args.detector, args.min_confidence)?;

    /* --- Per-run state: tool selection + drawing layer live in the session --- */
    let headers = HeaderSet::load_or_synthesize(&args.headers_dir(&layout), &layout);
    let fps_pos = layout.fps_pos;
    let mut session = Session::new(layout, args.hand, headers, args.overlay());

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("0 FPS");
    let mut last_mode = gesture::GestureMode::Idle;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) Grab a fresh (mirrored) live frame. A bad read skips this frame only. */
        let Some(mut frame) = skip_frame_on_error(cam.next_frame()) else {
            drawer.pump();
            continue;
        };

        /* 2) Find the hand. Detector hiccups count as "no hand". */
        let hand = match tracker.detect(&frame) {
            Ok(hand) => hand,
            Err(e) => {
                warn!("{e}");
                None
            }
        };

        /* 3) Classify, select or draw, merge ink, put the header on top. */
        match session.process_frame(&mut frame, hand.as_ref()) {
            Ok(mode) => {
                if mode != last_mode {
                    debug!(mode = mode.label(), ink = ?session.selection().ink, "gesture changed");
                    last_mode = mode;
                }
            }
            Err(e) => {
                warn!("{e}; skipping frame");
                drawer.pump();
                continue;
            }
        }

        /* 4) HUD text, then present. A failed window update drops this frame only. */
        draw_text_5x7(&mut frame, fps_pos.x, fps_pos.y, &hud_fps_text, 0x0000_0000, 3);
        if skip_frame_on_error(drawer.present(&frame)).is_none() {
            continue;
        }

        /* 5) FPS counter (logs + HUD once per second) */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            info!("FPS: {:.1}", fps);
            hud_fps_text = format!("{} FPS", fps as u32);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    info!("window closed, exiting");
    Ok(())
}

/// Per-frame failures are logged and cost only the current frame.
fn skip_frame_on_error<T>(result: Result<T, Error>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("{e}; skipping frame");
            None
        }
    }
}
