// Command-line configuration.

use crate::fingers::DominantHand;
use crate::headers;
use crate::landmarks::{self, LandmarkOverlay};
use crate::layout::{Layout, Resolution};
use std::path::PathBuf;

#[derive(argh::FromArgs, Debug)]
/// draw on your webcam feed with hand gestures: index finger draws, index + middle pick a color
pub struct Args {
    #[argh(option, default = "0")]
    /// camera index
    pub camera: u32,

    #[argh(option, default = "Resolution::P720")]
    /// capture resolution preset: 720 or 1080
    pub resolution: Resolution,

    #[argh(option, default = "DominantHand::Right")]
    /// drawing hand, flips the thumb test: right or left
    pub hand: DominantHand,

    #[argh(option)]
    /// directory holding the header banners (default: assets/headers/<720|1080>)
    pub headers: Option<PathBuf>,

    #[argh(option, default = "landmarks::default_helper_path()")]
    /// hand landmark helper script
    pub detector: PathBuf,

    #[argh(option, default = "String::from(\"python3\")")]
    /// interpreter used to run the helper script
    pub python: String,

    #[argh(option, default = "0.85")]
    /// minimum hand detection confidence (0..1)
    pub min_confidence: f32,

    #[argh(switch)]
    /// don't draw the detected hand landmarks
    pub hide_landmarks: bool,

    #[argh(option)]
    /// landmark index to mark with a larger dot (repeatable)
    pub highlight: Vec<usize>,

    #[argh(switch)]
    /// show the camera image unmirrored
    pub no_mirror: bool,
}

impl Args {
    pub fn layout(&self) -> Layout {
        self.resolution.layout()
    }

    pub fn headers_dir(&self, layout: &Layout) -> PathBuf {
        self.headers
            .clone()
            .unwrap_or_else(|| headers::default_dir(&PathBuf::from("assets/headers"), layout))
    }

    pub fn overlay(&self) -> LandmarkOverlay {
        LandmarkOverlay {
            show_points: !self.hide_landmarks,
            highlighted: self.highlight.iter().copied().filter(|&i| i <= 20).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    fn parse(args: &[&str]) -> Result<Args, argh::EarlyExit> {
        Args::from_args(&["air-canvas"], args)
    }

    #[test]
    fn defaults_match_the_720p_right_hand_setup() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.camera, 0);
        assert_eq!(args.resolution, Resolution::P720);
        assert_eq!(args.hand, DominantHand::Right);
        assert_eq!(args.min_confidence, 0.85);
        assert_eq!(args.headers_dir(&args.layout()), PathBuf::from("assets/headers/720"));
        assert!(!args.no_mirror);
        assert!(args.overlay().show_points);
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse(&[
            "--resolution", "1080", "--hand", "left", "--headers", "/tmp/h",
            "--highlight", "8", "--highlight", "42",
        ])
        .unwrap();
        assert_eq!(args.layout().brush_radius, 25);
        assert_eq!(args.hand, DominantHand::Left);
        assert_eq!(args.headers_dir(&args.layout()), PathBuf::from("/tmp/h"));
        let overlay = args.overlay();
        assert!(overlay.show_points);
        assert_eq!(overlay.highlighted, vec![8]);
    }

    #[test]
    fn landmarks_can_be_hidden() {
        let args = parse(&["--hide-landmarks"]).unwrap();
        assert!(!args.overlay().show_points);
    }

    #[test]
    fn bad_resolution_is_rejected() {
        assert!(parse(&["--resolution", "480"]).is_err());
    }
}
