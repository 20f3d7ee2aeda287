// Finger up/down classifier.
// Each finger's tip is compared with a lower joint of the same finger;
// nothing is smoothed across frames.

use crate::landmarks::ids;
use crate::types::HandLandmarks;
use std::str::FromStr;

/// Which hand the user draws with. Only the thumb test depends on it.
///
/// The thumb is judged on the x axis alone, so the comparison flips between
/// left and right hands. Picking the wrong one reads the thumb inverted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DominantHand {
    #[default]
    Right,
    Left,
}

impl FromStr for DominantHand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "right" | "r" => Ok(DominantHand::Right),
            "left" | "l" => Ok(DominantHand::Left),
            other => Err(format!("unknown hand '{other}' (use left or right)")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finger {
    Thumb = 0,
    Index = 1,
    Middle = 2,
    Ring = 3,
    Pinky = 4,
}

/// Raised (true) / lowered (false) per finger, in thumb..pinky order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerStates([bool; 5]);

impl FingerStates {
    pub const fn from_flags(flags: [bool; 5]) -> Self {
        Self(flags)
    }

    #[inline]
    pub fn is_up(&self, finger: Finger) -> bool {
        self.0[finger as usize]
    }

    /// 0/1 vector, used in debug logs.
    pub fn bits(&self) -> [u8; 5] {
        self.0.map(u8::from)
    }
}

/// (tip, joint two below the tip) for the four long fingers.
const LONG_FINGERS: [(Finger, usize, usize); 4] = [
    (Finger::Index, ids::INDEX_FINGER_TIP, ids::INDEX_FINGER_PIP),
    (Finger::Middle, ids::MIDDLE_FINGER_TIP, ids::MIDDLE_FINGER_PIP),
    (Finger::Ring, ids::RING_FINGER_TIP, ids::RING_FINGER_PIP),
    (Finger::Pinky, ids::PINKY_TIP, ids::PINKY_PIP),
];

/// Classify which fingers are up.
///
/// Returns `None` when the hand has no landmarks (or lacks one the comparisons
/// need); callers treat that as "no gesture this frame".
pub fn classify(hand: &HandLandmarks, dominant: DominantHand) -> Option<FingerStates> {
    if hand.is_empty() {
        return None;
    }

    let mut flags = [false; 5];

    // Thumb: horizontal test against the joint right below the tip.
    let tip = hand.get(ids::THUMB_TIP)?;
    let joint = hand.get(ids::THUMB_IP)?;
    flags[Finger::Thumb as usize] = match dominant {
        DominantHand::Right => tip.x > joint.x,
        DominantHand::Left => tip.x < joint.x,
    };

    // Other fingers: tip above (smaller y) the joint two below it.
    for (finger, tip_id, joint_id) in LONG_FINGERS {
        let tip = hand.get(tip_id)?;
        let joint = hand.get(joint_id)?;
        flags[finger as usize] = tip.y < joint.y;
    }

    Some(FingerStates(flags))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::Landmark;

    /// A right hand, palm to camera, with the requested fingers raised.
    /// Fingers point up the screen; the thumb points right when raised.
    pub(crate) fn hand_with(up: [bool; 5], index_tip: (i32, i32), middle_tip: (i32, i32)) -> HandLandmarks {
        let mut pts = Vec::new();
        pts.push(Landmark { index: ids::WRIST, x: 640, y: 600 });

        // Thumb chain 1..=4
        pts.push(Landmark { index: ids::THUMB_CMC, x: 600, y: 560 });
        pts.push(Landmark { index: ids::THUMB_MCP, x: 610, y: 540 });
        pts.push(Landmark { index: ids::THUMB_IP, x: 620, y: 520 });
        let thumb_x = if up[0] { 660 } else { 580 };
        pts.push(Landmark { index: ids::THUMB_TIP, x: thumb_x, y: 510 });

        // Long fingers: mcp, pip, dip, tip
        let chains = [
            (ids::INDEX_FINGER_MCP, 1usize, index_tip),
            (ids::MIDDLE_FINGER_MCP, 2, middle_tip),
            (ids::RING_FINGER_MCP, 3, (700, 320)),
            (ids::PINKY_MCP, 4, (730, 340)),
        ];
        for (mcp, finger, (x, tip_y)) in chains {
            // Raised: the pip sits below the tip. Curled: the tip drops below the pip.
            let pip_y = if up[finger] { tip_y + 60 } else { tip_y - 30 };
            pts.push(Landmark { index: mcp, x, y: pip_y + 40 });
            pts.push(Landmark { index: mcp + 1, x, y: pip_y });
            pts.push(Landmark { index: mcp + 2, x, y: (pip_y + tip_y) / 2 });
            pts.push(Landmark { index: mcp + 3, x, y: tip_y });
        }
        HandLandmarks::new(pts)
    }

    #[test]
    fn empty_hand_has_no_states() {
        assert_eq!(classify(&HandLandmarks::default(), DominantHand::Right), None);
    }

    #[test]
    fn partial_hand_has_no_states() {
        let hand = HandLandmarks::new([Landmark { index: ids::INDEX_FINGER_TIP, x: 1, y: 1 }]);
        assert_eq!(classify(&hand, DominantHand::Right), None);
    }

    #[test]
    fn index_up_middle_down() {
        let hand = hand_with([false, true, false, false, false], (400, 300), (450, 400));
        let states = classify(&hand, DominantHand::Right).unwrap();
        assert_eq!(states.bits(), [0, 1, 0, 0, 0]);
    }

    #[test]
    fn all_fingers_up() {
        let hand = hand_with([true; 5], (400, 300), (450, 290));
        let states = classify(&hand, DominantHand::Right).unwrap();
        assert_eq!(states.bits(), [1, 1, 1, 1, 1]);
    }

    #[test]
    fn thumb_test_flips_with_dominant_hand() {
        let hand = hand_with([true, false, false, false, false], (400, 500), (450, 500));
        assert!(classify(&hand, DominantHand::Right).unwrap().is_up(Finger::Thumb));
        assert!(!classify(&hand, DominantHand::Left).unwrap().is_up(Finger::Thumb));
    }

    #[test]
    fn tip_level_with_joint_is_down() {
        let hand = HandLandmarks::new((0..21).map(|i| Landmark { index: i, x: 100, y: 100 }));
        let states = classify(&hand, DominantHand::Right).unwrap();
        assert_eq!(states.bits(), [0, 0, 0, 0, 0]);
    }

    #[test]
    fn hand_parses_from_cli_words() {
        assert_eq!("Left".parse::<DominantHand>(), Ok(DominantHand::Left));
        assert_eq!("r".parse::<DominantHand>(), Ok(DominantHand::Right));
        assert!("both".parse::<DominantHand>().is_err());
    }
}
