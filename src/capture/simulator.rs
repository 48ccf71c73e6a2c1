//! Simulated hand landmark source
//!
//! Generates landmark frames from a canonical 21-point hand pose, shaped by
//! named hand-shape scenarios, for offline demos and tests where no real
//! tracker is available. Jitter is driven by a seeded RNG so runs are
//! reproducible.

use crate::capture::types::{HandLandmark, Landmark, LandmarkFrame, LANDMARK_COUNT};
use crate::controller::{ControlResult, LandmarkSource};
use crate::processing::classifier::GestureAction;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Canonical hand pose: all fingers straight, thumb angled off to the side.
/// Indices follow the standard hand model ordering.
const BASE_POSE: [(f64, f64); LANDMARK_COUNT] = [
    (0.5, 0.8),   // wrist
    (0.45, 0.75), // thumb CMC
    (0.4, 0.65),  // thumb MCP
    (0.35, 0.55), // thumb IP
    (0.3, 0.45),  // thumb tip
    (0.5, 0.65),  // index MCP
    (0.5, 0.55),  // index PIP
    (0.5, 0.45),  // index DIP
    (0.5, 0.35),  // index tip
    (0.55, 0.65), // middle MCP
    (0.55, 0.5),  // middle PIP
    (0.55, 0.4),  // middle DIP
    (0.55, 0.3),  // middle tip
    (0.6, 0.65),  // ring MCP
    (0.6, 0.5),   // ring PIP
    (0.6, 0.4),   // ring DIP
    (0.6, 0.3),   // ring tip
    (0.65, 0.65), // pinky MCP
    (0.65, 0.55), // pinky PIP
    (0.65, 0.45), // pinky DIP
    (0.65, 0.35), // pinky tip
];

/// Hand shapes the simulator can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureScenario {
    /// Open hand, thumb spread away from the fingers.
    Relaxed,
    /// Thumb pinched to the index knuckle, index finger pointing.
    PinchPoint,
    /// Index finger curled, the rest open.
    IndexCurl,
    /// Middle finger curled, the rest open.
    MiddleCurl,
    /// Index and middle fingers curled, thumb spread.
    DoubleCurl,
    /// All fingers curled with the thumb tucked in.
    Fist,
    /// No hand in front of the tracker.
    Hidden,
}

impl GestureScenario {
    /// The action this hand shape is meant to trigger, if any.
    pub fn intended_action(&self) -> Option<GestureAction> {
        match self {
            Self::Relaxed => Some(GestureAction::Neutral),
            Self::PinchPoint => Some(GestureAction::MouseControl),
            Self::IndexCurl => Some(GestureAction::LeftClick),
            Self::MiddleCurl => Some(GestureAction::RightClick),
            Self::DoubleCurl => Some(GestureAction::DoubleClick),
            Self::Fist => Some(GestureAction::Screenshot),
            Self::Hidden => None,
        }
    }

    /// Shape the base pose into this scenario.
    fn apply(&self, landmarks: &mut [Landmark]) {
        match self {
            Self::Relaxed => spread_thumb(landmarks),
            Self::PinchPoint => pinch_thumb(landmarks),
            Self::IndexCurl => {
                curl_finger(landmarks, HandLandmark::IndexPip, HandLandmark::IndexTip);
                spread_thumb(landmarks);
            }
            Self::MiddleCurl => {
                curl_finger(landmarks, HandLandmark::MiddlePip, HandLandmark::MiddleTip);
                spread_thumb(landmarks);
            }
            Self::DoubleCurl => {
                curl_finger(landmarks, HandLandmark::IndexPip, HandLandmark::IndexTip);
                curl_finger(landmarks, HandLandmark::MiddlePip, HandLandmark::MiddleTip);
                spread_thumb(landmarks);
            }
            Self::Fist => {
                curl_finger(landmarks, HandLandmark::IndexPip, HandLandmark::IndexTip);
                curl_finger(landmarks, HandLandmark::MiddlePip, HandLandmark::MiddleTip);
                curl_finger(landmarks, HandLandmark::RingPip, HandLandmark::RingTip);
                curl_finger(landmarks, HandLandmark::PinkyPip, HandLandmark::PinkyTip);
                pinch_thumb(landmarks);
            }
            Self::Hidden => {}
        }
    }
}

/// Fold a fingertip back just past its PIP joint.
fn curl_finger(landmarks: &mut [Landmark], pip: HandLandmark, tip: HandLandmark) {
    let pip_pos = landmarks[pip.index()];
    landmarks[tip.index()] = Landmark::new(pip_pos.x, pip_pos.y + 0.05);
}

/// Move the thumb tip next to the index knuckle.
fn pinch_thumb(landmarks: &mut [Landmark]) {
    let index_mcp = landmarks[HandLandmark::IndexMcp.index()];
    landmarks[HandLandmark::ThumbTip.index()] = Landmark::new(index_mcp.x - 0.05, index_mcp.y);
}

/// Move the thumb tip well away from the index knuckle.
fn spread_thumb(landmarks: &mut [Landmark]) {
    landmarks[HandLandmark::ThumbTip.index()] = Landmark::new(0.05, 0.25);
}

/// A [`LandmarkSource`] that plays a list of scenarios, holding each for a
/// fixed number of frames, then ends the stream.
pub struct SimulatedHandSource {
    playlist: Vec<GestureScenario>,
    frames_per_scenario: usize,
    frame_interval_ms: f64,
    jitter: f64,
    rng: StdRng,
    cursor: usize,
}

impl SimulatedHandSource {
    /// Simulator with no jitter, holding each scenario for
    /// `frames_per_scenario` frames at a nominal 30fps.
    pub fn new(playlist: Vec<GestureScenario>, frames_per_scenario: usize) -> Self {
        Self {
            playlist,
            frames_per_scenario,
            frame_interval_ms: 1000.0 / 30.0,
            jitter: 0.0,
            rng: StdRng::seed_from_u64(0),
            cursor: 0,
        }
    }

    /// Enable per-coordinate jitter of up to `jitter` in either direction,
    /// seeded for reproducibility.
    pub fn with_jitter(mut self, jitter: f64, seed: u64) -> Self {
        self.jitter = jitter;
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Scenario the next frame will be drawn from, if any remain.
    pub fn current_scenario(&self) -> Option<GestureScenario> {
        self.playlist.get(self.cursor / self.frames_per_scenario.max(1)).copied()
    }

    fn build_frame(&mut self, scenario: GestureScenario) -> LandmarkFrame {
        let process_time_ms = self.cursor as f64 * self.frame_interval_ms;

        if scenario == GestureScenario::Hidden {
            return LandmarkFrame::new(Vec::new(), process_time_ms);
        }

        let mut landmarks: Vec<Landmark> = BASE_POSE
            .iter()
            .map(|&(x, y)| Landmark::new(x, y))
            .collect();
        scenario.apply(&mut landmarks);

        if self.jitter > 0.0 {
            for lm in &mut landmarks {
                lm.x += self.rng.random_range(-self.jitter..=self.jitter);
                lm.y += self.rng.random_range(-self.jitter..=self.jitter);
            }
        }

        LandmarkFrame::new(landmarks, process_time_ms)
    }
}

#[async_trait]
impl LandmarkSource for SimulatedHandSource {
    fn id(&self) -> &str {
        "simulator"
    }

    async fn next_frame(&mut self) -> ControlResult<Option<LandmarkFrame>> {
        let Some(scenario) = self.current_scenario() else {
            return Ok(None);
        };

        let frame = self.build_frame(scenario);
        self.cursor += 1;
        Ok(Some(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::classifier::{classify, Classification};

    fn one_frame(scenario: GestureScenario) -> LandmarkFrame {
        let mut source = SimulatedHandSource::new(vec![scenario], 1);
        source.build_frame(scenario)
    }

    #[test]
    fn test_visible_scenarios_emit_full_hands() {
        for scenario in [
            GestureScenario::Relaxed,
            GestureScenario::PinchPoint,
            GestureScenario::IndexCurl,
            GestureScenario::MiddleCurl,
            GestureScenario::DoubleCurl,
            GestureScenario::Fist,
        ] {
            let frame = one_frame(scenario);
            assert_eq!(
                frame.landmarks.len(),
                LANDMARK_COUNT,
                "scenario {:?} should emit a full hand",
                scenario
            );
        }
    }

    #[test]
    fn test_hidden_scenario_emits_no_landmarks() {
        let frame = one_frame(GestureScenario::Hidden);
        assert!(frame.landmarks.is_empty());
        assert!(matches!(classify(&frame.landmarks), Classification::NoHand));
    }

    #[test]
    fn test_scenarios_classify_as_intended() {
        for scenario in [
            GestureScenario::Relaxed,
            GestureScenario::PinchPoint,
            GestureScenario::IndexCurl,
            GestureScenario::MiddleCurl,
            GestureScenario::DoubleCurl,
            GestureScenario::Fist,
        ] {
            let frame = one_frame(scenario);
            assert_eq!(
                classify(&frame.landmarks).action(),
                scenario.intended_action(),
                "scenario {:?} classified wrong",
                scenario
            );
        }
    }

    #[test]
    fn test_seeded_jitter_is_deterministic() {
        let mut a = SimulatedHandSource::new(vec![GestureScenario::Relaxed], 3).with_jitter(0.01, 42);
        let mut b = SimulatedHandSource::new(vec![GestureScenario::Relaxed], 3).with_jitter(0.01, 42);

        for scenario in [GestureScenario::Relaxed; 3] {
            let fa = a.build_frame(scenario);
            let fb = b.build_frame(scenario);
            a.cursor += 1;
            b.cursor += 1;
            assert_eq!(fa.landmarks, fb.landmarks);
        }
    }

    #[tokio::test]
    async fn test_stream_ends_after_playlist() {
        let mut source =
            SimulatedHandSource::new(vec![GestureScenario::Relaxed, GestureScenario::Fist], 2);

        let mut frames = 0;
        while let Some(frame) = source.next_frame().await.unwrap() {
            // Timestamps advance by one frame interval per frame
            assert!((frame.process_time_ms - frames as f64 * 1000.0 / 30.0).abs() < 1e-9);
            frames += 1;
        }
        assert_eq!(frames, 4);

        // Stream stays closed
        assert!(source.next_frame().await.unwrap().is_none());
    }
}
