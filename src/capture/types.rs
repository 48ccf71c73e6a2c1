use serde::{Deserialize, Serialize};

/// Number of landmarks in a full hand skeleton.
pub const LANDMARK_COUNT: usize = 21;

/// A single tracked hand keypoint.
///
/// Coordinates are normalized to [0, 1] as a fraction of frame width and
/// height by the usual tracker conventions, but nothing downstream depends
/// on the coordinate space beyond internal consistency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One frame of hand landmarks from a tracking source.
///
/// A frame with a detected hand carries exactly [`LANDMARK_COUNT`] points in
/// the standard hand-model order; a frame with fewer points means no hand
/// was detected. Index identity is an invariant the classifier depends on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkFrame {
    pub landmarks: Vec<Landmark>,
    /// Time in milliseconds from session start.
    pub process_time_ms: f64,
}

impl LandmarkFrame {
    pub fn new(landmarks: Vec<Landmark>, process_time_ms: f64) -> Self {
        Self {
            landmarks,
            process_time_ms,
        }
    }

    /// Whether this frame carries a full hand skeleton.
    pub fn has_hand(&self) -> bool {
        self.landmarks.len() >= LANDMARK_COUNT
    }

    /// Position of a named landmark, if present in this frame.
    pub fn get(&self, landmark: HandLandmark) -> Option<Landmark> {
        self.landmarks.get(landmark.index()).copied()
    }
}

/// Named indices into the 21-point hand model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandLandmark {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

impl HandLandmark {
    /// Index of this landmark within a frame.
    pub fn index(&self) -> usize {
        match self {
            Self::Wrist => 0,
            Self::ThumbCmc => 1,
            Self::ThumbMcp => 2,
            Self::ThumbIp => 3,
            Self::ThumbTip => 4,
            Self::IndexMcp => 5,
            Self::IndexPip => 6,
            Self::IndexDip => 7,
            Self::IndexTip => 8,
            Self::MiddleMcp => 9,
            Self::MiddlePip => 10,
            Self::MiddleDip => 11,
            Self::MiddleTip => 12,
            Self::RingMcp => 13,
            Self::RingPip => 14,
            Self::RingDip => 15,
            Self::RingTip => 16,
            Self::PinkyMcp => 17,
            Self::PinkyPip => 18,
            Self::PinkyDip => 19,
            Self::PinkyTip => 20,
        }
    }
}
