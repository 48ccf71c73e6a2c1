//! Gesture classification from hand landmarks
//!
//! Maps one frame of landmark positions to a discrete pointer action using
//! a fixed decision list over three geometric features: thumb-to-index
//! distance and the bend angles of the index and middle fingers. A small
//! angle at the PIP joint means the finger is bent; a large angle means it
//! is straight.

use crate::capture::types::{HandLandmark, Landmark, LANDMARK_COUNT};
use crate::processing::geometry::{get_angle, get_distance};
use serde::{Deserialize, Serialize};

/// Scaled distance below which the thumb counts as pinched to the index MCP.
pub const PINCH_THRESHOLD: f64 = 50.0;

/// Bend angle below which a finger counts as bent.
pub const BENT_ANGLE: f64 = 50.0;

/// Bend angle above which a finger counts as straight.
pub const STRAIGHT_ANGLE: f64 = 90.0;

/// Discrete pointer action selected by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GestureAction {
    /// Cursor tracks the index fingertip.
    MouseControl,
    LeftClick,
    RightClick,
    DoubleClick,
    Screenshot,
    /// Hand visible but no actionable gesture.
    Neutral,
}

impl std::fmt::Display for GestureAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GestureAction::MouseControl => write!(f, "mouse-control"),
            GestureAction::LeftClick => write!(f, "left-click"),
            GestureAction::RightClick => write!(f, "right-click"),
            GestureAction::DoubleClick => write!(f, "double-click"),
            GestureAction::Screenshot => write!(f, "screenshot"),
            GestureAction::Neutral => write!(f, "neutral"),
        }
    }
}

/// Geometric features measured from one frame, kept for diagnostics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandMeasurements {
    /// Scaled distance between thumb tip and index MCP.
    pub thumb_index_dist: f64,
    /// Index finger bend angle at the PIP joint (degrees).
    pub index_angle: f64,
    /// Middle finger bend angle at the PIP joint (degrees).
    pub middle_angle: f64,
}

/// Result of classifying one landmark frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Classification {
    /// Fewer than 21 landmarks were supplied.
    NoHand,
    /// A full hand was measured and classified.
    Hand {
        action: GestureAction,
        measurements: HandMeasurements,
    },
}

impl Classification {
    /// The selected action, if a hand was present.
    pub fn action(&self) -> Option<GestureAction> {
        match self {
            Classification::NoHand => None,
            Classification::Hand { action, .. } => Some(*action),
        }
    }
}

fn landmark(landmarks: &[Landmark], which: HandLandmark) -> Landmark {
    landmarks[which.index()]
}

/// Classify one frame of hand landmarks.
///
/// Expects the full 21-point hand model in standard order; anything shorter
/// is reported as [`Classification::NoHand`] without touching the geometry.
/// The decision list is evaluated top to bottom and the first matching rule
/// wins, so the pinch-and-point rule shadows the click rules. NaN
/// coordinates surface as NaN measurements and classify as neutral.
pub fn classify(landmarks: &[Landmark]) -> Classification {
    if landmarks.len() < LANDMARK_COUNT {
        return Classification::NoHand;
    }

    let thumb_index_dist = get_distance(
        landmark(landmarks, HandLandmark::ThumbTip),
        landmark(landmarks, HandLandmark::IndexMcp),
    );
    let index_angle = get_angle(
        landmark(landmarks, HandLandmark::IndexMcp),
        landmark(landmarks, HandLandmark::IndexPip),
        landmark(landmarks, HandLandmark::IndexTip),
    );
    let middle_angle = get_angle(
        landmark(landmarks, HandLandmark::MiddleMcp),
        landmark(landmarks, HandLandmark::MiddlePip),
        landmark(landmarks, HandLandmark::MiddleTip),
    );

    let action = if thumb_index_dist < PINCH_THRESHOLD && index_angle > STRAIGHT_ANGLE {
        GestureAction::MouseControl
    } else if index_angle < BENT_ANGLE
        && middle_angle > STRAIGHT_ANGLE
        && thumb_index_dist > PINCH_THRESHOLD
    {
        GestureAction::LeftClick
    } else if middle_angle < BENT_ANGLE
        && index_angle > STRAIGHT_ANGLE
        && thumb_index_dist > PINCH_THRESHOLD
    {
        GestureAction::RightClick
    } else if index_angle < BENT_ANGLE
        && middle_angle < BENT_ANGLE
        && thumb_index_dist > PINCH_THRESHOLD
    {
        GestureAction::DoubleClick
    } else if index_angle < BENT_ANGLE
        && middle_angle < BENT_ANGLE
        && thumb_index_dist < PINCH_THRESHOLD
    {
        GestureAction::Screenshot
    } else {
        GestureAction::Neutral
    };

    Classification::Hand {
        action,
        measurements: HandMeasurements {
            thumb_index_dist,
            index_angle,
            middle_angle,
        },
    }
}
