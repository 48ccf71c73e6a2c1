//! Hand landmark acquisition
//!
//! Landmark frames enter the system through the `LandmarkSource` trait;
//! this module holds the frame types shared by every source and the
//! simulated source used for offline demos and tests. Real trackers live
//! outside this crate and only need to produce [`LandmarkFrame`] values.

pub mod simulator;
pub mod types;

pub use simulator::{GestureScenario, SimulatedHandSource};
pub use types::{HandLandmark, Landmark, LandmarkFrame, LANDMARK_COUNT};
