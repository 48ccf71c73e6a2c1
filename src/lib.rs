//! Gesture Mouse - hand-gesture-controlled virtual mouse.
//!
//! Reads hand landmark frames from a pluggable source, classifies each
//! frame into a pointer action with a fixed-threshold decision list, and
//! dispatches the action to a pluggable pointer sink. The bundled simulator
//! and console sink make the whole loop runnable offline.

pub mod capture;
pub mod controller;
pub mod processing;

pub use capture::{GestureScenario, HandLandmark, Landmark, LandmarkFrame, SimulatedHandSource, LANDMARK_COUNT};
pub use controller::{
    ConsolePointerSink, ControlError, ControlResult, GestureSession, LandmarkSource, MouseButton,
    PointerSink, SessionConfig,
};
pub use processing::{classify, Classification, GestureAction, HandMeasurements};
