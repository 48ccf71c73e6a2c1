//! Virtual mouse controller
//!
//! Defines the capability interfaces at the system boundary — landmark
//! sources on the way in, pointer sinks on the way out — and the session
//! loop that wires a source through the classifier to a sink. The
//! classifier itself stays pure; everything effectful lives behind these
//! traits so real trackers and OS input backends can be injected without
//! touching the core.

pub mod console;
pub mod session;

pub use console::{ConsolePointerSink, PointerAction};
pub use session::{GestureSession, GestureTrace, SessionConfig, TraceEntry};

use crate::capture::types::LandmarkFrame;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while driving a gesture session
#[derive(Error, Debug)]
pub enum ControlError {
    #[error("Landmark source closed: {0}")]
    SourceError(String),

    #[error("Pointer actuation failed: {0}")]
    ActuationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Result type for controller operations
pub type ControlResult<T> = Result<T, ControlError>;

/// Mouse buttons a sink can press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

impl std::fmt::Display for MouseButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MouseButton::Left => write!(f, "left"),
            MouseButton::Right => write!(f, "right"),
        }
    }
}

/// Trait for hand landmark producers
///
/// A source emits one [`LandmarkFrame`] per tracked video frame. Returning
/// `Ok(None)` ends the stream. Real trackers, file replays, and the bundled
/// simulator all implement this.
#[async_trait]
pub trait LandmarkSource: Send + Sync {
    /// Identifier for logs (e.g. "simulator", "webcam-0")
    fn id(&self) -> &str;

    /// Produce the next frame, or `None` when the stream ends
    async fn next_frame(&mut self) -> ControlResult<Option<LandmarkFrame>>;
}

/// Trait for pointer actuation backends
///
/// The session calls exactly one of these per classified frame. Implementors
/// decide what actuation means: an OS input backend moves the real cursor,
/// the bundled console sink logs and records.
#[async_trait]
pub trait PointerSink: Send + Sync {
    /// Identifier for logs (e.g. "console", "os-input")
    fn id(&self) -> &str;

    /// Move the pointer to an absolute screen position
    async fn move_to(&mut self, x: f64, y: f64) -> ControlResult<()>;

    /// Press and release a mouse button
    async fn click(&mut self, button: MouseButton) -> ControlResult<()>;

    /// Issue a double-click
    async fn double_click(&mut self) -> ControlResult<()>;

    /// Capture a screenshot, returning the generated file name
    async fn screenshot(&mut self) -> ControlResult<String>;
}
