//! Gesture session loop
//!
//! Pulls frames from a landmark source, classifies each one, and dispatches
//! the selected action to a pointer sink. Every frame's classification is
//! appended to a trace that can be written out as JSON for inspection.

use crate::capture::types::{HandLandmark, LandmarkFrame};
use crate::controller::{ControlResult, LandmarkSource, MouseButton, PointerSink};
use crate::processing::classifier::{classify, Classification, GestureAction};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Screen geometry the cursor mapping projects into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    pub screen_width: f64,
    pub screen_height: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            screen_width: 1920.0,
            screen_height: 1080.0,
        }
    }
}

/// Classification outcome for a single frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceEntry {
    /// Time in milliseconds from session start.
    pub process_time_ms: f64,
    pub classification: Classification,
}

/// Full record of one session run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureTrace {
    pub session_id: Uuid,
    pub source_id: String,
    pub created_at: DateTime<Utc>,
    pub entries: Vec<TraceEntry>,
}

/// Drives one landmark source through the classifier into one pointer sink.
pub struct GestureSession {
    source: Box<dyn LandmarkSource>,
    sink: Box<dyn PointerSink>,
    config: SessionConfig,
    trace: GestureTrace,
}

impl GestureSession {
    pub fn new(
        source: Box<dyn LandmarkSource>,
        sink: Box<dyn PointerSink>,
        config: SessionConfig,
    ) -> Self {
        let trace = GestureTrace {
            session_id: Uuid::new_v4(),
            source_id: source.id().to_string(),
            created_at: Utc::now(),
            entries: Vec::new(),
        };
        Self {
            source,
            sink,
            config,
            trace,
        }
    }

    /// Run until the source ends its stream.
    ///
    /// One classification and at most one sink action per frame; the
    /// classifier carries no state between frames, so a held gesture
    /// re-fires its action every frame exactly as the source delivers it.
    pub async fn run(&mut self) -> ControlResult<()> {
        tracing::info!(
            "Gesture session {} started (source={}, sink={}, screen={}x{})",
            self.trace.session_id,
            self.source.id(),
            self.sink.id(),
            self.config.screen_width,
            self.config.screen_height
        );

        while let Some(frame) = self.source.next_frame().await? {
            let classification = classify(&frame.landmarks);
            self.dispatch(&frame, &classification).await?;
            self.trace.entries.push(TraceEntry {
                process_time_ms: frame.process_time_ms,
                classification,
            });
        }

        let hands = self
            .trace
            .entries
            .iter()
            .filter(|e| !matches!(e.classification, Classification::NoHand))
            .count();
        tracing::info!(
            "Gesture session {} finished (frames={}, hands={})",
            self.trace.session_id,
            self.trace.entries.len(),
            hands
        );
        Ok(())
    }

    async fn dispatch(
        &mut self,
        frame: &LandmarkFrame,
        classification: &Classification,
    ) -> ControlResult<()> {
        let Some(action) = classification.action() else {
            tracing::debug!("No hand detected at {:.1}ms", frame.process_time_ms);
            return Ok(());
        };

        match action {
            GestureAction::MouseControl => {
                // Index fingertip drives the cursor. The halved y is the
                // historical mapping the rest of the system is tuned to.
                if let Some(tip) = frame.get(HandLandmark::IndexTip) {
                    let x = tip.x * self.config.screen_width;
                    let y = tip.y / 2.0 * self.config.screen_height;
                    self.sink.move_to(x, y).await?;
                }
            }
            GestureAction::LeftClick => self.sink.click(MouseButton::Left).await?,
            GestureAction::RightClick => self.sink.click(MouseButton::Right).await?,
            GestureAction::DoubleClick => self.sink.double_click().await?,
            GestureAction::Screenshot => {
                let file_name = self.sink.screenshot().await?;
                tracing::debug!("Screenshot saved as {}", file_name);
            }
            GestureAction::Neutral => {}
        }
        Ok(())
    }

    /// Trace of everything classified so far.
    pub fn trace(&self) -> &GestureTrace {
        &self.trace
    }

    /// Write the trace as pretty-printed JSON.
    pub fn write_trace(&self, path: &Path) -> ControlResult<()> {
        let data = serde_json::to_vec_pretty(&self.trace)?;
        std::fs::write(path, data)?;
        tracing::info!(
            "Wrote {} trace entries to {}",
            self.trace.entries.len(),
            path.display()
        );
        Ok(())
    }
}
