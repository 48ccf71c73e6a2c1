//! Console pointer sink
//!
//! Actuates pointer actions as structured log lines and records them into a
//! shared action log. Stands in for an OS input backend in demos and tests;
//! the log can be inspected after a session run to see exactly what would
//! have been injected.

use crate::controller::{ControlResult, MouseButton, PointerSink};
use async_trait::async_trait;
use parking_lot::Mutex as ParkingMutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// One actuated pointer action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum PointerAction {
    Move { x: f64, y: f64 },
    Click { button: String },
    DoubleClick,
    Screenshot { file_name: String },
}

/// A [`PointerSink`] that logs actions instead of injecting them.
pub struct ConsolePointerSink {
    id: String,
    actions: Arc<ParkingMutex<Vec<PointerAction>>>,
}

impl ConsolePointerSink {
    pub fn new() -> Self {
        Self {
            id: "console".to_string(),
            actions: Arc::new(ParkingMutex::new(Vec::new())),
        }
    }

    /// Shared handle to the action log; stays valid after the sink is
    /// moved into a session.
    pub fn action_log(&self) -> Arc<ParkingMutex<Vec<PointerAction>>> {
        self.actions.clone()
    }
}

impl Default for ConsolePointerSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PointerSink for ConsolePointerSink {
    fn id(&self) -> &str {
        &self.id
    }

    async fn move_to(&mut self, x: f64, y: f64) -> ControlResult<()> {
        tracing::info!("Pointer move to ({:.1}, {:.1})", x, y);
        self.actions.lock().push(PointerAction::Move { x, y });
        Ok(())
    }

    async fn click(&mut self, button: MouseButton) -> ControlResult<()> {
        tracing::info!("Mouse {} click", button);
        self.actions.lock().push(PointerAction::Click {
            button: button.to_string(),
        });
        Ok(())
    }

    async fn double_click(&mut self) -> ControlResult<()> {
        tracing::info!("Mouse double click");
        self.actions.lock().push(PointerAction::DoubleClick);
        Ok(())
    }

    async fn screenshot(&mut self) -> ControlResult<String> {
        let file_name = format!("screenshot-{}.png", Uuid::new_v4());
        tracing::info!("Screenshot captured as {}", file_name);
        self.actions
            .lock()
            .push(PointerAction::Screenshot {
                file_name: file_name.clone(),
            });
        Ok(file_name)
    }
}
