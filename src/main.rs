//! Offline demo: runs the simulated hand through a gesture session against
//! the console pointer sink and prints what each hand shape triggered.

use anyhow::Result;
use gesture_mouse::{
    ConsolePointerSink, GestureScenario, GestureSession, SessionConfig, SimulatedHandSource,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gesture_mouse=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Gesture Mouse demo v{}", env!("CARGO_PKG_VERSION"));

    let playlist = vec![
        GestureScenario::Relaxed,
        GestureScenario::PinchPoint,
        GestureScenario::IndexCurl,
        GestureScenario::MiddleCurl,
        GestureScenario::DoubleCurl,
        GestureScenario::Fist,
        GestureScenario::Hidden,
    ];

    for scenario in &playlist {
        match scenario.intended_action() {
            Some(action) => tracing::info!("Scenario {:?} should trigger {}", scenario, action),
            None => tracing::info!("Scenario {:?} should detect no hand", scenario),
        }
    }

    let source = SimulatedHandSource::new(playlist, 30).with_jitter(0.005, 7);
    let sink = ConsolePointerSink::new();
    let action_log = sink.action_log();

    let mut session = GestureSession::new(
        Box::new(source),
        Box::new(sink),
        SessionConfig::default(),
    );
    session.run().await?;

    let trace_path = std::env::temp_dir().join(format!(
        "gesture-mouse-trace-{}.json",
        session.trace().session_id
    ));
    session.write_trace(&trace_path)?;

    tracing::info!(
        "Demo complete: {} frames classified, {} pointer actions, trace at {}",
        session.trace().entries.len(),
        action_log.lock().len(),
        trace_path.display()
    );

    Ok(())
}
