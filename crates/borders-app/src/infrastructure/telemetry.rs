//! Fire-and-forget session telemetry.
//!
//! Events are handed to a [`TelemetrySink`] on a spawned task so a slow or
//! failing sink can never delay gameplay.  Failures are logged and dropped.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::session::SessionContext;

/// Error type for telemetry delivery.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("telemetry sink unavailable: {0}")]
    Unavailable(String),
}

/// Emitted once when a session is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStarted {
    pub session_id: Uuid,
    pub locale: String,
}

impl From<&SessionContext> for SessionStarted {
    fn from(ctx: &SessionContext) -> Self {
        Self {
            session_id: ctx.session_id,
            locale: ctx.locale.clone(),
        }
    }
}

/// Destination for telemetry events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TelemetrySink: Send + Sync {
    async fn session_started(&self, event: SessionStarted) -> Result<(), TelemetryError>;
}

/// Default sink: one structured `tracing` event per telemetry event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

#[async_trait]
impl TelemetrySink for TracingSink {
    async fn session_started(&self, event: SessionStarted) -> Result<(), TelemetryError> {
        info!(
            target: "borders::telemetry",
            session_id = %event.session_id,
            locale = %event.locale,
            "session_started"
        );
        Ok(())
    }
}

/// Sends `session_started` in the background.
///
/// The returned handle may be ignored; it exists so tests can await delivery.
pub fn emit_session_started(sink: Arc<dyn TelemetrySink>, event: SessionStarted) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = sink.session_started(event).await {
            warn!("dropping telemetry event: {e}");
        }
    })
}
