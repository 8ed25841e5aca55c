//! Per-run progress reporting.
//!
//! The orchestrator publishes one event per state transition; callers
//! choose how to observe them. The broadcast bus backs the server, the
//! console sink backs the CLI, and the null sink backs tests that do not
//! care.

use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::error::PipelineResult;
use crate::pipeline::PipelineState;

pub(crate) fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressEvent {
    pub run_id: Uuid,
    pub state: PipelineState,
    pub message: Option<String>,
    pub timestamp_ms: u64,
}

impl ProgressEvent {
    pub fn new(run_id: Uuid, state: PipelineState, message: Option<String>) -> Self {
        Self {
            run_id,
            state,
            message,
            timestamp_ms: now_ms(),
        }
    }
}

#[async_trait]
pub trait ProgressSink: Send + Sync {
    async fn report(&self, event: ProgressEvent) -> PipelineResult<()>;
}

/// Broadcast-channel bus; every subscriber sees every event.
pub struct ChannelProgressBus {
    sender: broadcast::Sender<ProgressEvent>,
}

impl ChannelProgressBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ProgressEvent> {
        self.sender.subscribe()
    }
}

impl Default for ChannelProgressBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[async_trait]
impl ProgressSink for ChannelProgressBus {
    async fn report(&self, event: ProgressEvent) -> PipelineResult<()> {
        // A send with no live subscribers is not an error.
        let _ = self.sender.send(event);
        Ok(())
    }
}

/// Prints the three pipeline steps the way the interactive surface does.
pub struct ConsoleProgress;

#[async_trait]
impl ProgressSink for ConsoleProgress {
    async fn report(&self, event: ProgressEvent) -> PipelineResult<()> {
        let line = match event.state {
            PipelineState::Idle => "Recording complete, starting translation".to_string(),
            PipelineState::Transcribing => "Step 1/3: Transcribing audio...".to_string(),
            PipelineState::Translating => "Step 2/3: Translating text...".to_string(),
            PipelineState::Synthesizing => "Step 3/3: Converting to speech...".to_string(),
            PipelineState::Done => "Translation completed!".to_string(),
            PipelineState::Failed(stage) => match &event.message {
                Some(cause) => format!("Error in {}: {}", stage, cause),
                None => format!("Error in {}", stage),
            },
        };
        eprintln!("[PIPELINE] {}", line);
        Ok(())
    }
}

/// Discards every event.
pub struct NullProgress;

#[async_trait]
impl ProgressSink for NullProgress {
    async fn report(&self, _event: ProgressEvent) -> PipelineResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bus_delivers_to_subscriber() {
        let bus = ChannelProgressBus::default();
        let mut rx = bus.subscribe();
        let run_id = Uuid::new_v4();
        bus.report(ProgressEvent::new(run_id, PipelineState::Transcribing, None))
            .await
            .unwrap();
        let event = rx.recv().await.unwrap();
        assert_eq!(event.run_id, run_id);
        assert_eq!(event.state, PipelineState::Transcribing);
    }

    #[tokio::test]
    async fn test_bus_without_subscribers_does_not_error() {
        let bus = ChannelProgressBus::default();
        let event = ProgressEvent::new(Uuid::new_v4(), PipelineState::Done, None);
        assert!(bus.report(event).await.is_ok());
    }
}
