//! Test helpers: pacers that never sleep and orchestrator builders

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

use orchestrator::traits::MockGenerationClient;
use orchestrator::{
    CancelToken, GenerationClient, GenerationEvent, GenerationOrchestrator, OrchestratorConfig, OrchestratorError, Pacer,
};
use shared::GenerateResponse;

/// Records every requested pause and returns immediately
#[derive(Clone, Default)]
pub struct RecordingPacer {
    pauses: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingPacer {
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
    }
}

/// Cancels `token` during the `after`-th pause
pub struct CancellingPacer {
    token: CancelToken,
    after: usize,
    seen: AtomicUsize,
}

impl CancellingPacer {
    pub fn new(token: CancelToken, after: usize) -> Self {
        Self {
            token,
            after,
            seen: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Pacer for CancellingPacer {
    async fn pause(&self, _duration: Duration) {
        let seen = self.seen.fetch_add(1, Ordering::SeqCst) + 1;
        if seen == self.after {
            self.token.cancel();
        }
    }
}

/// Everything emitted so far
pub fn drain_events(rx: &mut UnboundedReceiver<GenerationEvent>) -> Vec<GenerationEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

pub struct TestHelpers;

impl TestHelpers {
    /// Mock client answering every request with `response`
    pub fn client_returning(response: GenerateResponse) -> MockGenerationClient {
        let mut client = MockGenerationClient::new();
        client.expect_generate().returning(move |_| Ok(response.clone()));
        client
    }

    /// Mock client failing every request as unreachable
    pub fn unreachable_client() -> MockGenerationClient {
        let mut client = MockGenerationClient::new();
        client
            .expect_generate()
            .returning(|_| Err(OrchestratorError::upstream("connection refused")));
        client
    }

    /// Orchestrator with the given pacer and its event stream
    pub fn orchestrator_with<C, P>(
        client: C,
        pacer: P,
        config: OrchestratorConfig,
    ) -> (GenerationOrchestrator<C, P>, UnboundedReceiver<GenerationEvent>)
    where
        C: GenerationClient + 'static,
        P: Pacer,
    {
        let mut orchestrator = GenerationOrchestrator::new(client, pacer, config);
        let events = orchestrator.take_event_receiver().expect("fresh orchestrator has a receiver");
        (orchestrator, events)
    }

    /// Progress values reported for `file_name`, in order
    pub fn file_progress(events: &[GenerationEvent], file_name: &str) -> Vec<u8> {
        events
            .iter()
            .filter_map(|event| match event {
                GenerationEvent::LiveUpdate {
                    file_name: name,
                    progress,
                    ..
                } if name == file_name => Some(*progress),
                _ => None,
            })
            .collect()
    }

    pub fn started_files(events: &[GenerationEvent]) -> Vec<String> {
        events
            .iter()
            .filter_map(|event| match event {
                GenerationEvent::FileStarted { file_name, .. } => Some(file_name.clone()),
                _ => None,
            })
            .collect()
    }
}
