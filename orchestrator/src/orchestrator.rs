//! Generation orchestrator
//!
//! Turns one server round-trip into a staged, typed, cancellable reveal.
//! The state machine is headless: every observable step is sent as a
//! [`GenerationEvent`] to whoever holds the event receiver, and the only
//! persistent effect is the final message appended to the chat session.
//!
//! Per attempt: Staging (fixed stage plan, server call in flight) then
//! Typing (one file at a time, in bundle order) then Completed. The cancel
//! token is checked before every stage, before every file and before the
//! final message; with `per_line_cancel` it is also checked on every line.
//! Waiting for a late server answer is abandoned as soon as it is cancelled.

use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use shared::codeblocks::bundle_from_text;
use shared::{
    AppPlan, FileBundle, FileEntry, GenerateRequest, GenerateResponse, ProcessId, RequestType, logging, process_debug,
    process_info, process_warn,
};

use crate::config::OrchestratorConfig;
use crate::core::fallback::offline_response;
use crate::core::live_coding::line_delay;
use crate::core::{
    CancelPoint, CancelToken, ChatSession, Complexity, GenerationEvent, GenerationStage, LiveCodingState,
    MessageKind, MessageMetadata,
};
use crate::error::{OrchestratorError, OrchestratorResult};
use crate::traits::{GenerationClient, Pacer};

/// How a generation attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Completed {
        message_id: String,
        files: Vec<String>,
        /// Content came from the offline generator
        offline: bool,
        /// The server offered to build the planned app
        build_offered: bool,
    },
    Cancelled {
        point: CancelPoint,
    },
}

/// Content to replay once staging is over
struct Reply {
    text: String,
    files: FileBundle,
    app_plan: Option<AppPlan>,
    build_offered: bool,
    offline: bool,
}

/// Main orchestrator driving one generation attempt at a time
pub struct GenerationOrchestrator<C, P>
where
    C: GenerationClient + 'static,
    P: Pacer,
{
    client: Arc<C>,
    pacer: P,
    config: OrchestratorConfig,

    live: LiveCodingState,
    generating: bool,

    events_tx: mpsc::UnboundedSender<GenerationEvent>,
    events_rx: Option<mpsc::UnboundedReceiver<GenerationEvent>>,
}

impl<C, P> GenerationOrchestrator<C, P>
where
    C: GenerationClient + 'static,
    P: Pacer,
{
    pub fn new(client: C, pacer: P, config: OrchestratorConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            client: Arc::new(client),
            pacer,
            config,
            live: LiveCodingState::default(),
            generating: false,
            events_tx,
            events_rx: Some(events_rx),
        }
    }

    /// Hand out the event stream; only the first caller gets it
    pub fn take_event_receiver(&mut self) -> Option<mpsc::UnboundedReceiver<GenerationEvent>> {
        self.events_rx.take()
    }

    pub fn live_state(&self) -> &LiveCodingState {
        &self.live
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Run one generation attempt for `prompt`
    ///
    /// Network failures never surface here: they switch the attempt to the
    /// offline generator and emit `FallbackEngaged`. The user message is
    /// appended immediately; the AI message only when the attempt completes.
    pub async fn generate(
        &mut self,
        session: &mut ChatSession,
        prompt: &str,
        request_type: RequestType,
        token: &CancelToken,
    ) -> GenerationOutcome {
        self.generating = true;
        session.append_user(prompt);
        self.emit(GenerationEvent::Submitted {
            prompt: prompt.to_string(),
        });
        process_info!(ProcessId::current(), "🧠 Generating ({} request): {}", request_type, prompt);

        let client = Arc::clone(&self.client);
        let request = GenerateRequest::new(prompt, request_type);
        let timeout = self.config.timeout;
        let fetch = async move {
            match tokio::time::timeout(timeout, client.generate(request)).await {
                Ok(result) => result,
                Err(_) => Err(OrchestratorError::Timeout { timeout }),
            }
        };
        tokio::pin!(fetch);
        let mut fetched: Option<OrchestratorResult<GenerateResponse>> = None;

        // Staging: the server call runs alongside the stage animation
        for stage in GenerationStage::ALL {
            if token.is_cancelled() {
                return self.cancel(CancelPoint::Stage { stage });
            }
            self.emit(GenerationEvent::StageStarted {
                stage,
                progress: stage.progress_before(),
            });
            process_debug!(ProcessId::current(), "🔄 {}", stage.label());

            let mut pause = self.pacer.pause(self.stage_delay(stage));
            if fetched.is_none() {
                tokio::select! {
                    result = &mut fetch => {
                        fetched = Some(result);
                        pause.await;
                    }
                    _ = &mut pause => {}
                }
            } else {
                pause.await;
            }

            self.emit(GenerationEvent::StageCompleted {
                stage,
                progress: stage.progress_after(),
            });
        }

        let result = match fetched {
            Some(result) => result,
            None => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => return self.cancel(CancelPoint::AwaitingResponse),
                    result = &mut fetch => result,
                }
            }
        };
        let reply = self.resolve_reply(prompt, result);

        // Typing: strictly in bundle order, one file at a time
        for (file_name, entry) in reply.files.iter() {
            if token.is_cancelled() {
                return self.cancel(CancelPoint::File {
                    file_name: file_name.to_string(),
                });
            }
            if let Some(point) = self.type_file(file_name, entry, token).await {
                return self.cancel(point);
            }
        }

        if token.is_cancelled() {
            return self.cancel(CancelPoint::BeforeCompletion);
        }
        self.complete(session, reply)
    }

    fn resolve_reply(&self, prompt: &str, result: OrchestratorResult<GenerateResponse>) -> Reply {
        match result {
            Ok(response) if response.success => {
                // Plain-text answers may still carry fenced files
                let files = if response.files.is_empty() {
                    bundle_from_text(&response.response)
                } else {
                    response.files
                };
                Reply {
                    text: response.response,
                    files,
                    app_plan: response.app_plan,
                    build_offered: response.show_build_button.unwrap_or(false),
                    offline: false,
                }
            }
            Ok(response) => self.fallback(prompt, format!("server reported failure: {}", response.response)),
            Err(e) => self.fallback(prompt, e.to_string()),
        }
    }

    fn fallback(&self, prompt: &str, reason: String) -> Reply {
        process_warn!(ProcessId::current(), "⚠️ Server unavailable, using offline generator: {}", reason);
        self.emit(GenerationEvent::FallbackEngaged { reason });

        let text = offline_response(prompt);
        Reply {
            text: text.to_string(),
            files: bundle_from_text(text),
            app_plan: None,
            build_offered: false,
            offline: true,
        }
    }

    /// Type one file line by line; returns where it stopped if cancelled mid-file
    async fn type_file(&mut self, file_name: &str, entry: &FileEntry, token: &CancelToken) -> Option<CancelPoint> {
        let lines: Vec<&str> = entry.content.lines().collect();
        let total = lines.len();

        self.live.begin(file_name, entry.language, total);
        self.emit(GenerationEvent::FileStarted {
            file_name: file_name.to_string(),
            language: entry.language,
            total_lines: total,
            complexity: Complexity::from_line_count(total),
        });

        let per_line = self.config.scaled(line_delay(total));
        let thinking = self.config.scaled(self.config.thinking_pause);

        for (index, line) in lines.iter().enumerate() {
            let number = index + 1;
            if self.config.per_line_cancel && token.is_cancelled() {
                return Some(CancelPoint::Line {
                    file_name: file_name.to_string(),
                    line: number,
                });
            }

            let progress = self.live.push_line(line);
            self.emit(GenerationEvent::LiveUpdate {
                file_name: file_name.to_string(),
                line: line.to_string(),
                lines_typed: number,
                progress,
            });

            if number < total {
                self.pacer.pause(per_line).await;
                if self.config.thinking_interval > 0 && number % self.config.thinking_interval == 0 {
                    self.pacer.pause(thinking).await;
                }
            }
        }

        self.emit(GenerationEvent::FileCompleted {
            file_name: file_name.to_string(),
            lines: total,
        });
        self.live.reset();
        None
    }

    fn complete(&mut self, session: &mut ChatSession, reply: Reply) -> GenerationOutcome {
        let files = reply.files.names();
        let (kind, metadata) = if reply.files.is_empty() {
            (MessageKind::Response, None)
        } else {
            (MessageKind::Code, Some(MessageMetadata::from_bundle(&reply.files)))
        };

        let message_id = session
            .append_ai(summary_text(&reply), kind, metadata)
            .id
            .clone();
        self.emit(GenerationEvent::Completed {
            message_id: message_id.clone(),
            files: files.clone(),
        });
        self.finish();

        logging::log_success(ProcessId::current(), &format!("Generation complete ({} files)", files.len()));
        GenerationOutcome::Completed {
            message_id,
            files,
            offline: reply.offline,
            build_offered: reply.build_offered,
        }
    }

    fn cancel(&mut self, point: CancelPoint) -> GenerationOutcome {
        process_info!(ProcessId::current(), "🛑 Generation cancelled at {:?}", point);
        self.emit(GenerationEvent::Cancelled { point: point.clone() });
        self.finish();
        GenerationOutcome::Cancelled { point }
    }

    fn finish(&mut self) {
        self.live.reset();
        self.generating = false;
    }

    fn stage_delay(&self, stage: GenerationStage) -> Duration {
        let jitter = rand::thread_rng().gen_range(0.8..=1.2);
        self.config.scaled(stage.delay(self.config.stage_unit, jitter))
    }

    fn emit(&self, event: GenerationEvent) {
        // No subscriber is fine; the state machine runs regardless
        let _ = self.events_tx.send(event);
    }
}

/// Final chat text: the reply plus a summary of the files or the plan
fn summary_text(reply: &Reply) -> String {
    let mut text = reply.text.trim_end().to_string();

    if !reply.files.is_empty() {
        let names = reply.files.names().join(", ");
        text.push_str(&format!("\n\nGenerated {} file(s): {}", reply.files.len(), names));
    } else if let Some(plan) = &reply.app_plan {
        text.push_str(&format!("\n\n{}: {}", plan.title, plan.description));
        for feature in &plan.features {
            text.push_str(&format!("\n- {feature}"));
        }
    }

    text
}
