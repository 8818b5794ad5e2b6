//! Orchestrator entry point
//!
//! Terminal front-end for the generation orchestrator: reads prompts (one
//! from `--prompt`, or line by line from stdin), drives a generation per
//! prompt and renders the event stream. Ctrl+C cancels the running
//! generation; at the input prompt it exits.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::signal;
use tokio::sync::mpsc::UnboundedReceiver;
use uuid::Uuid;

use orchestrator::render::render_event;
use orchestrator::services::{JsonSessionStore, RealGenerationClient, TokioPacer};
use orchestrator::{
    CancelToken, ChatSession, GenerationEvent, GenerationOrchestrator, GenerationOutcome, OrchestratorConfig,
    OrchestratorError, OrchestratorResult, SessionStore,
};
use shared::{ProcessId, RequestType, logging, process_debug, process_info};

type TerminalOrchestrator = GenerationOrchestrator<RealGenerationClient, TokioPacer>;

/// Live-coding assistant client
#[derive(Parser, Debug)]
#[command(name = "orchestrator")]
#[command(about = "Sends prompts to the live-coding server and replays the generated code")]
struct Args {
    /// Base URL of the webserver
    #[arg(long, env = "LIVECODER_SERVER", default_value = "http://127.0.0.1:3000")]
    server: String,

    /// Prompt to run once; reads prompts from stdin when omitted
    #[arg(long)]
    prompt: Option<String>,

    /// Request type (chat, plan, build)
    #[arg(long, default_value = "chat")]
    request_type: RequestType,

    /// JSON file the chat log is loaded from and saved to
    #[arg(long, env = "LIVECODER_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Session id sent to the server (random when omitted)
    #[arg(long, env = "LIVECODER_SESSION_ID")]
    session_id: Option<String>,

    /// Deadline for the server round-trip in seconds
    #[arg(long, env = "LIVECODER_TIMEOUT_SECS", default_value = "30")]
    timeout_secs: u64,

    /// Multiplier on all pacing delays; 0 disables the animation
    #[arg(long, env = "LIVECODER_TYPING_SCALE", default_value = "1.0")]
    typing_scale: f64,

    /// Check for cancellation on every typed line instead of once per file
    #[arg(long)]
    per_line_cancel: bool,

    /// Print events as JSON lines instead of rendering them
    #[arg(long)]
    json_events: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LIVECODER_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> OrchestratorResult<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    ProcessId::init_orchestrator();
    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(ProcessId::current(), "orchestrator client");

    if !args.typing_scale.is_finite() || args.typing_scale < 0.0 {
        return Err(OrchestratorError::config(format!(
            "typing scale must be a non-negative number, got {}",
            args.typing_scale
        )));
    }
    let config = OrchestratorConfig {
        timeout: Duration::from_secs(args.timeout_secs),
        typing_scale: args.typing_scale,
        per_line_cancel: args.per_line_cancel,
        ..OrchestratorConfig::default()
    };

    let session_id = args.session_id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());
    let client = RealGenerationClient::new(&args.server)?.with_session(session_id.clone());
    process_info!(
        ProcessId::current(),
        "🔧 Config: server={}, session={}, timeout={}s, typing_scale={}",
        client.endpoint(),
        session_id,
        args.timeout_secs,
        args.typing_scale
    );

    let store = args.session_file.clone().map(JsonSessionStore::new);
    let mut session = match &store {
        Some(store) => store.load().await?,
        None => ChatSession::new(),
    };
    process_debug!(ProcessId::current(), "💬 Chat log has {} messages", session.len());

    let mut orchestrator = GenerationOrchestrator::new(client, TokioPacer, config);
    let mut events = orchestrator
        .take_event_receiver()
        .ok_or_else(|| OrchestratorError::config("event receiver already taken"))?;

    match args.prompt.clone() {
        Some(prompt) => {
            run_generation(&mut orchestrator, &mut events, &mut session, &prompt, &args).await;
            persist(&store, &session).await;
        }
        None => interactive(&mut orchestrator, &mut events, &mut session, &store, &args).await?,
    }

    logging::log_success(ProcessId::current(), "Orchestrator stopped gracefully");
    Ok(())
}

/// Prompt loop over stdin; ends on EOF or Ctrl+C
async fn interactive(
    orchestrator: &mut TerminalOrchestrator,
    events: &mut UnboundedReceiver<GenerationEvent>,
    session: &mut ChatSession,
    store: &Option<JsonSessionStore>,
    args: &Args,
) -> OrchestratorResult<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"you> ").await?;
        stdout.flush().await?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = signal::ctrl_c() => {
                logging::log_shutdown(ProcessId::current(), "Received Ctrl+C signal");
                return Ok(());
            }
        };
        let Some(line) = line else {
            return Ok(());
        };
        let prompt = line.trim();
        if prompt.is_empty() {
            continue;
        }

        run_generation(orchestrator, events, session, prompt, args).await;
        persist(store, session).await;
    }
}

/// Drive one generation while rendering its events; Ctrl+C cancels it
async fn run_generation(
    orchestrator: &mut TerminalOrchestrator,
    events: &mut UnboundedReceiver<GenerationEvent>,
    session: &mut ChatSession,
    prompt: &str,
    args: &Args,
) {
    let token = CancelToken::new();
    let generation = orchestrator.generate(session, prompt, args.request_type, &token);
    tokio::pin!(generation);
    let ctrl_c = signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut signal_armed = true;

    let outcome = loop {
        tokio::select! {
            outcome = &mut generation => break outcome,
            Some(event) = events.recv() => show(&event, args.json_events),
            result = &mut ctrl_c, if signal_armed => {
                signal_armed = false;
                match result {
                    Ok(()) => {
                        process_info!(ProcessId::current(), "🛑 Ctrl+C received, cancelling generation");
                        token.cancel();
                    }
                    Err(err) => logging::log_error(ProcessId::current(), "Signal handling", &err),
                }
            }
        }
    };

    // Events sent just before the generation returned
    while let Ok(event) = events.try_recv() {
        show(&event, args.json_events);
    }

    if let GenerationOutcome::Completed {
        offline, build_offered, ..
    } = outcome
    {
        if offline {
            println!("(this answer was generated offline)");
        }
        if build_offered {
            println!("Run again with --request-type build to generate the files.");
        }
    }
}

fn show(event: &GenerationEvent, json: bool) {
    if json {
        match serde_json::to_string(event) {
            Ok(line) => println!("{line}"),
            Err(err) => logging::log_error(ProcessId::current(), "Event encoding", &err),
        }
    } else if let Some(line) = render_event(event) {
        println!("{line}");
    }
}

async fn persist(store: &Option<JsonSessionStore>, session: &ChatSession) {
    if let Some(store) = store {
        if let Err(err) = store.save(session).await {
            logging::log_error(ProcessId::current(), "Saving chat log", &err);
        }
    }
}
