//! WebServer entry point
//!
//! Serves the generation and file endpoints until Ctrl+C.

use clap::Parser;
use shared::{ProcessId, logging, process_info};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::signal;

use webserver::{RealFileMaterializer, ServerConfig, WebServer, WebServerError, WebServerResult};

/// Command line arguments (each also readable from the environment)
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "HTTP endpoints for prompt classification and file generation")]
struct Args {
    /// Port for HTTP server
    #[arg(long, env = "LIVECODER_PORT", default_value = "3000")]
    port: u16,

    /// Interface to bind
    #[arg(long, env = "LIVECODER_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Directory generated files are written to
    #[arg(long, env = "LIVECODER_OUTPUT_DIR", default_value = "./generated")]
    output_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LIVECODER_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Maximum number of session contexts kept in memory
    #[arg(long, env = "LIVECODER_MAX_SESSIONS", default_value = "256")]
    max_sessions: usize,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    ProcessId::init_webserver();
    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(ProcessId::current(), "webserver");

    let bind_address: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| WebServerError::config(format!("Invalid bind address: {e}")))?;

    let config = ServerConfig {
        bind_address,
        output_dir: args.output_dir.clone(),
        max_sessions: args.max_sessions,
    };
    process_info!(
        ProcessId::current(),
        "🔧 Config: bind={}, output={}, max_sessions={}",
        config.bind_address,
        config.output_dir.display(),
        config.max_sessions
    );

    let materializer = RealFileMaterializer::with_output_dir(args.output_dir);
    let webserver = WebServer::new(config, materializer);

    let shutdown = async {
        match signal::ctrl_c().await {
            Ok(()) => logging::log_shutdown(ProcessId::current(), "Received Ctrl+C signal"),
            Err(err) => logging::log_error(ProcessId::current(), "Signal handling", &err),
        }
    };

    webserver.run(shutdown).await?;

    logging::log_success(ProcessId::current(), "WebServer stopped gracefully");
    Ok(())
}
