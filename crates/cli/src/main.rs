use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use sonarr_engine::{Dispatcher, Request};
use sonarr_types::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Manage Sonarr configuration as infrastructure.
#[derive(Parser, Debug)]
#[command(name = "terraform-provider-sonarr", version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the provider, resource and data-source schemas as JSON.
    Schema {
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Serve host requests: one JSON request per stdin line, one JSON response per stdout line.
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    match Args::parse().command {
        Command::Schema { output } => print_schemas(output),
        Command::Serve => serve().await,
    }
}

/// Logs go to stderr so stdout carries only protocol lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_schemas(output: Option<PathBuf>) -> Result<()> {
    let schemas = Dispatcher::new().schemas();
    let rendered = serde_json::to_string_pretty(&schemas).context("serialize schemas")?;
    match output {
        Some(path) => std::fs::write(&path, rendered).with_context(|| format!("write {}", path.display()))?,
        None => println!("{rendered}"),
    }
    Ok(())
}

async fn serve() -> Result<()> {
    let mut dispatcher = Dispatcher::new();
    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, cancelling in-flight requests");
            shutdown.cancel();
        }
    });

    info!(
        resources = dispatcher.resource_names().count(),
        data_sources = dispatcher.data_source_names().count(),
        "serving"
    );
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    while let Some(line) = lines.next_line().await.context("read request")? {
        if line.trim().is_empty() {
            continue;
        }
        if cancel.is_cancelled() {
            break;
        }
        let response = respond(&mut dispatcher, &Context::with_token(cancel.child_token()), &line).await;
        let mut rendered = serde_json::to_vec(&response).context("serialize response")?;
        rendered.push(b'\n');
        stdout.write_all(&rendered).await.context("write response")?;
        stdout.flush().await.context("flush response")?;
    }
    debug!("stdin closed, shutting down");
    Ok(())
}

/// Answer one protocol line. Malformed lines get an error diagnostic, not a crash.
async fn respond(dispatcher: &mut Dispatcher, ctx: &Context, line: &str) -> Value {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(err) => {
            warn!(error = %err, "malformed request");
            return protocol_error(format!("Malformed request: {err}"));
        }
    };
    match dispatcher.handle(ctx, request).await {
        Ok(value) => value,
        Err(err) => protocol_error(format!("Unable to encode response: {err}")),
    }
}

fn protocol_error(detail: String) -> Value {
    json!({
        "state": null,
        "diagnostics": [{"severity": "error", "summary": "Protocol Error", "detail": detail}],
    })
}
