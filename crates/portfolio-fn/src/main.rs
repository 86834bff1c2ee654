//! Portfolio Contact Functions
//!
//! The one-shot deployment shape: each invocation handles a single logical
//! HTTP request - the same two functions as the hosted serverless variant -
//! then flushes the store and exits. The response is printed to stdout as a
//! `{"status": ..., "body": ...}` envelope.

mod invoke;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use portfolio_core::ports::SharedSecretGuard;
use portfolio_core::Config;
use tokio::io::AsyncReadExt;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "portfolio-fn")]
#[command(author, version, about = "One-shot request functions for the portfolio contact backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    function: Function,
}

#[derive(Subcommand)]
enum Function {
    /// Handle one contact-form submission request
    Contact {
        /// HTTP method of the invoking request
        #[arg(long, default_value = "POST")]
        method: String,

        /// JSON request body; "-" reads it from stdin
        #[arg(long, default_value = "")]
        body: String,
    },

    /// Handle one admin messages request (list or delete)
    Messages {
        /// HTTP method of the invoking request
        #[arg(long, default_value = "GET")]
        method: String,

        /// Credential from the x-api-key header
        #[arg(long)]
        api_key: Option<String>,

        /// Credential from the `key` query parameter
        #[arg(long)]
        key: Option<String>,

        /// `id` query parameter
        #[arg(long)]
        id: Option<i64>,

        /// `delete` query parameter
        #[arg(long)]
        delete: Option<i64>,
    },
}

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run().await {
        error!("Invocation failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let store = portfolio_store::open(&config.store)
        .await
        .context("Failed to open message store")?;
    let guard = SharedSecretGuard::new(config.admin_api_key);

    let invocation = match cli.function {
        Function::Contact { method, body } => {
            let body = resolve_body(&body).await?;
            invoke::contact(store.as_ref(), &method, &body).await
        }
        Function::Messages {
            method,
            api_key,
            key,
            id,
            delete,
        } => {
            // Header credential wins over the query fallback.
            let supplied = api_key.or(key);
            invoke::messages(
                store.as_ref(),
                &guard,
                &method,
                supplied.as_deref(),
                id,
                delete,
            )
            .await
        }
    };

    // One-shot process: flush before answering, nothing survives the exit.
    store.close().await;

    println!(
        "{}",
        serde_json::to_string(&invocation).context("Failed to serialize response envelope")?
    );

    Ok(())
}

async fn resolve_body(body: &str) -> Result<String> {
    if body != "-" {
        return Ok(body.to_string());
    }
    let mut buffer = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buffer)
        .await
        .context("Failed to read request body from stdin")?;
    Ok(buffer)
}
