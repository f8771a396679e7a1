use anyhow::{Context, Result};
use clap::Parser;
use faqdex_core::{SearchEngine, StopwordFilter, Tokenizer, UnicodeSegmenter};
use faqdex_server::{build_app, notes::NotesDirSource};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Directory of FAQ note files
    #[arg(long, default_value = "./notes")]
    notes: String,
    /// Newline-delimited stopword list
    #[arg(long, default_value = "./stopwords.txt")]
    stopwords: String,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Seconds between scheduled index rebuilds
    #[arg(long, default_value_t = 86400)]
    rebuild_interval: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    // No stopword list means no tokenizer; refuse to start.
    let stopwords = StopwordFilter::from_path(&args.stopwords)
        .context("stopword list is required at startup")?;
    let tokenizer = Arc::new(Tokenizer::new(Box::new(UnicodeSegmenter), stopwords));
    let source = NotesDirSource::new(&args.notes);
    let engine = Arc::new(SearchEngine::new(tokenizer, Box::new(source)));

    if let Err(err) = engine.rebuild() {
        tracing::error!(error = %format!("{err:#}"), "initial build failed; serving empty index");
    }

    spawn_rebuild_schedule(engine.clone(), Duration::from_secs(args.rebuild_interval.max(1)));

    let app = build_app(engine, std::env::var("ADMIN_TOKEN").ok());
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Periodically rebuilds the index off the request path. Failures keep the
/// previously published generation serving.
fn spawn_rebuild_schedule(engine: Arc<SearchEngine>, period: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        // the first tick completes immediately; the initial build already ran
        ticker.tick().await;
        loop {
            ticker.tick().await;
            tracing::info!("scheduled rebuild starting");
            let engine = engine.clone();
            match tokio::task::spawn_blocking(move || engine.rebuild()).await {
                Ok(Ok(())) => tracing::info!("scheduled rebuild complete"),
                Ok(Err(err)) => {
                    tracing::error!(error = %format!("{err:#}"), "scheduled rebuild failed; keeping previous generation");
                }
                Err(err) => tracing::error!(error = %err, "scheduled rebuild task failed"),
            }
        }
    });
}
