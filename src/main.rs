use clap::Parser;
use genview::config::ViewerConfig;
use genview::parser::load_file;
use genview::query::{QueryService, DEFAULT_REFERENCE_GENERATION};
use genview::server::{create_app, describe_metrics, AppState};
use genview::{Result, ViewerError};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse a genetic-algorithm run log in the browser", long_about = None)]
struct Args {
    /// GA log file to load
    log_file: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// HTTP port
    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// Generation whose population size bounds the chromosome index
    #[arg(long, default_value_t = DEFAULT_REFERENCE_GENERATION, allow_hyphen_values = true)]
    reference_generation: i64,

    /// Serve Prometheus metrics on this port
    #[arg(long)]
    metrics_port: Option<u16>,
}

impl From<Args> for ViewerConfig {
    fn from(args: Args) -> Self {
        Self {
            log_file: args.log_file,
            host: args.host,
            port: args.port,
            reference_generation: args.reference_generation,
            metrics_port: args.metrics_port,
        }
    }
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ViewerConfig::from(Args::parse());

    if let Err(e) = run(config).await {
        error!("{}", e);
        eprintln!("genview: {}", e);
        process::exit(1);
    }
}

async fn run(config: ViewerConfig) -> Result<()> {
    let addr = config.socket_addr()?;

    info!("Loading run log from {}", config.log_file.display());
    let run_log = load_file(&config.log_file)?;
    info!("Parsed {} generations", run_log.len());

    let service =
        QueryService::with_reference_generation(Arc::new(run_log), config.reference_generation);

    if let Some(metrics_addr) = config.metrics_addr()? {
        PrometheusBuilder::new()
            .with_http_listener(metrics_addr)
            .install()
            .map_err(|e| ViewerError::ConfigError(format!("metrics exporter: {}", e)))?;
        describe_metrics();
        info!("Metrics available on http://{}/metrics", metrics_addr);
    }

    let state = AppState::new(service)?;
    info!(
        "Bounds: max generation {}, max index {}",
        state.bounds.max_generation, state.bounds.max_index
    );

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
