use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use taskd::{
    classifier::ClassifierClient, config::ServerConfig, rest, store::TaskStore, AppContext,
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "taskd",
    about = "Task tracker backend — REST CRUD API over an in-memory store",
    version
)]
struct Args {
    /// HTTP listen port
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Bind address for the HTTP server (default: 0.0.0.0)
    #[arg(long, env = "TASKD_BIND")]
    bind_address: Option<String>,

    /// Base URL of the priority classification service
    #[arg(long, env = "ML_SERVICE_URL")]
    classifier_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TASKD_LOG")]
    log: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Arc::new(ServerConfig::new(
        args.port,
        args.bind_address,
        args.classifier_url,
        args.log,
    ));

    // Init once — must happen before any tracing calls.
    tracing_subscriber::fmt()
        .with_env_filter(config.log.as_str())
        .compact()
        .init();

    info!(
        port = config.port,
        classifier_url = %config.classifier_url,
        "starting taskd"
    );

    let ctx = Arc::new(AppContext {
        store: Arc::new(TaskStore::new()),
        classifier: Arc::new(ClassifierClient::new(&config.classifier_url)),
        config,
    });

    rest::start_rest_server(ctx).await
}
