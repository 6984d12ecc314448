use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::info;

use showroom::{server, ModelStore, Predictor};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the trained model artifact
    #[arg(short, long, default_value = "vehicle_model.json")]
    model: PathBuf,

    /// Address to serve the prediction form on
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    // A missing or malformed artifact is fatal here; per-request failures
    // are handled by the server.
    let store = ModelStore::load(&args.model)
        .with_context(|| format!("failed to load model artifact {}", args.model.display()))?;
    info!(
        "model '{}' ready: {} classes, budget range {:?}",
        store.name(),
        store.num_classes(),
        store.budget_range()
    );

    let predictor = Arc::new(Predictor::new(Arc::new(store)));
    let app = server::app(predictor);

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    info!("serving prediction form on http://{}", args.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
