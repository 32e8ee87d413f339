use clap::Parser;
use fake_vllm_server::api::{self, build_routes};
use fake_vllm_server::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Host to bind the server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 9000)]
    port: u16,

    /// Default maximum tokens used when a request sends an explicit null
    #[arg(long, default_value_t = 100)]
    max_tokens: u32,

    /// Tokens per second per request (accepted for CLI compatibility, unused)
    #[arg(long, default_value_t = 100)]
    speed: u32,

    /// Model name reported by the server
    #[arg(long, default_value = "fake_model_name")]
    model_name: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let state = Arc::new(AppState::new(args.model_name, args.max_tokens, args.speed));

    let app = build_routes(state)
        .layer(CorsLayer::permissive())
        .layer(axum::middleware::from_fn(api::request_logger));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .expect("invalid listen address");
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
