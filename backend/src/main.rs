use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod handlers {
    pub mod contact_handlers;
    pub mod contact_dtos;
}
mod utils {
    pub mod forwarder;
    pub mod latency;
}
mod config {
    pub mod settings;
}

use handlers::contact_handlers;
use config::settings::Config;
use utils::forwarder::{ContactSink, LogForwarder, SmtpForwarder};
use utils::latency::ForwardLatency;

/// Honeypot delay until the first real SMTP send has been timed.
const SMTP_DECOY_FLOOR: Duration = Duration::from_millis(1500);

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    forwarder: Arc<dyn ContactSink>,
    latency: ForwardLatency,
}

impl AppState {
    pub fn new(forwarder: Arc<dyn ContactSink>, decoy_floor: Duration) -> Self {
        Self {
            forwarder,
            latency: ForwardLatency::new(decoy_floor),
        }
    }
}

/// Builds the API router. When `static_dir` is given, every path that is not
/// an API route serves the built frontend, falling back to `index.html`.
pub fn build_router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let mut app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact));

    if let Some(dir) = static_dir {
        let index = dir.join("index.html");
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app.layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    let (forwarder, decoy_floor): (Arc<dyn ContactSink>, Duration) = match &config.smtp {
        Some(smtp) => {
            tracing::info!("Forwarding contact submissions to {} via {}", smtp.to, smtp.host);
            let forwarder: Arc<dyn ContactSink> = Arc::new(
                SmtpForwarder::new(smtp).context("failed to set up SMTP forwarding")?
            );
            (forwarder, SMTP_DECOY_FLOOR)
        }
        None => {
            tracing::info!("CONTACT_TO not set, contact submissions will only be logged");
            let forwarder: Arc<dyn ContactSink> = Arc::new(LogForwarder);
            (forwarder, Duration::ZERO)
        }
    };

    let state = Arc::new(AppState::new(forwarder, decoy_floor));
    let app = build_router(state, Some(config.static_dir.as_path()));

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")?;

    Ok(())
}
