use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use valuation_lead_api::config::Config;
use valuation_lead_api::api::handlers::{self, AppState};
use valuation_lead_api::integrations::webhook::HttpWebhookTransport;

/// Wizard submissions are a few hundred bytes; anything past this is not a form.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Main entry point for the application.
///
/// This function initializes the application, including:
/// - Logging and tracing.
/// - Configuration loading.
/// - The webhook transport.
/// - HTTP routes and middleware (CORS, rate limiting, body limit).
///
/// It then starts the Axum server.
///
/// # Returns
///
/// * `anyhow::Result<()>` - Ok if the server runs successfully, or an error if initialization fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "valuation_lead_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let transport = HttpWebhookTransport::new(config.webhook_timeout())?;
    tracing::info!(
        "✓ Webhook transport initialized ({}s timeout)",
        config.webhook_timeout_secs
    );

    let cors = match config.cors_allowed_origin.as_deref() {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    };

    let port = config.port;
    let app_state = Arc::new(AppState {
        config,
        transport: Arc::new(transport),
    });

    // Configure rate limiter: 5 requests/second per IP, burst of 10
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(5)
            .burst_size(10)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?,
    );

    let app = handlers::routes(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
                .layer(GovernorLayer {
                    config: governor_conf,
                }),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
