use api::{build_app, init_app_state};
use config::{LoggingConfig, RelayConfig};

#[tokio::main]
async fn main() {
    // Load configuration first to get logging settings
    let config = RelayConfig::load_or_env().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });

    init_tracing(&config.logging);

    let app_state = init_app_state(&config).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to initialize Telegram client");
        std::process::exit(1);
    });

    let app = build_app(app_state, &config);

    let bind_address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(address = %bind_address, error = %e, "Failed to bind");
            std::process::exit(1);
        });

    tracing::info!(address = %bind_address, "Server started successfully");
    tracing::info!(
        bot_token_set = config.telegram.bot_token.is_some(),
        chat_id_set = config.telegram.chat_id.is_some(),
        "Telegram credentials"
    );
    if config.telegram.credentials().is_none() {
        tracing::warn!("BOT_TOKEN or TELEGRAM_CHAT_ID missing; submissions will fail with 500");
    }

    tracing::info!("API Endpoints:");
    tracing::info!("  - POST /api/contact (Contact form submission)");
    tracing::info!("  - GET /api/ping (Liveness probe)");
    tracing::info!("  - GET /api/health (Configuration presence)");
    tracing::info!("  - GET /api/openapi.json (OpenAPI document)");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

fn init_tracing(logging_config: &LoggingConfig) {
    let filter = logging_config.filter_directive();

    // Initialize tracing based on the format specified in config
    match logging_config.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .init();
        }
        "compact" => {
            tracing_subscriber::fmt()
                .compact()
                .with_env_filter(filter)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .init();
        }
    }
}
