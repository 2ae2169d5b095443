use crate::domain::AuthApi;
use crate::frameworks::config::PortalConfig;
use crate::interface_adapters::clients::AuthClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub fn build_state(config: &PortalConfig) -> AppState {
    let auth = match &config.auth_api_url {
        Some(base_url) => {
            tracing::debug!(auth_api_url = %base_url, "auth client configured.");
            Some(Arc::new(AuthClient::new(base_url.clone())) as Arc<dyn AuthApi>)
        }
        None => {
            tracing::warn!("AUTH_API_URL is not set; login and signup will be refused.");
            None
        }
    };
    AppState::new(auth)
}

// Serves the portal on an already-bound listener.
pub async fn run(listener: TcpListener, config: PortalConfig) -> Result<(), std::io::Error> {
    let state = Arc::new(build_state(&config));
    let app = routes::app(state);

    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "listening");
    }
    axum::serve(listener, app).await
}

pub async fn serve() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = match PortalConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "invalid configuration");
            return; // Abort startup on bad configuration.
        }
    };

    // Bind TCP listener with error handling.
    let addr = config.addr();
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%addr, %error, "failed to bind");
            return; // Abort startup on bind failure.
        }
    };

    // Serve app and report errors rather than panicking.
    if let Err(error) = run(listener, config).await {
        tracing::error!(%error, "server error");
    }
}
