//! E-Voque marketing website
//!
//! Main application entry point

use tracing::info;

use evoque_web::{
    config::Settings,
    handlers,
    i18n::DictionaryStore,
    state::AppState,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting E-Voque website...");

    // Load dictionary bundles once at startup
    info!("Loading dictionaries...");
    let mut dictionaries = DictionaryStore::new(&settings.i18n);
    dictionaries.load().await?;
    for locale in dictionaries.stats().locales {
        info!(
            locale = %locale.code,
            keys = locale.key_count,
            "Dictionary ready"
        );
    }

    let bind_addr = settings.bind_addr();
    let state = AppState::new(settings, dictionaries);
    let app = handlers::router(state);

    info!("Listening on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("E-Voque website has been shut down.");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
