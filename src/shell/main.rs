use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use traces::modules::traces::adapters::outbound::timer_ledger_in_memory::InMemoryTimerLedger;
use traces::modules::traces::adapters::outbound::trace_store_in_memory::InMemoryTraceStore;
use traces::shared::infrastructure::identity::in_memory::InMemoryIdentity;
use traces::shell::config::{Config, load_seed_users};
use traces::shell::http::router;
use traces::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let seed_users = match &config.users_file {
        Some(path) => load_seed_users(path)?,
        None => {
            tracing::warn!("TRACES_USERS_FILE is not set, nobody can authenticate");
            Vec::new()
        }
    };
    tracing::info!(users = seed_users.len(), "users seeded");
    let identity = seed_users
        .into_iter()
        .map(|seed| seed.into_user())
        .fold(InMemoryIdentity::new(), |identity, (user, token)| {
            identity.with_user(user, token)
        });

    // In-memory deps for now
    let state = AppState::new(
        Arc::new(InMemoryTraceStore::new()),
        Arc::new(InMemoryTimerLedger::new()),
        Arc::new(identity),
    );

    let app = router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("HTTP endpoint: http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
