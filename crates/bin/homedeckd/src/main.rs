//! # homedeckd — homedeck daemon
//!
//! Composition root that wires the registry, services and HTTP adapter
//! together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing` output
//! - Build the device registry from the default catalog
//! - Construct the application service and hand it to the axum router
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use homedeck_adapter_http_axum::state::AppState;
use homedeck_app::services::registry_service::RegistryService;
use homedeck_domain::catalog;
use homedeck_domain::error::HomeDeckError;
use homedeck_domain::registry::DeviceRegistry;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let registry = build_registry(&config)?;
    tracing::info!(
        devices = registry.devices().len(),
        history = registry.history().len(),
        user = registry.user(),
        "registry ready"
    );

    let state = AppState::new(RegistryService::new(registry), config.dashboard_settings());
    let app = homedeck_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("homedeckd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("homedeckd stopped");
    Ok(())
}

fn build_registry(config: &Config) -> Result<DeviceRegistry, HomeDeckError> {
    let user = &config.household.user;
    let mut builder = DeviceRegistry::builder()
        .devices(catalog::default_devices()?)
        .user(user)
        .policy(config.log_policy());
    if config.history.seed {
        builder = builder.history(catalog::seed_history(user));
    }
    builder.build()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use homedeck_domain::id::DeviceId;

    #[test]
    fn should_build_registry_with_seed_history_by_default() {
        let registry = build_registry(&Config::default()).unwrap();
        assert_eq!(registry.devices().len(), 6);
        assert_eq!(registry.history().len(), 3);
        assert_eq!(registry.user(), "Amrit");
    }

    #[test]
    fn should_build_empty_history_when_seed_disabled() {
        let mut config = Config::default();
        config.history.seed = false;
        config.history.log_value_changes = true;

        let mut registry = build_registry(&config).unwrap();
        assert!(registry.history().is_empty());

        registry.set_value(&DeviceId::from("fan1"), 2.0).unwrap();
        assert_eq!(registry.history().len(), 1);
    }
}
