//! Shared application state for axum handlers.

use std::sync::Arc;

use homedeck_app::services::registry_service::RegistryService;

use crate::dashboard::DashboardSettings;

/// Application state shared across all axum handlers.
///
/// Cloning only bumps the `Arc` counters.
#[derive(Clone)]
pub struct AppState {
    /// The one registry service every handler drives.
    pub registry: Arc<RegistryService>,
    /// Presentation-only settings for the dashboard pages.
    pub dashboard: Arc<DashboardSettings>,
}

impl AppState {
    /// Create a new application state from its parts.
    #[must_use]
    pub fn new(registry: RegistryService, dashboard: DashboardSettings) -> Self {
        Self::from_arcs(Arc::new(registry), Arc::new(dashboard))
    }

    /// Create a new application state from pre-wrapped `Arc`s.
    #[must_use]
    pub fn from_arcs(registry: Arc<RegistryService>, dashboard: Arc<DashboardSettings>) -> Self {
        Self {
            registry,
            dashboard,
        }
    }
}
