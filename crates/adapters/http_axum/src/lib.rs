//! # homedeck-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript**: an overview of device cards, a statistics page with
//!   the action log, and a details page per device
//! - Serve a small **JSON API** over the same registry
//!   (`/api/devices`, `/api/log`)
//! - Map HTTP requests into [`RegistryService`](homedeck_app::services::registry_service::RegistryService)
//!   calls (driving adapter) and results into HTML or JSON responses
//!
//! ## No-JS dashboard approach
//! - Every page is rendered server-side as complete HTML.
//! - Toggles and sliders are `<form>` elements that POST back to the server
//!   and redirect (PRG pattern).
//! - Pages use `<meta http-equiv="refresh">` to pick up changes.
//!
//! ## Dependency rule
//! Depends on `homedeck-app` (services) and `homedeck-domain` (types used in
//! request/response mapping). Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
