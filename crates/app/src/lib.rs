//! # homedeck-app
//!
//! Application layer — use-cases over the device registry.
//!
//! ## Responsibilities
//! - Own the single [`DeviceRegistry`](homedeck_domain::registry::DeviceRegistry)
//!   behind a service that adapters can share across handlers
//! - Expose read and mutate use-cases: list, get, toggle, set value, log
//! - Trace every state-changing call
//!
//! ## Dependency rule
//! Depends on `homedeck-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod services;
