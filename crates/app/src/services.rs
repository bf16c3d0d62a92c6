//! Application services — use-case implementations.

pub mod registry_service;
