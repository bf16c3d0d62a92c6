//! # homedeck-domain
//!
//! Pure domain model for the homedeck smart-home dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (simulated lights, locks, thermostats, fans) and the
//!   rules that govern how their state may change
//! - Define the **Action Log** (most-recent-first record of state changes)
//! - Define the **Device Registry** that owns both and enforces the invariants
//! - Provide the default device **Catalog** loaded at startup
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod error;
pub mod id;
pub mod time;

pub mod action_log;
pub mod catalog;
pub mod device;
pub mod registry;
