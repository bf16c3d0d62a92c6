//! Common error types used across the workspace.
//!
//! Each failure family gets its own typed error, folded into
//! [`HomeDeckError`] through `#[from]` conversions.

use crate::device::{DeviceKind, DeviceState};
use crate::id::DeviceId;

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum HomeDeckError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("unsupported operation")]
    Unsupported(#[from] UnsupportedError),
}

/// A domain invariant was violated.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("device id must not be empty")]
    EmptyDeviceId,

    #[error("name must not be empty")]
    EmptyName,

    #[error("user must not be empty")]
    EmptyUser,

    #[error("state {state} does not fit a {kind} device")]
    StateMismatch { kind: DeviceKind, state: DeviceState },

    #[error("value {0} is not a finite number")]
    NonFiniteValue(f64),

    #[error("device id {0} is registered twice")]
    DuplicateDevice(DeviceId),
}

/// The looked-up record does not exist.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The operation is not defined for this kind of device.
#[derive(Debug, thiserror::Error)]
#[error("{operation} is not supported by {kind} devices")]
pub struct UnsupportedError {
    pub operation: &'static str,
    pub kind: DeviceKind,
}
