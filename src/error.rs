//! Errors shared by the vehicle-side components.

use thiserror::Error;

/// Failures the vehicle side can produce.
///
/// The factory's unknown-tag rejection is the only defined failure;
/// callers propagate it unmodified with `?`.
#[derive(Error, Debug, PartialEq)]
pub enum VehicleError {
    /// The factory was handed a tag outside the known set.
    #[error("unknown vehicle type {0:?}")]
    UnknownType(String),
}
