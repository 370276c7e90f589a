//! Error types for transport record construction.
//!
//! All failures surface synchronously at the offending call; a record either
//! comes into existence fully validated or not at all.

use thiserror::Error;

/// Errors raised while constructing an [`crate::IonTransport`] record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GibbsError {
    /// A physical input violated its validity range (non-positive
    /// concentration, membrane potential outside ±0.3 V, or non-positive
    /// temperature). The message names the violated constraint.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A temperature string did not match the `<number>C` / `<number>K`
    /// grammar accepted by the convenience constructor.
    #[error("malformed temperature: {0}")]
    MalformedTemperature(String),
}
