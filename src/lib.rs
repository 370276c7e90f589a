//! Gibbs free energy of ion transport across biological membranes.
//!
//! This library computes the Gibbs free energy change (ΔG) for moving a
//! charged ion across a membrane, given the concentration gradient, ion
//! valence, membrane potential, and temperature:
//!
//! ```text
//! ΔG = R·T·ln(C_dest / C_origin) + z·F·Vm    [kJ/mol]
//! ```
//!
//! A negative ΔG means transport in the origin→destination direction is
//! energetically favorable (spontaneous); positive means it requires an
//! energy source such as ATP hydrolysis or a coupled gradient.
//!
//! Records are validated at construction and immutable afterwards, so every
//! operation on a live [`IonTransport`] is pure and infallible.
//!
//! # Example
//!
//! ```
//! use gibbs_it::IonTransport;
//!
//! let na = IonTransport::from_mM_mV("Na influx", "Na+", 145.0, 15.0, 1, -70.0, "37C")?;
//! assert!(na.is_favorable());
//! println!("{na}"); // Gibbs Ion Transport (Na influx: Na+, ∆G = -12.60 kJ/mol)
//! # Ok::<(), gibbs_it::GibbsError>(())
//! ```

// Allow non-snake-case for unit suffixes in field names (M, mM, V, K, etc.)
// This follows the project convention of including units in names.
#![allow(non_snake_case)]

pub mod constants;
pub mod error;
pub mod transport;
pub mod units;

pub use constants::{
    FARADAY_KJ_PER_V_MOL, GAS_CONSTANT_KJ_PER_MOL_K, MEMBRANE_POTENTIAL_LIMIT_V,
    STANDARD_TEMPERATURE_K,
};
pub use error::GibbsError;
pub use transport::IonTransport;
pub use units::TemperatureInput;
