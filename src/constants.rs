//! Physical constants for membrane transport energetics.
//!
//! Constants are expressed directly in the units the ΔG formula consumes
//! (kJ, mol, V, K) so no conversion factors appear at the call sites.
//!
//! References:
//! - CODATA 2018 recommended values (R, F)
//! - Hille B. Ion Channels of Excitable Membranes, 3rd ed. Sinauer, 2001
//!   (physiological membrane potential range)

/// Gas constant R, kJ/(mol·K).
pub const GAS_CONSTANT_KJ_PER_MOL_K: f64 = 8.314e-3;

/// Faraday constant F, kJ/(V·mol).
pub const FARADAY_KJ_PER_V_MOL: f64 = 96.5;

/// Conventional mammalian body temperature (37 °C), K.
///
/// Used as the default temperature for [`crate::units::TemperatureInput`].
pub const STANDARD_TEMPERATURE_K: f64 = 310.0;

/// Offset between the Celsius and Kelvin scales.
pub const CELSIUS_OFFSET_K: f64 = 273.15;

/// Sanity bound on membrane potential magnitude, V.
///
/// Physiological membrane potentials stay well within ±300 mV; a value
/// outside this range almost always means the caller passed millivolts
/// where volts were expected.
pub const MEMBRANE_POTENTIAL_LIMIT_V: f64 = 0.3;

/// Relative tolerance when comparing two ΔG values for equality.
pub const DELTA_G_REL_TOL: f64 = 1e-9;

/// Absolute tolerance when comparing two ΔG values for equality, kJ/mol.
pub const DELTA_G_ABS_TOL: f64 = 1e-9;
