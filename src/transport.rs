//! Gibbs free energy of a single ion transport process.
//!
//! The free energy change for moving an ion from an origin compartment to a
//! destination compartment across a membrane:
//!
//! ```text
//! ΔG = R·T·ln(C_dest / C_origin) + z·F·Vm
//! ```
//!
//! The first term is the chemical (concentration) work, the second the
//! electrical work against the membrane potential. ΔG < 0 means transport is
//! spontaneous in the origin→destination direction.
//!
//! Physiological examples:
//! - Na+ influx at rest (145→15 mM, −70 mV): ΔG ≈ −12.6 kJ/mol (favorable,
//!   drives secondary active transport)
//! - Ca2+ influx (1.8 mM→100 nM, −70 mV): ΔG ≈ −38.8 kJ/mol (steep, why
//!   cells spend ATP keeping cytosolic Ca2+ low)
//!
//! References:
//! - Hille B. Ion Channels of Excitable Membranes, 3rd ed. Sinauer, 2001
//! - Alberts B et al. Molecular Biology of the Cell, 6th ed. Ch 11

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::Serialize;

use crate::constants::{
    DELTA_G_ABS_TOL, DELTA_G_REL_TOL, FARADAY_KJ_PER_V_MOL, GAS_CONSTANT_KJ_PER_MOL_K,
    MEMBRANE_POTENTIAL_LIMIT_V,
};
use crate::error::GibbsError;
use crate::units::{mM_to_M, mV_to_V, TemperatureInput};

/// A validated, immutable ion transport record.
///
/// Holds the physical inputs of one transport process and derives ΔG from
/// them on demand. Comparison and addition operators act on the derived
/// energy, never on raw fields: two records with different gradients but the
/// same ΔG compare equal.
///
/// Construct with [`IonTransport::new`] (SI units) or
/// [`IonTransport::from_mM_mV`] (laboratory units). Both validate up front,
/// so a live record always satisfies the physical invariants and
/// [`IonTransport::delta_g`] is infallible.
#[derive(Debug, Clone, Serialize)]
pub struct IonTransport {
    /// Descriptive name of the transport process.
    name: String,
    /// Ion being transported (e.g. "Na+").
    ion: String,
    /// Ion concentration at origin (M).
    c_origin_M: f64,
    /// Ion concentration at destination (M).
    c_dest_M: f64,
    /// Signed ion valence (e.g. +1 for Na+, +2 for Ca2+).
    z: i32,
    /// Membrane potential (V).
    vm_V: f64,
    /// Absolute temperature (K).
    temperature_K: f64,
}

impl IonTransport {
    /// Create a record from SI-unit inputs (M, V, K).
    ///
    /// Validation runs immediately:
    /// - both concentrations must be > 0
    /// - membrane potential must lie within ±0.3 V
    /// - temperature must be > 0 K
    ///
    /// For the conventional 37 °C default, pass
    /// [`crate::STANDARD_TEMPERATURE_K`].
    pub fn new(
        name: impl Into<String>,
        ion: impl Into<String>,
        c_origin_M: f64,
        c_dest_M: f64,
        z: i32,
        vm_V: f64,
        temperature_K: f64,
    ) -> Result<Self, GibbsError> {
        let record = Self {
            name: name.into(),
            ion: ion.into(),
            c_origin_M,
            c_dest_M,
            z,
            vm_V,
            temperature_K,
        };
        record.validate()?;
        Ok(record)
    }

    /// Create a record from laboratory units (mM, mV, °C/K).
    ///
    /// Concentrations and potential are divided by 1000, the temperature is
    /// resolved through [`TemperatureInput`] (`310.0`, `"37C"`, `"310K"`,
    /// or `TemperatureInput::default()` for body temperature), and the
    /// converted values go through [`IonTransport::new`]. Range validation
    /// therefore applies to the converted SI values: a caller who passes
    /// volts here gets rejected because ×1000 V is far outside ±0.3 V, while
    /// any physiological ±300 mV input lands in range after conversion.
    pub fn from_mM_mV(
        name: impl Into<String>,
        ion: impl Into<String>,
        c_origin_mM: f64,
        c_dest_mM: f64,
        z: i32,
        vm_mV: f64,
        temperature: impl Into<TemperatureInput>,
    ) -> Result<Self, GibbsError> {
        let temperature_K = temperature.into().into_kelvin()?;
        Self::new(
            name,
            ion,
            mM_to_M(c_origin_mM),
            mM_to_M(c_dest_mM),
            z,
            mV_to_V(vm_mV),
            temperature_K,
        )
    }

    fn validate(&self) -> Result<(), GibbsError> {
        if self.c_origin_M <= 0.0 || self.c_dest_M <= 0.0 {
            return Err(GibbsError::InvalidInput(format!(
                "concentrations must be > 0 M, got origin {} M, destination {} M",
                self.c_origin_M, self.c_dest_M
            )));
        }
        if !(-MEMBRANE_POTENTIAL_LIMIT_V..=MEMBRANE_POTENTIAL_LIMIT_V).contains(&self.vm_V) {
            return Err(GibbsError::InvalidInput(format!(
                "membrane potential {} V outside expected ±{} V range (is it in volts?)",
                self.vm_V, MEMBRANE_POTENTIAL_LIMIT_V
            )));
        }
        if self.temperature_K <= 0.0 {
            return Err(GibbsError::InvalidInput(format!(
                "temperature must be > 0 K, got {} K",
                self.temperature_K
            )));
        }
        Ok(())
    }

    /// Gibbs free energy change ΔG (kJ/mol).
    ///
    /// Recomputed on every call; the inputs are immutable and the work is a
    /// single logarithm, so there is nothing worth caching.
    pub fn delta_g(&self) -> f64 {
        GAS_CONSTANT_KJ_PER_MOL_K * self.temperature_K * (self.c_dest_M / self.c_origin_M).ln()
            + f64::from(self.z) * FARADAY_KJ_PER_V_MOL * self.vm_V
    }

    /// Whether transport in the origin→destination direction is spontaneous
    /// (ΔG < 0).
    pub fn is_favorable(&self) -> bool {
        self.delta_g() < 0.0
    }

    /// Nernst equilibrium potential for this gradient (V).
    ///
    /// The membrane potential at which the electrical and chemical driving
    /// forces balance and ΔG is zero:
    ///
    /// ```text
    /// E = -(R·T)/(z·F) · ln(C_dest / C_origin)
    /// ```
    ///
    /// Returns `None` for an uncharged species (z = 0), which has no
    /// electrochemical equilibrium.
    pub fn nernst_potential_V(&self) -> Option<f64> {
        if self.z == 0 {
            return None;
        }
        let zF = f64::from(self.z) * FARADAY_KJ_PER_V_MOL;
        Some(
            -(GAS_CONSTANT_KJ_PER_MOL_K * self.temperature_K / zF)
                * (self.c_dest_M / self.c_origin_M).ln(),
        )
    }

    /// Name of the transport process.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ion label.
    pub fn ion(&self) -> &str {
        &self.ion
    }

    /// Origin concentration (M).
    pub fn c_origin_M(&self) -> f64 {
        self.c_origin_M
    }

    /// Destination concentration (M).
    pub fn c_dest_M(&self) -> f64 {
        self.c_dest_M
    }

    /// Ion valence.
    pub fn charge(&self) -> i32 {
        self.z
    }

    /// Membrane potential (V).
    pub fn vm_V(&self) -> f64 {
        self.vm_V
    }

    /// Absolute temperature (K).
    pub fn temperature_K(&self) -> f64 {
        self.temperature_K
    }
}

/// Combined relative+absolute closeness test on two ΔG values.
fn energies_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= f64::max(DELTA_G_REL_TOL * f64::max(a.abs(), b.abs()), DELTA_G_ABS_TOL)
}

impl PartialEq for IonTransport {
    /// Records are equal iff their ΔG values agree within 1e-9
    /// relative+absolute tolerance. Raw fields are never compared.
    fn eq(&self, other: &Self) -> bool {
        energies_close(self.delta_g(), other.delta_g())
    }
}

impl PartialOrd for IonTransport {
    /// Total order by ΔG: more negative sorts first (more favorable is
    /// "less"). Tolerance equality takes precedence, so `==` and the
    /// relational operators stay mutually consistent; all of `<`, `<=`,
    /// `>`, `>=` derive from this single primitive.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.delta_g().partial_cmp(&other.delta_g())
    }
}

impl Add for &IonTransport {
    type Output = f64;

    /// Net energetics of a coupled process: the sum of both ΔG values
    /// (kJ/mol).
    fn add(self, rhs: &IonTransport) -> f64 {
        self.delta_g() + rhs.delta_g()
    }
}

impl Add<f64> for &IonTransport {
    type Output = f64;

    fn add(self, rhs: f64) -> f64 {
        self.delta_g() + rhs
    }
}

impl Add<&IonTransport> for f64 {
    type Output = f64;

    fn add(self, rhs: &IonTransport) -> f64 {
        self + rhs.delta_g()
    }
}

impl<'a> Sum<&'a IonTransport> for f64 {
    /// Accumulate a collection of records into a net ΔG, so
    /// `records.iter().sum::<f64>()` works like any numeric sum.
    fn sum<I: Iterator<Item = &'a IonTransport>>(iter: I) -> f64 {
        iter.fold(0.0, |acc, record| acc + record)
    }
}

impl fmt::Display for IonTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gibbs Ion Transport ({}: {}, ∆G = {:.2} kJ/mol)",
            self.name,
            self.ion,
            self.delta_g()
        )
    }
}
