//! Unit conversions for the convenience constructor.
//!
//! The primary constructor works in SI units (M, V, K). Laboratory values
//! are usually quoted in mM and mV with temperature in °C, so this module
//! provides the conversions and the temperature input grammar:
//! a bare number is kelvin, a string is `<number>C` or `<number>K`
//! (case-insensitive, surrounding whitespace ignored).

use crate::constants::{CELSIUS_OFFSET_K, STANDARD_TEMPERATURE_K};
use crate::error::GibbsError;

/// Convert millimolar to molar.
pub fn mM_to_M(c_mM: f64) -> f64 {
    c_mM / 1000.0
}

/// Convert millivolts to volts.
pub fn mV_to_V(vm_mV: f64) -> f64 {
    vm_mV / 1000.0
}

/// Temperature argument accepted by [`crate::IonTransport::from_mM_mV`].
///
/// Converts from either a bare kelvin value or a suffixed string:
///
/// ```
/// use gibbs_it::TemperatureInput;
///
/// assert_eq!(TemperatureInput::from(310.0).into_kelvin().unwrap(), 310.0);
/// assert_eq!(TemperatureInput::from("37C").into_kelvin().unwrap(), 310.15);
/// assert_eq!(TemperatureInput::from(" 310k ").into_kelvin().unwrap(), 310.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum TemperatureInput {
    /// Absolute temperature in kelvin.
    Kelvin(f64),
    /// Textual temperature, `<number>C` or `<number>K`.
    Text(String),
}

impl TemperatureInput {
    /// Resolve to kelvin, parsing the textual form if needed.
    ///
    /// Fails with [`GibbsError::MalformedTemperature`] when a string lacks
    /// the `C`/`K` suffix or its numeric portion does not parse. Range
    /// validation (T > 0) is not done here; that belongs to record
    /// construction.
    pub fn into_kelvin(self) -> Result<f64, GibbsError> {
        match self {
            TemperatureInput::Kelvin(t_K) => Ok(t_K),
            TemperatureInput::Text(s) => parse_temperature_K(&s),
        }
    }
}

impl Default for TemperatureInput {
    /// Body temperature, 310 K.
    fn default() -> Self {
        TemperatureInput::Kelvin(STANDARD_TEMPERATURE_K)
    }
}

impl From<f64> for TemperatureInput {
    fn from(t_K: f64) -> Self {
        TemperatureInput::Kelvin(t_K)
    }
}

impl From<&str> for TemperatureInput {
    fn from(s: &str) -> Self {
        TemperatureInput::Text(s.to_owned())
    }
}

impl From<String> for TemperatureInput {
    fn from(s: String) -> Self {
        TemperatureInput::Text(s)
    }
}

/// Parse `"37C"` / `"310K"` (case-insensitive, whitespace-trimmed) to kelvin.
fn parse_temperature_K(raw: &str) -> Result<f64, GibbsError> {
    let trimmed = raw.trim();
    let upper = trimmed.to_ascii_uppercase();

    let (number, celsius) = match upper.strip_suffix('C') {
        Some(head) => (head, true),
        None => match upper.strip_suffix('K') {
            Some(head) => (head, false),
            None => {
                return Err(GibbsError::MalformedTemperature(format!(
                    "temperature string must end with 'C' or 'K', got {raw:?}"
                )));
            }
        },
    };

    let value: f64 = number.trim().parse().map_err(|_| {
        GibbsError::MalformedTemperature(format!(
            "could not parse numeric part of temperature {raw:?}"
        ))
    })?;

    Ok(if celsius { value + CELSIUS_OFFSET_K } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concentration_and_potential_conversion() {
        assert_eq!(mM_to_M(145.0), 0.145);
        assert_eq!(mV_to_V(-70.0), -0.07);
    }

    #[test]
    fn test_celsius_string_parses_to_kelvin() {
        let t = TemperatureInput::from("37C").into_kelvin().unwrap();
        assert!((t - 310.15).abs() < 1e-12, "37C should be 310.15 K, got {}", t);
    }

    #[test]
    fn test_kelvin_string_and_float_agree() {
        let from_text = TemperatureInput::from("310K").into_kelvin().unwrap();
        let from_float = TemperatureInput::from(310.0).into_kelvin().unwrap();
        assert_eq!(from_text, from_float);
    }

    #[test]
    fn test_case_and_whitespace_are_ignored() {
        let t = TemperatureInput::from("  37c ").into_kelvin().unwrap();
        assert!((t - 310.15).abs() < 1e-12);
        let t = TemperatureInput::from("310k").into_kelvin().unwrap();
        assert_eq!(t, 310.0);
    }

    #[test]
    fn test_missing_suffix_is_rejected() {
        for bad in ["37", "abc", "", "37F"] {
            let err = TemperatureInput::from(bad).into_kelvin().unwrap_err();
            assert!(
                matches!(err, GibbsError::MalformedTemperature(_)),
                "{:?} should be rejected as malformed",
                bad
            );
        }
    }

    #[test]
    fn test_unparseable_number_is_rejected() {
        let err = TemperatureInput::from("warmC").into_kelvin().unwrap_err();
        assert!(matches!(err, GibbsError::MalformedTemperature(_)));
    }

    #[test]
    fn test_default_is_body_temperature() {
        assert_eq!(TemperatureInput::default().into_kelvin().unwrap(), 310.0);
    }
}
