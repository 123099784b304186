use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Van-der-Waals radius per atom-type name.
pub type VdwRadiusTable = HashMap<String, f64>;

/// Length unit radii are reported in. GROMACS parameter files are in nanometers.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    #[serde(alias = "angstroms", alias = "A")]
    Angstrom,
    #[serde(alias = "nanometers", alias = "nm")]
    Nanometer,
}

impl LengthUnit {
    pub fn per_nanometer(self) -> f64 {
        match self {
            LengthUnit::Angstrom => 10.0,
            LengthUnit::Nanometer => 1.0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Angstrom => "Å",
            LengthUnit::Nanometer => "nm",
        }
    }
}

/// Half of the Lennard-Jones sigma, `(C12 / C6)^(1/6)`, converted from nanometers.
///
/// A vanishing coefficient gives a radius of exactly zero. Coefficients of
/// opposite sign have no real sigma and give `None`.
pub fn radius_from_lj(c6: f64, c12: f64, unit: LengthUnit) -> Option<f64> {
    if c6 == 0.0 || c12 == 0.0 {
        return Some(0.0);
    }
    let sigma = (c12 / c6).powf(1.0 / 6.0) * unit.per_nanometer();
    sigma.is_finite().then_some(sigma / 2.0)
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LengthUnit::Angstrom => "angstrom",
            LengthUnit::Nanometer => "nanometer",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown length unit '{0}'. Expected 'angstrom' or 'nanometer'.")]
pub struct ParseLengthUnitError(String);

impl FromStr for LengthUnit {
    type Err = ParseLengthUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "A" || trimmed == "Å" {
            return Ok(LengthUnit::Angstrom);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "angstrom" | "angstroms" => Ok(LengthUnit::Angstrom),
            "nanometer" | "nanometers" | "nm" => Ok(LengthUnit::Nanometer),
            _ => Err(ParseLengthUnitError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn radius_is_half_sigma_in_angstrom() {
        let (c6, c12): (f64, f64) = (0.0026173456, 2.6331e-6);
        let expected = 0.5 * (c12 / c6).powf(1.0 / 6.0) * 10.0;
        let radius = radius_from_lj(c6, c12, LengthUnit::Angstrom).unwrap();
        assert!((radius - expected).abs() < TOLERANCE);
        assert!(radius > 1.5 && radius < 1.7);
    }

    #[test]
    fn nanometer_radius_is_a_tenth_of_angstrom_radius() {
        let (c6, c12): (f64, f64) = (0.0023406244, 2.923e-6);
        let a = radius_from_lj(c6, c12, LengthUnit::Angstrom).unwrap();
        let nm = radius_from_lj(c6, c12, LengthUnit::Nanometer).unwrap();
        assert!((a / 10.0 - nm).abs() < TOLERANCE);
    }

    #[test]
    fn zero_coefficient_gives_zero_radius() {
        assert_eq!(radius_from_lj(0.0, 2.6331e-6, LengthUnit::Angstrom), Some(0.0));
        assert_eq!(radius_from_lj(0.0026, 0.0, LengthUnit::Angstrom), Some(0.0));
        assert_eq!(radius_from_lj(0.0, 0.0, LengthUnit::Nanometer), Some(0.0));
        assert_eq!(radius_from_lj(-0.0026, 0.0, LengthUnit::Angstrom), Some(0.0));
    }

    #[test]
    fn opposite_sign_coefficients_have_no_radius() {
        assert_eq!(radius_from_lj(-0.0026173456, 2.6331e-6, LengthUnit::Angstrom), None);
        assert_eq!(radius_from_lj(0.0026173456, -2.6331e-6, LengthUnit::Nanometer), None);
        assert!(radius_from_lj(-0.0026173456, -2.6331e-6, LengthUnit::Angstrom).is_some());
    }

    #[test]
    fn length_unit_parses_names_and_symbols() {
        assert_eq!("angstrom".parse(), Ok(LengthUnit::Angstrom));
        assert_eq!("Å".parse(), Ok(LengthUnit::Angstrom));
        assert_eq!("nm".parse(), Ok(LengthUnit::Nanometer));
        assert_eq!("Nanometers".parse(), Ok(LengthUnit::Nanometer));
        assert!("bohr".parse::<LengthUnit>().is_err());
        assert_eq!(LengthUnit::default(), LengthUnit::Angstrom);
    }
}
