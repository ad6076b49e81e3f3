//! Raw drive inputs and the derived scalars every other stage consumes.
//!
//! With roller diameter `d`, roller count `N` and requested outer diameter `D`:
//! ```text
//! e      = 0.2·d                          eccentricity
//! n      = N + 1                          cavity count
//! r_min  = 1.1·d / sin(π/n) + 2·e         smallest cycloid radius that fits N rollers
//! r_cy   = max(D/2, r_min)                cycloid radius
//! r_wg   = r_cy − 2·e − d                 wave generator radius
//! r_roll = d/2                            roller radius
//! ```

use crate::config::RadiusPolicy;
use crate::errors::{DriveError, non_negative_length, positive_length};
use crate::float_types::{MM, PI, Real};
use std::fmt;

/// Fewest rollers a closed profile can be built around.
pub const MIN_ROLLERS: usize = 3;

/// The four physical inputs, all lengths in one consistent unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawInputs {
    pub roller_diameter: Real,
    pub rollers_count: usize,
    pub cycloid_outer_diameter: Real,
    /// Zero means no bore.
    pub input_shaft_diameter: Real,
}

impl Default for RawInputs {
    /// 5 mm rollers, 12 of them, 60 mm cycloid, 5 mm input shaft.
    fn default() -> Self {
        Self {
            roller_diameter: 5.0 * MM,
            rollers_count: 12,
            cycloid_outer_diameter: 60.0 * MM,
            input_shaft_diameter: 5.0 * MM,
        }
    }
}

impl RawInputs {
    pub const fn new(
        roller_diameter: Real,
        rollers_count: usize,
        cycloid_outer_diameter: Real,
        input_shaft_diameter: Real,
    ) -> Self {
        Self {
            roller_diameter,
            rollers_count,
            cycloid_outer_diameter,
            input_shaft_diameter,
        }
    }

    /// Returns a copy with every length multiplied by `factor`, e.g.
    /// `inputs.scaled(INCH)` to convert inch values into millimeters.
    pub fn scaled(&self, factor: Real) -> Self {
        Self {
            roller_diameter: self.roller_diameter * factor,
            rollers_count: self.rollers_count,
            cycloid_outer_diameter: self.cycloid_outer_diameter * factor,
            input_shaft_diameter: self.input_shaft_diameter * factor,
        }
    }

    /// Range checks on the raw values, without deriving anything.
    pub fn validate(&self) -> Result<(), DriveError> {
        positive_length("roller_diameter", self.roller_diameter)?;
        if self.rollers_count < MIN_ROLLERS {
            return Err(DriveError::TooFewRollers {
                count: self.rollers_count,
                min: MIN_ROLLERS,
            });
        }
        positive_length("cycloid_outer_diameter", self.cycloid_outer_diameter)?;
        non_negative_length("input_shaft_diameter", self.input_shaft_diameter)?;
        Ok(())
    }
}

/// Scalars derived once from [`RawInputs`].
///
/// Fields are public so callers (and tests) can describe a mechanism directly;
/// values built that way bypass [`derive`] and are re-checked by the samplers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedParameters {
    pub eccentricity: Real,
    pub cavity_count: usize,
    pub min_cycloid_radius: Real,
    pub cycloid_radius: Real,
    pub wave_generator_radius: Real,
    pub roller_radius: Real,
}

impl DerivedParameters {
    /// `r_roll + r_wg`, the hypotenuse of the trace radicand.
    #[inline]
    pub fn contact_radius(&self) -> Real {
        self.roller_radius + self.wave_generator_radius
    }
}

impl fmt::Display for DerivedParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Eccentricity (mm):          {:.3}", self.eccentricity / MM)?;
        writeln!(f, "Number of Cavities:         {}", self.cavity_count)?;
        writeln!(f, "Min Cycloid Radius (mm):    {:.3}", self.min_cycloid_radius / MM)?;
        writeln!(f, "Cycloid Radius (mm):        {:.3}", self.cycloid_radius / MM)?;
        writeln!(f, "Wave Generator Radius (mm): {:.3}", self.wave_generator_radius / MM)?;
        write!(f, "Roller Radius (mm):         {:.3}", self.roller_radius / MM)
    }
}

/// Derives the parameters with the default [`RadiusPolicy::Strict`].
pub fn derive(inputs: &RawInputs) -> Result<DerivedParameters, DriveError> {
    derive_with_policy(inputs, RadiusPolicy::default())
}

pub fn derive_with_policy(
    inputs: &RawInputs,
    policy: RadiusPolicy,
) -> Result<DerivedParameters, DriveError> {
    inputs.validate()?;

    let roller_diameter = inputs.roller_diameter;
    let eccentricity = 0.2 * roller_diameter;
    let cavity_count = inputs
        .rollers_count
        .checked_add(1)
        .ok_or(DriveError::TooManyRollers {
            count: inputs.rollers_count,
        })?;
    let min_cycloid_radius =
        (1.1 * roller_diameter) / (PI / cavity_count as Real).sin() + 2.0 * eccentricity;

    let requested_radius = inputs.cycloid_outer_diameter / 2.0;
    let cycloid_radius = match policy {
        RadiusPolicy::Strict => requested_radius,
        RadiusPolicy::Clamp => {
            if requested_radius < min_cycloid_radius {
                tracing::warn!(
                    requested_radius,
                    min_cycloid_radius,
                    "cycloid outer diameter too small for the rollers, using the minimum radius"
                );
            }
            requested_radius.max(min_cycloid_radius)
        },
    };

    let wave_generator_radius = cycloid_radius - 2.0 * eccentricity - roller_diameter;
    if wave_generator_radius <= 0.0 {
        return Err(DriveError::NonPositiveWaveGenerator {
            radius: wave_generator_radius,
        });
    }
    if cycloid_radius < min_cycloid_radius {
        return Err(DriveError::RollersDoNotFit {
            requested_radius,
            minimum_radius: min_cycloid_radius,
        });
    }

    let params = DerivedParameters {
        eccentricity,
        cavity_count,
        min_cycloid_radius,
        cycloid_radius,
        wave_generator_radius,
        roller_radius: roller_diameter / 2.0,
    };
    tracing::debug!(?params, "derived drive parameters");
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn nominal_values() {
        let p = derive(&RawInputs::default()).unwrap();
        assert!((p.eccentricity - 1.0).abs() < 1e-12);
        assert_eq!(p.cavity_count, 13);
        assert_eq!(p.roller_radius, 2.5);
        assert_eq!(p.cycloid_radius, 30.0);
        assert!((p.wave_generator_radius - 23.0).abs() < 1e-12);
        assert!(p.min_cycloid_radius < p.cycloid_radius);
    }

    #[test]
    fn rejects_malformed_inputs() {
        let base = RawInputs::default();
        let cases = [
            RawInputs { roller_diameter: 0.0, ..base },
            RawInputs { roller_diameter: -1.0, ..base },
            RawInputs { rollers_count: 2, ..base },
            RawInputs { cycloid_outer_diameter: 0.0, ..base },
            RawInputs { input_shaft_diameter: -0.1, ..base },
            RawInputs { roller_diameter: Real::NAN, ..base },
        ];
        for inputs in cases {
            let err = derive(&inputs).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "{inputs:?} -> {err}");
        }
    }

    #[test]
    fn cavity_count_overflow_is_rejected() {
        let inputs = RawInputs::new(5.0, usize::MAX, 60.0, 5.0);
        let err = derive(&inputs).unwrap_err();
        assert_eq!(err, DriveError::TooManyRollers { count: usize::MAX });
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        let err = derive_with_policy(&inputs, RadiusPolicy::Clamp).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn zero_shaft_is_accepted() {
        let inputs = RawInputs { input_shaft_diameter: 0.0, ..RawInputs::default() };
        assert!(derive(&inputs).is_ok());
    }

    #[test]
    fn oversized_rollers_degenerate() {
        let inputs = RawInputs::new(50.0, 12, 60.0, 5.0);
        let err = derive(&inputs).unwrap_err();
        assert!(matches!(err, DriveError::NonPositiveWaveGenerator { radius } if radius < 0.0));
        assert_eq!(err.kind(), ErrorKind::DegenerateGeometry);
    }

    #[test]
    fn strict_policy_reports_rollers_that_do_not_fit() {
        // r_wg = 12 − 2 − 5 > 0 but r_min ≈ 25
        let inputs = RawInputs::new(5.0, 12, 24.0, 0.0);
        let err = derive(&inputs).unwrap_err();
        match err {
            DriveError::RollersDoNotFit { requested_radius, minimum_radius } => {
                assert_eq!(requested_radius, 12.0);
                assert!(minimum_radius > requested_radius);
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn clamp_policy_substitutes_minimum_radius() {
        let inputs = RawInputs::new(50.0, 12, 60.0, 5.0);
        let p = derive_with_policy(&inputs, RadiusPolicy::Clamp).unwrap();
        assert_eq!(p.cycloid_radius, p.min_cycloid_radius);
        assert!(p.wave_generator_radius > 0.0);
    }

    #[test]
    fn scaled_converts_units() {
        let inch = RawInputs::new(0.25, 10, 3.0, 0.0).scaled(crate::float_types::INCH);
        assert!((inch.roller_diameter - 6.35).abs() < 1e-12);
        assert_eq!(inch.rollers_count, 10);
        assert!((inch.cycloid_outer_diameter - 76.2).abs() < 1e-12);
    }

    #[test]
    fn display_lists_values_in_mm() {
        let text = derive(&RawInputs::default()).unwrap().to_string();
        assert!(text.contains("Eccentricity (mm):          1.000"), "{text}");
        assert!(text.contains("Number of Cavities:         13"), "{text}");
        assert!(text.contains("Roller Radius (mm):         2.500"), "{text}");
    }
}
