//! Separator ring, wave generator and shaft bore circles.

use crate::errors::{DriveError, non_negative_length};
use crate::float_types::Real;
use crate::params::DerivedParameters;
use crate::primitive::Circle;
use nalgebra::Point2;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingGeometry {
    /// Outer separator boundary, on the axis.
    pub outer: Circle,
    /// Inner separator boundary, on the axis.
    pub inner: Circle,
    /// Wave generator cam, offset by the eccentricity along +Y.
    pub wave_generator: Circle,
    /// Input shaft bore. Radius zero means no bore.
    pub bore: Circle,
}

impl RingGeometry {
    /// Radial width of the separator annulus.
    #[inline]
    pub fn separator_width(&self) -> Real {
        self.outer.radius - self.inner.radius
    }

    #[inline]
    pub fn has_bore(&self) -> bool {
        self.bore.radius > 0.0
    }
}

pub fn compute_rings(
    params: &DerivedParameters,
    input_shaft_diameter: Real,
) -> Result<RingGeometry, DriveError> {
    let shaft = non_negative_length("input_shaft_diameter", input_shaft_diameter)?;

    let sep_width = 2.2 * params.eccentricity;
    let sep_middle_radius = params.wave_generator_radius + params.roller_radius;
    let outer_radius = sep_middle_radius + sep_width / 2.0;
    let inner_radius = sep_middle_radius - sep_width / 2.0;
    if inner_radius <= 0.0 {
        return Err(DriveError::NonPositiveInnerRing {
            radius: inner_radius,
        });
    }

    Ok(RingGeometry {
        outer: Circle::centered(outer_radius),
        inner: Circle::centered(inner_radius),
        wave_generator: Circle::new(
            Point2::new(0.0, params.eccentricity),
            params.wave_generator_radius,
        ),
        bore: Circle::centered(shaft / 2.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::params::{RawInputs, derive};

    #[test]
    fn nominal_rings() {
        let p = derive(&RawInputs::default()).unwrap();
        let rings = compute_rings(&p, 5.0).unwrap();
        assert!((rings.outer.radius - 26.6).abs() < 1e-9);
        assert!((rings.inner.radius - 24.4).abs() < 1e-9);
        assert!((rings.separator_width() - 2.2).abs() < 1e-9);
        assert_eq!(rings.outer.center, Point2::origin());
        assert_eq!(rings.wave_generator.center, Point2::new(0.0, 1.0));
        assert_eq!(rings.wave_generator.radius, p.wave_generator_radius);
        assert_eq!(rings.bore, Circle::centered(2.5));
        assert!(rings.has_bore());
    }

    #[test]
    fn zero_shaft_means_no_bore() {
        let p = derive(&RawInputs::default()).unwrap();
        let rings = compute_rings(&p, 0.0).unwrap();
        assert_eq!(rings.bore.radius, 0.0);
        assert!(!rings.has_bore());
    }

    #[test]
    fn negative_shaft_is_invalid() {
        let p = derive(&RawInputs::default()).unwrap();
        assert_eq!(compute_rings(&p, -1.0).unwrap_err().kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn collapsed_inner_ring() {
        let p = DerivedParameters {
            eccentricity: 2.0,
            cavity_count: 4,
            min_cycloid_radius: 0.0,
            cycloid_radius: 0.0,
            wave_generator_radius: 1.0,
            roller_radius: 0.5,
        };
        match compute_rings(&p, 0.0).unwrap_err() {
            DriveError::NonPositiveInnerRing { radius } => assert!((radius + 0.7).abs() < 1e-9),
            other => panic!("unexpected {other:?}"),
        }
    }
}
