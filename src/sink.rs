//! Hand-off of computed geometry to a drawing backend.

use crate::float_types::{Real, tolerance};
use crate::primitive::{Circle, Primitive};
use crate::profile::ProfileCurve;
use crate::rings::RingGeometry;
use crate::rollers::RollerLayout;
use nalgebra::Point2;

/// Anything that can draw a closed polyline and a circle.
pub trait DrawingSink {
    /// `points` is already closed: its last point equals its first.
    fn add_closed_polyline(&mut self, points: &[Point2<Real>]);
    fn add_circle(&mut self, center: Point2<Real>, radius: Real);
}

impl<T: DrawingSink + ?Sized> DrawingSink for &mut T {
    fn add_closed_polyline(&mut self, points: &[Point2<Real>]) {
        (**self).add_closed_polyline(points)
    }

    fn add_circle(&mut self, center: Point2<Real>, radius: Real) {
        (**self).add_circle(center, radius)
    }
}

/// Forwards the geometry to `sink`: profile, rollers in angular order, outer
/// ring, inner ring, wave generator, bore. Circles whose radius does not exceed
/// [`tolerance`] (a zero bore in particular) are skipped.
///
/// Returns the number of primitives emitted.
pub fn emit<K: DrawingSink + ?Sized>(
    profile: &ProfileCurve,
    rollers: &RollerLayout,
    rings: &RingGeometry,
    sink: &mut K,
) -> usize {
    sink.add_closed_polyline(&profile.points);
    let mut emitted = 1;

    let circles = rollers
        .iter()
        .chain([&rings.outer, &rings.inner, &rings.wave_generator, &rings.bore]);
    for circle in circles {
        if circle.radius > tolerance() {
            sink.add_circle(circle.center, circle.radius);
            emitted += 1;
        }
    }

    tracing::trace!(emitted, profile_points = profile.len(), "geometry emitted");
    emitted
}

/// Keeps every emitted primitive, in emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    pub primitives: Vec<Primitive>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = &Circle> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Circle(c) => Some(c),
            Primitive::ClosedPolyline(_) => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &[Point2<Real>]> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::ClosedPolyline(points) => Some(points.as_slice()),
            Primitive::Circle(_) => None,
        })
    }
}

impl DrawingSink for RecordingSink {
    fn add_closed_polyline(&mut self, points: &[Point2<Real>]) {
        self.primitives.push(Primitive::ClosedPolyline(points.to_vec()));
    }

    fn add_circle(&mut self, center: Point2<Real>, radius: Real) {
        self.primitives.push(Primitive::Circle(Circle::new(center, radius)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{RawInputs, derive};
    use crate::profile::sample_profile;
    use crate::rings::compute_rings;
    use crate::rollers::place_rollers;

    #[test]
    fn emission_order_and_bore_skip() {
        let inputs = RawInputs { input_shaft_diameter: 0.0, ..RawInputs::default() };
        let p = derive(&inputs).unwrap();
        let profile = sample_profile(&p, 12, 50).unwrap();
        let rollers = place_rollers(&p, 12).unwrap();
        let rings = compute_rings(&p, inputs.input_shaft_diameter).unwrap();

        let mut sink = RecordingSink::new();
        let emitted = emit(&profile, &rollers, &rings, &mut sink);
        // profile + 12 rollers + outer + inner + wave generator, no bore
        assert_eq!(emitted, 16);
        assert_eq!(sink.primitives.len(), 16);
        assert_eq!(sink.primitives[0], Primitive::ClosedPolyline(profile.points.clone()));
        for (i, roller) in rollers.iter().enumerate() {
            assert_eq!(sink.primitives[1 + i], Primitive::Circle(*roller));
        }
        assert_eq!(sink.primitives[13], Primitive::Circle(rings.outer));
        assert_eq!(sink.primitives[14], Primitive::Circle(rings.inner));
        assert_eq!(sink.primitives[15], Primitive::Circle(rings.wave_generator));
        assert!(sink.circles().all(|c| c.radius > 0.0));
    }
}
