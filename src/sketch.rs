//! `geo` view of the emitted geometry, for area queries and further 2D processing.

use crate::float_types::{Real, TAU};
use crate::sink::DrawingSink;
use geo::{Geometry, GeometryCollection, LineString, Polygon as GeoPolygon};
use nalgebra::Point2;

/// Segments used to tessellate each circle unless configured otherwise.
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 64;

/// Collects emitted primitives as closed `geo` polygons. Circles are
/// discretized with `segments` uniformly spaced vertices.
#[derive(Clone, Debug)]
pub struct SketchSink {
    pub geom: GeometryCollection<Real>,
    segments: usize,
}

impl Default for SketchSink {
    fn default() -> Self {
        Self::new(DEFAULT_CIRCLE_SEGMENTS)
    }
}

impl SketchSink {
    /// `segments` is raised to 3 if smaller.
    pub fn new(segments: usize) -> Self {
        Self {
            geom: GeometryCollection::default(),
            segments: segments.max(3),
        }
    }

    pub fn into_geometry(self) -> GeometryCollection<Real> {
        self.geom
    }

    /// Polygons in emission order.
    pub fn polygons(&self) -> impl Iterator<Item = &GeoPolygon<Real>> + '_ {
        self.geom.iter().filter_map(|g| match g {
            Geometry::Polygon(p) => Some(p),
            _ => None,
        })
    }
}

impl DrawingSink for SketchSink {
    fn add_closed_polyline(&mut self, points: &[Point2<Real>]) {
        let coords: Vec<(Real, Real)> = points.iter().map(|p| (p.x, p.y)).collect();
        self.geom
            .0
            .push(Geometry::Polygon(GeoPolygon::new(LineString::from(coords), vec![])));
    }

    fn add_circle(&mut self, center: Point2<Real>, radius: Real) {
        let mut coords: Vec<(Real, Real)> = (0..self.segments)
            .map(|i| {
                let theta = TAU * (i as Real) / (self.segments as Real);
                (center.x + radius * theta.cos(), center.y + radius * theta.sin())
            })
            .collect();
        coords.push(coords[0]);
        self.geom
            .0
            .push(Geometry::Polygon(GeoPolygon::new(LineString::from(coords), vec![])));
    }
}
