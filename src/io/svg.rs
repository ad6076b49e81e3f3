use crate::drive::DriveGeometry;
use crate::float_types::Real;
use crate::primitive::Primitive;
use crate::sink::{DrawingSink, RecordingSink};
use nalgebra::Point2;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle as SvgCircle, Group, Path};

/// Margin around the drawing, as a fraction of its bounding radius.
const MARGIN: Real = 0.05;

/// Buffers emitted primitives and renders them as one SVG document.
///
/// Coordinates are written in the canonical length unit. The drawing is
/// wrapped in a `scale(1,-1)` group so +Y points up as in the sketch plane.
#[derive(Debug, Clone, Default)]
pub struct SvgSink {
    recorded: RecordingSink,
}

impl SvgSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the document with a square view box of half-width `extent`.
    #[allow(clippy::unnecessary_cast)]
    pub fn into_document(self, extent: Real) -> Document {
        let half = (extent * (1.0 + MARGIN)) as f32;
        let stroke = (extent / 400.0).max(Real::EPSILON) as f32;

        let mut group = Group::new()
            .set("transform", "scale(1,-1)")
            .set("fill", "none")
            .set("stroke", "black")
            .set("stroke-width", stroke);

        for primitive in self.recorded.primitives {
            group = match primitive {
                Primitive::ClosedPolyline(points) => group.add(polyline_path(&points)),
                Primitive::Circle(circle) => group.add(
                    SvgCircle::new()
                        .set("cx", circle.center.x as f32)
                        .set("cy", circle.center.y as f32)
                        .set("r", circle.radius as f32),
                ),
            };
        }

        Document::new()
            .set("viewBox", (-half, -half, 2.0 * half, 2.0 * half))
            .add(group)
    }
}

#[allow(clippy::unnecessary_cast)]
fn polyline_path(points: &[Point2<Real>]) -> Path {
    let mut data = Data::new();
    if let Some((first, rest)) = points.split_first() {
        data = data.move_to((first.x as f32, first.y as f32));
        // the closing duplicate is expressed by `close()`
        let body = rest.strip_suffix(&[*first]).unwrap_or(rest);
        for p in body {
            data = data.line_to((p.x as f32, p.y as f32));
        }
        data = data.close();
    }
    Path::new().set("d", data)
}

impl DrawingSink for SvgSink {
    fn add_closed_polyline(&mut self, points: &[Point2<Real>]) {
        self.recorded.add_closed_polyline(points);
    }

    fn add_circle(&mut self, center: Point2<Real>, radius: Real) {
        self.recorded.add_circle(center, radius);
    }
}

/// Renders the drive as an SVG string.
pub fn to_svg(geometry: &DriveGeometry) -> String {
    let mut sink = SvgSink::new();
    geometry.emit(&mut sink);
    sink.into_document(geometry.bounding_radius()).to_string()
}
