use super::IoError;
use crate::drive::DriveGeometry;
use crate::float_types::Real;
use crate::sink::DrawingSink;
use nalgebra::Point2;

use dxf::entities::{self, Entity, EntityType, LwPolyline};
use dxf::enums::AcadVersion;
use dxf::{Drawing, LwPolylineVertex, Point};

/// Writes emitted primitives straight into a DXF [`Drawing`]: the profile as a
/// closed `LWPOLYLINE`, circles as `CIRCLE` entities, all in the XY plane.
pub struct DxfSink {
    drawing: Drawing,
}

impl Default for DxfSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DxfSink {
    pub fn new() -> Self {
        let mut drawing = Drawing::new();
        // LWPOLYLINE needs R14 or newer
        drawing.header.version = AcadVersion::R2000;
        Self { drawing }
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn into_bytes(self) -> Result<Vec<u8>, IoError> {
        let mut buffer = Vec::new();
        self.drawing.save(&mut buffer)?;
        Ok(buffer)
    }
}

impl DrawingSink for DxfSink {
    #[allow(clippy::unnecessary_cast)]
    fn add_closed_polyline(&mut self, points: &[Point2<Real>]) {
        let mut polyline = LwPolyline::default();
        // closure is a flag in DXF, the duplicate end point is dropped
        let body = match points.split_last() {
            Some((last, body)) if points.len() > 1 && Some(last) == points.first() => body,
            _ => points,
        };
        polyline.vertices = body
            .iter()
            .map(|p| LwPolylineVertex {
                x: p.x as f64,
                y: p.y as f64,
                ..Default::default()
            })
            .collect();
        polyline.set_is_closed(true);
        self.drawing
            .add_entity(Entity::new(EntityType::LwPolyline(polyline)));
    }

    #[allow(clippy::unnecessary_cast)]
    fn add_circle(&mut self, center: Point2<Real>, radius: Real) {
        let circle = entities::Circle::new(
            Point::new(center.x as f64, center.y as f64, 0.0),
            radius as f64,
        );
        self.drawing.add_entity(Entity::new(EntityType::Circle(circle)));
    }
}

/// Encodes the drive as DXF bytes.
pub fn to_dxf(geometry: &DriveGeometry) -> Result<Vec<u8>, IoError> {
    let mut sink = DxfSink::new();
    geometry.emit(&mut sink);
    sink.into_bytes()
}
