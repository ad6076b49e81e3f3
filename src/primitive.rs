//! The two drawing primitives the kernel produces.

use crate::float_types::Real;
use nalgebra::Point2;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub center: Point2<Real>,
    pub radius: Real,
}

impl Circle {
    #[inline]
    pub const fn new(center: Point2<Real>, radius: Real) -> Self {
        Self { center, radius }
    }

    /// Circle centered on the mechanism axis.
    #[inline]
    pub fn centered(radius: Real) -> Self {
        Self::new(Point2::origin(), radius)
    }

    /// Largest distance from the origin reached by the circle.
    #[inline]
    pub fn reach(&self) -> Real {
        self.center.coords.norm() + self.radius
    }
}

/// One emitted shape, as recorded by [`RecordingSink`](crate::sink::RecordingSink).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Primitive {
    /// Ordered points; the first point is repeated at the end.
    ClosedPolyline(Vec<Point2<Real>>),
    Circle(Circle),
}
