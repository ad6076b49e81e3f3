//! Roller center placement.
//!
//! Roller `i` sits at `θᵢ = 2πi/N` on the base trace, center
//! `(l(θᵢ)·sin θᵢ, l(θᵢ)·cos θᵢ)`. Unlike the profile there is no `ξ` offset:
//! the centers lie on the trace itself, not on the contact curve.

use crate::config::RadicandPolicy;
use crate::errors::DriveError;
use crate::float_types::{Real, TAU};
use crate::params::DerivedParameters;
use crate::primitive::Circle;
use crate::profile::{check_roller_count, trace_radius};
use nalgebra::Point2;

/// `rollers_count` circles of radius `roller_radius`, in increasing angle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollerLayout {
    pub rollers: Vec<Circle>,
}

impl RollerLayout {
    #[inline]
    pub fn len(&self) -> usize {
        self.rollers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rollers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Circle> {
        self.rollers.iter()
    }

    /// Angular position of each center, measured from +Y towards +X.
    pub fn angles(&self) -> Vec<Real> {
        self.rollers
            .iter()
            .map(|c| c.center.x.atan2(c.center.y).rem_euclid(TAU))
            .collect()
    }
}

/// Angle of roller `index` out of `rollers_count`.
#[inline]
pub fn roller_angle(index: usize, rollers_count: usize) -> Real {
    TAU * (index as Real) / (rollers_count as Real)
}

/// Center of roller `index`, independent of any other roller.
pub fn roller_center(
    params: &DerivedParameters,
    index: usize,
    rollers_count: usize,
    policy: RadicandPolicy,
) -> Result<Point2<Real>, DriveError> {
    let theta = roller_angle(index, rollers_count);
    let trace = trace_radius(params, theta, policy)?;
    let (sin_t, cos_t) = theta.sin_cos();
    Ok(Point2::new(trace.radius * sin_t, trace.radius * cos_t))
}

/// Places the rollers, rejecting negative radicands.
pub fn place_rollers(
    params: &DerivedParameters,
    rollers_count: usize,
) -> Result<RollerLayout, DriveError> {
    place_rollers_with(params, rollers_count, RadicandPolicy::Reject)
}

pub fn place_rollers_with(
    params: &DerivedParameters,
    rollers_count: usize,
    policy: RadicandPolicy,
) -> Result<RollerLayout, DriveError> {
    check_roller_count(params, rollers_count)?;

    let rollers = (0..rollers_count)
        .map(|i| {
            roller_center(params, i, rollers_count, policy)
                .map(|center| Circle::new(center, params.roller_radius))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RollerLayout { rollers })
}
