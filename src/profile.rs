//! **Cycloidal lobe profile sampling**
//!
//! The profile is traced by a roller of radius `r_roll` whose center rides on
//! the base trace around a wave generator offset by `e`. For a cavity count `n`:
//! ```text
//! s(θ) = √((r_roll + r_wg)² − (e·sin(nθ))²)
//! l(θ) = e·cos(nθ) + s(θ)                      base trace radius
//! ξ(θ) = atan2(e·n·sin(nθ), s(θ))              contact tangent correction
//! x(θ) = l·sin θ + r_roll·sin(θ + ξ)
//! y(θ) = l·cos θ + r_roll·cos(θ + ξ)
//! ```
//! The curve is sampled at `θᵢ = 2πi/resolution` and closed explicitly by
//! repeating the first point. Straight segments between samples are the output,
//! no smoothing or arc fitting is applied.

use crate::config::RadicandPolicy;
use crate::errors::DriveError;
use crate::float_types::{Real, TAU};
use crate::params::DerivedParameters;
use nalgebra::Point2;

/// Sample count used when the caller has no preference.
pub const DEFAULT_RESOLUTION: usize = 500;
/// Fewest samples that still enclose an area.
pub const MIN_RESOLUTION: usize = 3;

/// `s` and `l` of the base trace at one angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trace {
    /// `s(θ)`, the square-root term.
    pub support: Real,
    /// `l(θ)`, distance of the roller center from the axis.
    pub radius: Real,
}

/// Evaluates the base trace at `theta`.
///
/// Shared by the profile sampler and the roller layout. Only the sampler adds
/// the `ξ` contact offset on top of this.
pub fn trace_radius(
    params: &DerivedParameters,
    theta: Real,
    policy: RadicandPolicy,
) -> Result<Trace, DriveError> {
    let n = params.cavity_count as Real;
    let e = params.eccentricity;
    let (sin_n, cos_n) = (n * theta).sin_cos();

    let hyp = params.contact_radius();
    let leg = e * sin_n;
    let radicand = hyp * hyp - leg * leg;
    let support = if radicand >= 0.0 {
        radicand.sqrt()
    } else {
        match policy {
            RadicandPolicy::Reject => {
                return Err(DriveError::NegativeRadicand { radicand, theta });
            },
            RadicandPolicy::ClampToZero => {
                tracing::warn!(radicand, theta, "negative trace radicand clamped to zero");
                0.0
            },
        }
    };

    Ok(Trace {
        support,
        radius: e * cos_n + support,
    })
}

/// Closed, ordered sequence of profile points. `points[0] == points[last]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileCurve {
    pub points: Vec<Point2<Real>>,
}

impl ProfileCurve {
    /// Number of points including the closing duplicate.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Exact (bitwise) closure check.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Consecutive point pairs, one per straight segment.
    pub fn segments(&self) -> impl Iterator<Item = (Point2<Real>, Point2<Real>)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Largest distance of any sample from the axis.
    pub fn max_radius(&self) -> Real {
        self.points
            .iter()
            .map(|p| p.coords.norm())
            .fold(0.0, Real::max)
    }
}

/// Samples the profile, rejecting negative radicands.
pub fn sample_profile(
    params: &DerivedParameters,
    rollers_count: usize,
    resolution: usize,
) -> Result<ProfileCurve, DriveError> {
    sample_profile_with(params, rollers_count, resolution, RadicandPolicy::Reject)
}

pub fn sample_profile_with(
    params: &DerivedParameters,
    rollers_count: usize,
    resolution: usize,
    policy: RadicandPolicy,
) -> Result<ProfileCurve, DriveError> {
    if resolution < MIN_RESOLUTION {
        return Err(DriveError::ResolutionTooLow {
            resolution,
            min: MIN_RESOLUTION,
        });
    }
    check_roller_count(params, rollers_count)?;

    let n = params.cavity_count as Real;
    let e = params.eccentricity;
    let r_roll = params.roller_radius;

    let mut points = Vec::with_capacity(resolution + 1);
    for i in 0..resolution {
        let theta = TAU * (i as Real) / (resolution as Real);
        let trace = trace_radius(params, theta, policy)?;
        let xi = (e * n * (n * theta).sin()).atan2(trace.support);

        let (sin_t, cos_t) = theta.sin_cos();
        let (sin_c, cos_c) = (theta + xi).sin_cos();
        points.push(Point2::new(
            trace.radius * sin_t + r_roll * sin_c,
            trace.radius * cos_t + r_roll * cos_c,
        ));
    }
    // close it
    points.push(points[0]);

    Ok(ProfileCurve { points })
}

pub(crate) fn check_roller_count(
    params: &DerivedParameters,
    rollers_count: usize,
) -> Result<(), DriveError> {
    if rollers_count.checked_add(1) != Some(params.cavity_count) {
        return Err(DriveError::RollerCountMismatch {
            rollers_count,
            cavity_count: params.cavity_count,
        });
    }
    Ok(())
}
