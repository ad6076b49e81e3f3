//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use strainwave::{RawInputs, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Difference `b − a` of two angles, wrapped into `[0, 2π)`.
pub fn angle_step(a: Real, b: Real) -> Real {
    (b - a).rem_euclid(strainwave::float_types::TAU)
}

/// A spread of valid input sets, from 3 to 40 rollers, with the outer diameter
/// chosen comfortably above the minimum so every set derives under the strict policy.
pub fn input_grid() -> Vec<RawInputs> {
    let mut grid = Vec::new();
    for &roller_diameter in &[1.0, 2.5, 5.0, 8.0] {
        for rollers_count in (3..=40).step_by(3) {
            let probe = strainwave::params::derive_with_policy(
                &RawInputs::new(roller_diameter, rollers_count, 1.0, 0.0),
                strainwave::config::RadiusPolicy::Clamp,
            )
            .expect("clamped derivation always succeeds");
            let outer = 2.0 * probe.min_cycloid_radius * 1.25;
            for &shaft in &[0.0, roller_diameter] {
                grid.push(RawInputs::new(roller_diameter, rollers_count, outer, shaft));
            }
        }
    }
    grid
}
