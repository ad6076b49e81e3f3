//! Invariants checked across a sweep of valid drive inputs.

mod support;

use strainwave::{
    DriveGeometry, GeneratorConfig, RawInputs,
    config::RadiusPolicy,
    derive,
    float_types::Real,
    params::derive_with_policy,
    rollers::roller_angle,
};

#[test]
fn derived_counts_and_radii_are_exact() {
    for inputs in support::input_grid() {
        let p = derive(&inputs).unwrap();
        assert_eq!(p.cavity_count, inputs.rollers_count + 1);
        assert_eq!(p.roller_radius, inputs.roller_diameter / 2.0);
        assert!(p.wave_generator_radius > 0.0, "{inputs:?}");
        assert!(p.contact_radius() > p.eccentricity, "{inputs:?}");
    }
}

#[test]
fn profile_is_closed_for_every_resolution() {
    let inputs = RawInputs::default();
    for resolution in [3, 4, 7, 100, 500, 1001] {
        let config = GeneratorConfig::default().with_resolution(resolution);
        let geometry = DriveGeometry::generate(&inputs, &config).unwrap();
        let points = &geometry.profile.points;
        assert_eq!(points.len(), resolution + 1);
        assert_eq!(points[0], points[points.len() - 1]);
    }
}

#[test]
fn every_grid_point_generates() {
    for inputs in support::input_grid() {
        let geometry = DriveGeometry::generate(&inputs, &GeneratorConfig::default().with_resolution(120))
            .unwrap_or_else(|err| panic!("{inputs:?}: {err}"));
        assert!(geometry.profile.is_closed());
        assert_eq!(geometry.rollers.len(), inputs.rollers_count);
    }
}

#[test]
fn rollers_are_evenly_spaced() {
    for inputs in support::input_grid() {
        let geometry = strainwave::generate(&inputs).unwrap();
        let angles = geometry.rollers.angles();
        let expected = strainwave::float_types::TAU / inputs.rollers_count as Real;
        for (i, window) in angles.windows(2).enumerate() {
            let step = support::angle_step(window[0], window[1]);
            assert!(
                support::approx_eq(step, expected, 1e-9),
                "{inputs:?}: step {i} is {step}, expected {expected}"
            );
        }
        for (i, angle) in angles.iter().enumerate() {
            let theta = roller_angle(i, inputs.rollers_count);
            assert!(support::angle_step(theta, *angle).min(support::angle_step(*angle, theta)) < 1e-9);
        }
    }
}

#[test]
fn separator_ring_ordering() {
    for inputs in support::input_grid() {
        let geometry = strainwave::generate(&inputs).unwrap();
        let rings = geometry.rings;
        assert!(rings.inner.radius > 0.0, "{inputs:?}");
        assert!(rings.inner.radius < rings.outer.radius, "{inputs:?}");
        assert!(support::approx_eq(rings.separator_width(), 2.2 * geometry.params.eccentricity, 1e-9));
    }
}

#[test]
fn clamp_policy_never_degenerates() {
    for roller_diameter in [0.5, 5.0, 50.0] {
        for rollers_count in [3, 4, 12, 60, 100] {
            for outer in [1.0, 60.0, 500.0] {
                let inputs = RawInputs::new(roller_diameter, rollers_count, outer, 0.0);
                let config = GeneratorConfig::default()
                    .with_radius_policy(RadiusPolicy::Clamp)
                    .with_resolution(60);
                let params = derive_with_policy(&inputs, RadiusPolicy::Clamp).unwrap();
                assert!(params.cycloid_radius >= params.min_cycloid_radius);
                let geometry = DriveGeometry::generate(&inputs, &config).unwrap();
                assert!(geometry.rings.inner.radius > 0.0);
            }
        }
    }
}

#[test]
fn recomputation_matches_after_unrelated_run() {
    let first = strainwave::generate(&RawInputs::default()).unwrap();
    let _other = strainwave::generate(&RawInputs::new(8.0, 30, 200.0, 12.0)).unwrap();
    let again = strainwave::generate(&RawInputs::default()).unwrap();
    assert_eq!(first, again);
}
