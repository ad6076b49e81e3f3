//! Full pipeline: raw inputs to emitted geometry.

use crate::config::GeneratorConfig;
use crate::errors::DriveError;
use crate::float_types::Real;
use crate::params::{DerivedParameters, RawInputs, derive_with_policy};
use crate::profile::{ProfileCurve, sample_profile_with};
use crate::rings::{RingGeometry, compute_rings};
use crate::rollers::{RollerLayout, place_rollers_with};
use crate::sink::{DrawingSink, emit};

#[cfg(feature = "parallel")]
use rayon::join;

/// Everything computed for one set of inputs. Rebuilt from scratch on every
/// input change.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriveGeometry {
    pub inputs: RawInputs,
    pub params: DerivedParameters,
    pub profile: ProfileCurve,
    pub rollers: RollerLayout,
    pub rings: RingGeometry,
}

impl DriveGeometry {
    /// Runs derivation, then the profile, roller and ring stages.
    ///
    /// With the `parallel` feature the three stages run through `rayon::join`;
    /// the result is identical to the serial path.
    pub fn generate(inputs: &RawInputs, config: &GeneratorConfig) -> Result<Self, DriveError> {
        let params = derive_with_policy(inputs, config.radius_policy)?;
        let rollers_count = inputs.rollers_count;

        let profile_stage =
            || sample_profile_with(&params, rollers_count, config.resolution, config.radicand_policy);
        let roller_stage = || place_rollers_with(&params, rollers_count, config.radicand_policy);
        let ring_stage = || compute_rings(&params, inputs.input_shaft_diameter);

        #[cfg(not(feature = "parallel"))]
        let (profile, rollers, rings) = (profile_stage(), roller_stage(), ring_stage());

        #[cfg(feature = "parallel")]
        let (profile, (rollers, rings)) = join(profile_stage, || join(roller_stage, ring_stage));

        Ok(Self {
            inputs: *inputs,
            params,
            profile: profile?,
            rollers: rollers?,
            rings: rings?,
        })
    }

    /// Forwards the geometry to `sink` in emission order, see [`emit`].
    pub fn emit<K: DrawingSink + ?Sized>(&self, sink: &mut K) -> usize {
        emit(&self.profile, &self.rollers, &self.rings, sink)
    }

    /// Largest distance from the axis reached by any emitted primitive.
    pub fn bounding_radius(&self) -> Real {
        let rings = [
            self.rings.outer,
            self.rings.inner,
            self.rings.wave_generator,
            self.rings.bore,
        ];
        self.rollers
            .iter()
            .chain(rings.iter())
            .map(|c| c.reach())
            .fold(self.profile.max_radius(), Real::max)
    }
}

/// Convenience for [`DriveGeometry::generate`] with the default configuration.
pub fn generate(inputs: &RawInputs) -> Result<DriveGeometry, DriveError> {
    DriveGeometry::generate(inputs, &GeneratorConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::sink::RecordingSink;

    #[test]
    fn nominal_pipeline() {
        let geometry = generate(&RawInputs::default()).unwrap();
        assert_eq!(geometry.profile.len(), 501);
        assert_eq!(geometry.rollers.len(), 12);
        assert_eq!(geometry.bounding_radius(), 29.0);

        let mut sink = RecordingSink::new();
        assert_eq!(geometry.emit(&mut sink), 1 + 12 + 4);
    }

    #[test]
    fn stage_errors_propagate() {
        let config = GeneratorConfig::default().with_resolution(2);
        let err = DriveGeometry::generate(&RawInputs::default(), &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
