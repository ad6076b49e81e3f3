//! Generator policies and sampling settings.

use crate::profile::DEFAULT_RESOLUTION;

/// What the parameter deriver does when the requested cycloid outer diameter
/// is too small to fit the rollers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RadiusPolicy {
    /// Use the requested radius as-is, report
    /// [`RollersDoNotFit`](crate::errors::DriveError::RollersDoNotFit) when it is
    /// below the minimum.
    #[default]
    Strict,
    /// Substitute the minimum cycloid radius, logging a warning.
    Clamp,
}

/// What the trace computation does when `(r_roll + r_wg)² − (e·sin(nθ))²`
/// goes negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RadicandPolicy {
    /// Fail with [`NegativeRadicand`](crate::errors::DriveError::NegativeRadicand).
    #[default]
    Reject,
    /// Treat the radicand as zero and log a warning for each affected angle.
    ClampToZero,
}

/// Settings for a full pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Number of profile sample angles in `[0, 2π)`.
    pub resolution: usize,
    pub radius_policy: RadiusPolicy,
    pub radicand_policy: RadicandPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            radius_policy: RadiusPolicy::default(),
            radicand_policy: RadicandPolicy::default(),
        }
    }
}

impl GeneratorConfig {
    pub const fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub const fn with_radius_policy(mut self, policy: RadiusPolicy) -> Self {
        self.radius_policy = policy;
        self
    }

    pub const fn with_radicand_policy(mut self, policy: RadicandPolicy) -> Self {
        self.radicand_policy = policy;
        self
    }
}
