//! Kernel errors

use crate::float_types::Real;

/// The two families of failure the kernel reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A raw input (or call argument) is malformed or out of range.
    InvalidInput,
    /// The inputs are well formed but describe a mechanism that cannot exist.
    DegenerateGeometry,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidInput => f.write_str("InvalidInput"),
            ErrorKind::DegenerateGeometry => f.write_str("DegenerateGeometry"),
        }
    }
}

/// All the possible failures of parameter derivation, sampling and placement.
///
/// Every variant carries the offending value so the caller can report it
/// as-is instead of a generic failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DriveError {
    /// (InvalidLength) A length input is non-finite or outside its allowed range
    #[error("(InvalidInput) {field} must be {requirement}, got {value}")]
    InvalidLength {
        field: &'static str,
        requirement: &'static str,
        value: Real,
    },
    /// (TooFewRollers) Fewer rollers than the closed profile needs
    #[error("(InvalidInput) rollers_count must be at least {min}, got {count}")]
    TooFewRollers { count: usize, min: usize },
    /// (TooManyRollers) The cavity count `rollers_count + 1` does not fit a `usize`
    #[error("(InvalidInput) rollers_count {count} leaves no room for the extra cavity")]
    TooManyRollers { count: usize },
    /// (ResolutionTooLow) The profile sampler needs at least a triangle
    #[error("(InvalidInput) resolution must be at least {min}, got {resolution}")]
    ResolutionTooLow { resolution: usize, min: usize },
    /// (RollerCountMismatch) `rollers_count` disagrees with the derived cavity count
    #[error(
        "(InvalidInput) rollers_count {rollers_count} does not match cavity_count {cavity_count} (expected cavity_count - 1)"
    )]
    RollerCountMismatch {
        rollers_count: usize,
        cavity_count: usize,
    },
    /// (RollersDoNotFit) The requested cycloid radius is below the minimum that fits the rollers
    #[error(
        "(DegenerateGeometry) requested cycloid radius {requested_radius} is below the minimum {minimum_radius} that fits the rollers"
    )]
    RollersDoNotFit {
        requested_radius: Real,
        minimum_radius: Real,
    },
    /// (NonPositiveWaveGenerator) The wave generator radius came out zero or negative
    #[error("(DegenerateGeometry) wave generator radius {radius} is not positive")]
    NonPositiveWaveGenerator { radius: Real },
    /// (NegativeRadicand) The trace square root is undefined at this angle
    #[error("(DegenerateGeometry) negative radicand {radicand} at theta = {theta} rad")]
    NegativeRadicand { radicand: Real, theta: Real },
    /// (NonPositiveInnerRing) The inner separator ring collapsed
    #[error("(DegenerateGeometry) inner separator ring radius {radius} is not positive")]
    NonPositiveInnerRing { radius: Real },
}

impl DriveError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            DriveError::InvalidLength { .. }
            | DriveError::TooFewRollers { .. }
            | DriveError::TooManyRollers { .. }
            | DriveError::ResolutionTooLow { .. }
            | DriveError::RollerCountMismatch { .. } => ErrorKind::InvalidInput,
            DriveError::RollersDoNotFit { .. }
            | DriveError::NonPositiveWaveGenerator { .. }
            | DriveError::NegativeRadicand { .. }
            | DriveError::NonPositiveInnerRing { .. } => ErrorKind::DegenerateGeometry,
        }
    }
}

/// Checks that a length is finite and strictly positive.
pub(crate) fn positive_length(field: &'static str, value: Real) -> Result<Real, DriveError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DriveError::InvalidLength {
            field,
            requirement: "finite and > 0",
            value,
        })
    }
}

/// Checks that a length is finite and not negative.
pub(crate) fn non_negative_length(field: &'static str, value: Real) -> Result<Real, DriveError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DriveError::InvalidLength {
            field,
            requirement: "finite and >= 0",
            value,
        })
    }
}
