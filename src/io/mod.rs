//! Export of [`DriveGeometry`] to interchange formats.

use crate::drive::DriveGeometry;

#[cfg(feature = "svg-io")]
mod svg;
#[cfg(feature = "svg-io")]
pub use self::svg::{SvgSink, to_svg};

#[cfg(feature = "dxf-io")]
mod dxf;
#[cfg(feature = "dxf-io")]
pub use self::dxf::{DxfSink, to_dxf};

/// Generic I/O and format‑conversion errors.
///
/// Many I/O features are behind cargo feature‑flags.
/// When a feature is disabled the corresponding variant is *not*
/// constructed in user code.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    Unimplemented(String),

    #[cfg(feature = "dxf-io")]
    /// Error bubbled up from the `dxf` crate while writing a drawing.
    DxfWriting(::dxf::DxfError),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),

            Unimplemented(msg) => write!(f, "Feature is not implemented: {msg}"),

            #[cfg(feature = "dxf-io")]
            DxfWriting(error) => write!(f, "DXF writing error: {error}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

#[cfg(feature = "dxf-io")]
impl From<::dxf::DxfError> for IoError {
    fn from(value: ::dxf::DxfError) -> Self {
        Self::DxfWriting(value)
    }
}

/// Output formats known to [`export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Dxf,
}

impl ExportFormat {
    pub const fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Dxf => "dxf",
        }
    }
}

/// Encodes `geometry` as `format`.
///
/// Fails with [`IoError::Unimplemented`] when the matching `*-io` feature is off.
pub fn export(geometry: &DriveGeometry, format: ExportFormat) -> Result<Vec<u8>, IoError> {
    match format {
        #[cfg(feature = "svg-io")]
        ExportFormat::Svg => Ok(to_svg(geometry).into_bytes()),
        #[cfg(not(feature = "svg-io"))]
        ExportFormat::Svg => {
            let _ = geometry;
            Err(IoError::Unimplemented("svg export requires the `svg-io` feature".into()))
        },

        #[cfg(feature = "dxf-io")]
        ExportFormat::Dxf => to_dxf(geometry),
        #[cfg(not(feature = "dxf-io"))]
        ExportFormat::Dxf => {
            let _ = geometry;
            Err(IoError::Unimplemented("dxf export requires the `dxf-io` feature".into()))
        },
    }
}

