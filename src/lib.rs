//! Two-dimensional geometry for **cycloidal strain-wave drives**: the lobed
//! cycloid profile, the roller ring riding on it, separator rings, wave
//! generator cam and input shaft bore, derived from four physical inputs.
//!
//! ```
//! use strainwave::{RawInputs, sink::RecordingSink};
//!
//! let geometry = strainwave::generate(&RawInputs::default()).unwrap();
//! let mut sink = RecordingSink::new();
//! geometry.emit(&mut sink);
//! assert_eq!(geometry.rollers.len(), 12);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**svg-io**](https://en.wikipedia.org/wiki/SVG): `.svg` export
//! - [**dxf-io**](https://en.wikipedia.org/wiki/AutoCAD_DXF): `.dxf` export
//! - **serde**: `Serialize`/`Deserialize` for inputs, configs and results
//! - **cli**: the `strainwave` command line binary
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to run the profile, roller and ring stages concurrently

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod config;
pub mod drive;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod params;
pub mod primitive;
pub mod profile;
pub mod rings;
pub mod rollers;
pub mod sink;
pub mod sketch;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::GeneratorConfig;
pub use drive::{DriveGeometry, generate};
pub use errors::{DriveError, ErrorKind};
pub use params::{DerivedParameters, RawInputs, derive};
pub use primitive::{Circle, Primitive};
pub use profile::{ProfileCurve, sample_profile};
pub use rings::{RingGeometry, compute_rings};
pub use rollers::{RollerLayout, place_rollers};
pub use sink::DrawingSink;
