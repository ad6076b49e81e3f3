// main.rs
//
// Command line front end: reads the four drive inputs, runs the pipeline and
// writes a summary, SVG, DXF or JSON description of the result.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use strainwave::config::{GeneratorConfig, RadicandPolicy, RadiusPolicy};
use strainwave::float_types::{CM, INCH, MM, Real};
use strainwave::io::{ExportFormat, export};
use strainwave::{DriveGeometry, RawInputs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Unit {
    Mm,
    Cm,
    Inch,
}

impl Unit {
    const fn factor(self) -> Real {
        match self {
            Unit::Mm => MM,
            Unit::Cm => CM,
            Unit::Inch => INCH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Summary,
    Svg,
    Dxf,
    Json,
}

/// Generate the 2D profile of a cycloidal strain-wave drive.
#[derive(Debug, Parser)]
#[command(name = "strainwave", version, about)]
struct Cli {
    /// Roller diameter
    #[arg(long, default_value_t = 5.0)]
    roller_diameter: Real,

    /// Number of rollers
    #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u16).range(3..=100))]
    rollers: u16,

    /// Requested cycloid outer diameter
    #[arg(long, default_value_t = 60.0)]
    outer_diameter: Real,

    /// Input shaft diameter, 0 for no bore
    #[arg(long, default_value_t = 5.0)]
    shaft_diameter: Real,

    /// Unit of the length arguments
    #[arg(long, value_enum, default_value_t = Unit::Mm)]
    unit: Unit,

    /// Generator settings as JSON; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Profile sample count
    #[arg(long)]
    resolution: Option<usize>,

    /// Substitute the minimum cycloid radius when the outer diameter is too small
    #[arg(long)]
    clamp_radius: bool,

    /// Treat negative trace radicands as zero instead of failing
    #[arg(long)]
    clamp_radicand: bool,

    /// What to write: a text summary, SVG, DXF or the full geometry as JSON
    #[arg(long, value_enum, default_value_t = Format::Summary)]
    format: Format,

    /// Output file, stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn inputs(&self) -> RawInputs {
        RawInputs::new(
            self.roller_diameter,
            usize::from(self.rollers),
            self.outer_diameter,
            self.shaft_diameter,
        )
        .scaled(self.unit.factor())
    }

    fn generator_config(&self) -> Result<GeneratorConfig> {
        let mut config: GeneratorConfig = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            },
            None => GeneratorConfig::default(),
        };
        if let Some(resolution) = self.resolution {
            config.resolution = resolution;
        }
        if self.clamp_radius {
            config.radius_policy = RadiusPolicy::Clamp;
        }
        if self.clamp_radicand {
            config.radicand_policy = RadicandPolicy::ClampToZero;
        }
        Ok(config)
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn summary(geometry: &DriveGeometry) -> String {
    format!(
        "{}\nProfile points: {}\nRollers: {}\nSeparator ring (mm): {:.3} .. {:.3}\nBore radius (mm): {:.3}\n",
        geometry.params,
        geometry.profile.len(),
        geometry.rollers.len(),
        geometry.rings.inner.radius / MM,
        geometry.rings.outer.radius / MM,
        geometry.rings.bore.radius / MM,
    )
}

fn render(geometry: &DriveGeometry, format: Format) -> Result<Vec<u8>> {
    Ok(match format {
        Format::Summary => summary(geometry).into_bytes(),
        Format::Json => serde_json::to_vec_pretty(geometry)?,
        Format::Svg => export(geometry, ExportFormat::Svg)?,
        Format::Dxf => export(geometry, ExportFormat::Dxf)?,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let inputs = cli.inputs();
    let config = cli.generator_config()?;
    let geometry = DriveGeometry::generate(&inputs, &config).map_err(|err| {
        tracing::error!(kind = %err.kind(), "{err}");
        anyhow::Error::new(err).context(format!("generating drive for {inputs:?}"))
    })?;

    let bytes = render(&geometry, cli.format)?;
    match &cli.output {
        Some(path) => {
            fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), format = ?cli.format, "drive sketch written");
        },
        None => {
            std::io::stdout().write_all(&bytes)?;
            tracing::info!(format = ?cli.format, "drive sketch generated");
        },
    }
    Ok(())
}
