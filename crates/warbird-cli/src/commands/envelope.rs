//! Envelope command handler for sweeping performance across altitude.

use std::path::PathBuf;

use anyhow::{Context, Result};

use warbird_lib::{build_profile, sweep_envelope, DesignSelection};

use crate::output::OutputFormat;

/// Arguments for the envelope command.
#[derive(Debug, Clone)]
pub struct EnvelopeCommandArgs {
    /// Path to the design selection file.
    pub design: PathBuf,
    /// Sweep ceiling in meters.
    pub max_altitude_m: f64,
    /// Sweep step in meters.
    pub step_m: f64,
}

/// Handle the envelope subcommand.
///
/// Resolves the design, freezes its profile and tabulates the core models
/// from sea level up to the requested ceiling.
pub fn handle_envelope_command(format: OutputFormat, args: &EnvelopeCommandArgs) -> Result<()> {
    if args.step_m <= 0.0 {
        return Err(anyhow::anyhow!("--step must be positive"));
    }
    if args.max_altitude_m < 0.0 {
        return Err(anyhow::anyhow!("--max must not be negative"));
    }

    let selection = DesignSelection::from_path(&args.design)
        .with_context(|| format!("failed to load design from {}", args.design.display()))?;
    let design = selection.resolve()?;
    let profile = build_profile(&design);
    let rows = sweep_envelope(&profile, args.max_altitude_m, args.step_m);

    format.render_envelope(design.name.as_deref(), &rows)
}
