//! Report command handler for evaluating a design selection.

use std::path::PathBuf;

use anyhow::{Context, Result};

use warbird_lib::{evaluate, DesignSelection};

use crate::output::OutputFormat;

/// Arguments for the report command.
#[derive(Debug, Clone)]
pub struct ReportCommandArgs {
    /// Path to the design selection file.
    pub design: PathBuf,
    /// Override for the number of mounted engines.
    pub engines: Option<u32>,
    /// Extra features layered onto the selection.
    pub with_features: Vec<String>,
}

/// Handle the report subcommand.
///
/// Loads the design selection, applies any command-line overrides, resolves
/// it against the catalogs and renders the performance report.
pub fn handle_report_command(format: OutputFormat, args: &ReportCommandArgs) -> Result<()> {
    let mut selection = DesignSelection::from_path(&args.design)
        .with_context(|| format!("failed to load design from {}", args.design.display()))?;

    if let Some(engines) = args.engines {
        selection.engine_count = engines;
    }
    selection
        .features
        .extend(args.with_features.iter().cloned());

    let report = evaluate(&selection.resolve()?);
    format.render_report(&report)
}
