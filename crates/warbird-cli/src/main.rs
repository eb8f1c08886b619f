use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use warbird_cli::commands::{
    handle_components_command, handle_envelope_command, handle_report_command,
    EnvelopeCommandArgs, ReportCommandArgs,
};
use warbird_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interwar aircraft design-study calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog components and their headline figures.
    Components {
        /// Restrict the listing to one component kind.
        #[arg(long)]
        kind: Option<String>,
    },
    /// Evaluate a design selection and render the performance report.
    Report {
        /// Path to the design selection JSON file.
        #[arg(long)]
        design: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Override the number of mounted engines.
        #[arg(long)]
        engines: Option<u32>,
        /// Add a feature on top of the design selection (repeatable).
        #[arg(long = "with-feature")]
        with_feature: Vec<String>,
    },
    /// Sweep speed, power and climb across altitude.
    Envelope {
        /// Path to the design selection JSON file.
        #[arg(long)]
        design: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Sweep ceiling in meters.
        #[arg(long = "max", default_value_t = 10_000.0)]
        max_altitude: f64,
        /// Sweep step in meters.
        #[arg(long = "step", default_value_t = 500.0)]
        step: f64,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Components { kind } => handle_components_command(kind.as_deref()),
        Command::Report {
            design,
            format,
            engines,
            with_feature,
        } => {
            let args = ReportCommandArgs {
                design,
                engines,
                with_features: with_feature,
            };
            handle_report_command(format, &args)
        }
        Command::Envelope {
            design,
            format,
            max_altitude,
            step,
        } => {
            let args = EnvelopeCommandArgs {
                design,
                max_altitude_m: max_altitude,
                step_m: step,
            };
            handle_envelope_command(format, &args)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
