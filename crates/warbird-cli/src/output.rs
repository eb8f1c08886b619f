//! Output formatting for reports and envelope sweeps.
//!
//! Text output renders aligned tables for terminals; JSON output serialises
//! the library types directly so the figures can feed other tooling.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use warbird_lib::{EnvelopeRow, PerformanceReport};

/// Rendering target for command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned tables for terminals.
    Text,
    /// Pretty-printed JSON for tooling.
    Json,
}

/// Envelope sweep payload for JSON output.
#[derive(Debug, Serialize)]
pub struct EnvelopeDocument<'a> {
    /// Name carried over from the design selection, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    /// One row per swept altitude.
    pub rows: &'a [EnvelopeRow],
}

impl OutputFormat {
    /// Render a full performance report.
    pub fn render_report(self, report: &PerformanceReport) -> Result<()> {
        match self {
            OutputFormat::Text => {
                render_report_text(report);
                Ok(())
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(report)?);
                Ok(())
            }
        }
    }

    /// Render a flight-envelope sweep.
    pub fn render_envelope(self, name: Option<&str>, rows: &[EnvelopeRow]) -> Result<()> {
        match self {
            OutputFormat::Text => {
                render_envelope_text(name, rows);
                Ok(())
            }
            OutputFormat::Json => {
                let document = EnvelopeDocument { name, rows };
                println!("{}", serde_json::to_string_pretty(&document)?);
                Ok(())
            }
        }
    }
}

fn render_report_text(report: &PerformanceReport) {
    match report.name.as_deref() {
        Some(name) => println!("Design study: {}", name),
        None => println!("Design study:"),
    }
    println!();
    println!("{:<26} {:>10.0}", "Combat weight (kg)", report.totals.combat_weight_kg);
    println!("{:<26} {:>10.0}", "Cost (points)", report.totals.cost);
    println!("{:<26} {:>10.2}", "Reliability", report.totals.reliability);
    println!();
    println!(
        "{:<26} {:>10.0}",
        "Max speed at SL (km/h)", report.max_speed_sea_level_kmh
    );
    println!(
        "{:<26} {:>10.0}",
        "Max speed rated (km/h)", report.max_speed_rated_kmh
    );
    println!("{:<26} {:>10.0}", "Rated altitude (m)", report.rated_altitude_m);
    println!("{:<26} {:>10.1}", "Climb rate (m/s)", report.climb_rate_ms);
    println!("{:<26} {:>10.0}", "Service ceiling (m)", report.service_ceiling_m);
    println!("{:<26} {:>10.0}", "Range (km)", report.range_km);
    println!();
    println!("{:<26} {:>10.1}", "Turn time (s)", report.turn.turn_time_s);
    println!("{:<26} {:>10.2}", "Load factor (g)", report.turn.load_factor);
    println!("{:<26} {:>10.0}", "Turn radius (m)", report.turn.turn_radius_m);
}

fn render_envelope_text(name: Option<&str>, rows: &[EnvelopeRow]) {
    match name {
        Some(name) => println!("Flight envelope for {} ({} rows):", name, rows.len()),
        None => println!("Flight envelope ({} rows):", rows.len()),
    }
    println!(
        "{:>9} {:>10} {:>11} {:>13} {:>12}",
        "Alt (m)", "Density", "Power (hp)", "Speed (km/h)", "Climb (m/s)"
    );
    for row in rows {
        println!(
            "{:>9.0} {:>10.4} {:>11.0} {:>13.0} {:>12.1}",
            row.altitude_m, row.density_kg_m3, row.power_hp, row.speed_kmh, row.climb_rate_ms
        );
    }
}
