// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs stays focused on argument
// parsing and dispatches here.

pub mod components;
pub mod envelope;
pub mod report;

pub use components::handle_components_command;
pub use envelope::{handle_envelope_command, EnvelopeCommandArgs};
pub use report::{handle_report_command, ReportCommandArgs};
