use crate::export::ExportFormat;
use crate::models::Field;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftboard
/// Track one shift's employees: clock state, lateness and breaks
#[derive(Parser)]
#[command(
    name = "shiftboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A shift-tracking board: employees, shift times and breaks with cyclable statuses",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the storage key the board is saved under
    #[arg(global = true, long = "key")]
    pub key: Option<String>,

    /// Disable coloured output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Print debug diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the board
    Show,

    /// Append an empty employee row
    Add,

    /// Delete an employee row
    Del {
        /// Row number (as shown by `show`)
        row: usize,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Clear the whole board back to one empty row in edit mode
    Reset {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Switch between edit mode and manage mode
    Mode,

    /// Change the text of a cell (edit mode only)
    Set {
        /// Row number (as shown by `show`)
        row: usize,

        /// Field: name, shift-start, shift-end, first-break, lunch, second-break
        #[arg(value_parser = parse_field)]
        field: Field,

        /// New text (may be empty)
        text: String,
    },

    /// Advance the status of a cell (manage mode only)
    Cycle {
        /// Row number (as shown by `show`)
        row: usize,

        /// Field: name, shift-start, shift-end, first-break, lunch, second-break
        #[arg(value_parser = parse_field)]
        field: Field,
    },

    /// Export the board
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

fn parse_field(s: &str) -> Result<Field, String> {
    Field::from_input(s).ok_or_else(|| {
        format!(
            "unknown field '{}'. Use one of: {}",
            s,
            Field::ALL
                .iter()
                .map(|f| f.key())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}
