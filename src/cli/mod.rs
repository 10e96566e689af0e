pub mod about;
pub mod budget;
pub mod budget_screen;
pub mod config;
pub mod home;
pub mod presets;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "educarenda",
    about = "Record your expenses, enter your salary, and see what is left."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive app on a given screen (index, about, calculaRenda).
    Open {
        /// Route name
        route: String,
    },
    /// Show what EducaRenda is about.
    About,
    /// List the preset expenses.
    Presets,
    /// Compute total expenses and the surplus or deficit against a salary.
    Calc {
        /// Fixed expense as LABEL=AMOUNT (repeatable)
        #[arg(long = "fixed", value_name = "LABEL=AMOUNT")]
        fixed: Vec<String>,
        /// Variable expense as LABEL=AMOUNT (repeatable)
        #[arg(long = "variable", value_name = "LABEL=AMOUNT")]
        variable: Vec<String>,
        /// Add a preset by label, e.g. 'Rent' (repeatable)
        #[arg(long = "preset", value_name = "LABEL")]
        preset: Vec<String>,
        /// Monthly salary
        #[arg(long, allow_hyphen_values = true)]
        salary: Option<String>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or change settings.
    Settings {
        /// Currency symbol shown before amounts, e.g. 'R$'
        #[arg(long)]
        currency: Option<String>,
        /// Your name, shown in the header
        #[arg(long)]
        name: Option<String>,
        /// Log level: error, warn, info, debug, trace
        #[arg(long = "log-level")]
        log_level: Option<String>,
    },
}
