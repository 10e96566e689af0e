mod app;
mod catalog;
mod cli;
mod error;
mod fmt;
mod ledger;
mod logging;
mod models;
mod routes;
mod settings;
mod tui;

use clap::Parser;

use cli::{Cli, Commands};
use error::Result;
use routes::Route;
use settings::load_settings;

fn interactive(route: Route) -> Result<()> {
    let settings = load_settings();
    logging::init_file(&settings);
    app::run(route, &settings)
}

fn main() {
    let cli = Cli::parse();

    if !matches!(cli.command, None | Some(Commands::Open { .. })) {
        logging::init_stderr(&load_settings());
    }

    let result = match cli.command {
        None => interactive(Route::Index),
        Some(Commands::Open { route }) => route.parse::<Route>().and_then(interactive),
        Some(Commands::About) => cli::about::run(),
        Some(Commands::Presets) => cli::presets::list(),
        Some(Commands::Calc {
            fixed,
            variable,
            preset,
            salary,
            json,
        }) => cli::budget::run(&fixed, &variable, &preset, salary.as_deref(), json),
        Some(Commands::Settings {
            currency,
            name,
            log_level,
        }) => cli::config::run(currency, name, log_level),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
