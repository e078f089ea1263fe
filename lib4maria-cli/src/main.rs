//! lib4maria CLI
//!
//! Command-line front end for a personal catalog of movies and TV series.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;
pub(crate) use logging::log_blank;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(2);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let data_dir = cli.data_dir;

    match cli.command {
        Commands::List { search } => commands::list::run_list(data_dir, search),
        Commands::Filter { kind } => commands::filter::run_filter(data_dir, kind),
        Commands::Favorites { mode } => commands::filter::run_favorites(data_dir, mode),
        Commands::Add {
            title,
            kind,
            themes,
            year,
            rating,
            description,
        } => commands::add::run_add(data_dir, title, kind, themes, year, rating, description),
        Commands::Remove { id } => commands::remove::run_remove(data_dir, id),
        Commands::Favorite { id } => commands::favorite::run_favorite(data_dir, id),
        Commands::Random { search } => commands::random::run_random(data_dir, search),
        Commands::Export { output } => commands::export::run_export(data_dir, output),
        Commands::Import {
            path,
            merge,
            replace,
        } => commands::import::run_import(data_dir, path, merge, replace),
        Commands::Clear { confirm } => commands::clear::run_clear(data_dir, confirm),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(data_dir),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetDataDir { path } => commands::config::run_config_set_data_dir(path),
        },
    }
}
