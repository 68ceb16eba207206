//! Command dispatch logic extracted from the binary.

use super::{
    args::{Cli, Commands},
    handlers::{
        handle_common, handle_export, handle_pairings, handle_rate, handle_recommend, handle_show,
        Session,
    },
};
use crate::config::Config;
use crate::exit::LarderExit;
use anyhow::{Context, Result};

/// Loads configuration, opens the session and executes the parsed command.
///
/// # Errors
/// Returns error if loading fails or the command handler fails.
pub fn execute(cli: &Cli) -> Result<LarderExit> {
    let config = match &cli.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load().context("Failed to load larder.toml")?,
    };
    let session = Session::open(config)?;
    run(&session, &cli.command)
}

/// Executes a command against an already opened session.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn run(session: &Session, command: &Commands) -> Result<LarderExit> {
    match command {
        Commands::Recommend {
            ingredients,
            filters,
            limit,
            page,
        } => handle_recommend(session, ingredients, filters, *limit, *page),
        Commands::Show { title } => handle_show(session, title),
        Commands::Rate {
            title,
            rating,
            comment,
        } => handle_rate(session, title, *rating, comment),
        Commands::Common { filters } => handle_common(session, filters),
        Commands::Pairings { ingredient } => handle_pairings(session, ingredient),
        Commands::Export {
            ingredients,
            max_price,
            limit,
            output,
        } => handle_export(session, ingredients, *max_price, *limit, output.as_deref()),
    }
}
