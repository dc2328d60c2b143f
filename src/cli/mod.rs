//! CLI argument definitions and command dispatch.

mod cache;
mod favorites;
mod search;
mod show;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use monsterdex::{Config, MonsterId, Monsterdex};

/// Search Monster Hunter World monsters and manage local favorites.
#[derive(Parser, Debug)]
#[command(name = "monsterdex", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: ~/.monsterdex/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search monsters by name
    Search {
        /// Part of a monster name
        query: String,
    },
    /// Show a monster's details
    Show {
        /// Monster id
        id: MonsterId,
    },
    /// Add or remove a monster from favorites
    Favorite {
        /// Monster id
        id: MonsterId,
    },
    /// List favorites one page at a time
    Favorites {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Inspect or reset the monster name cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// Show age and size of the cached name list
    Status,
    /// Refetch the name list now
    Refresh,
    /// Delete the cached name list
    Clear,
}

/// Load config and run the selected command.
pub async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .with_context(|| "Failed to load configuration")?;

    let dex = Monsterdex::from_config(&config).with_context(|| "Failed to initialize monsterdex")?;

    match cli.command {
        Commands::Search { query } => search::cmd_search(&dex, &query).await,
        Commands::Show { id } => show::cmd_show(&dex, id).await,
        Commands::Favorite { id } => favorites::cmd_toggle(&dex, id).await,
        Commands::Favorites { page } => favorites::cmd_list(&dex, page),
        Commands::Cache { action } => cache::cmd_cache(&dex, action).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["monsterdex", "show", "17"]).unwrap();
        assert!(matches!(cli.command, Commands::Show { id } if id == MonsterId(17)));
    }

    #[test]
    fn test_parse_favorites_default_page() {
        let cli = Cli::try_parse_from(["monsterdex", "-v", "favorites"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Favorites { page: 1 }));
    }

    #[test]
    fn test_parse_cache_clear() {
        let cli = Cli::try_parse_from(["monsterdex", "cache", "clear"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Cache {
                action: CacheAction::Clear
            }
        ));
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["monsterdex", "show", "rathalos"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
