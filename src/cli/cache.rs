//! `monsterdex cache` command handler.

use anyhow::Result;

use monsterdex::Monsterdex;

use super::CacheAction;

/// Handle `monsterdex cache` subcommands.
pub(crate) async fn cmd_cache(dex: &Monsterdex, action: CacheAction) -> Result<()> {
    match action {
        CacheAction::Status => {
            let status = dex.names().status();
            match status.age {
                None => println!("Name cache is empty."),
                Some(age) => {
                    println!(
                        "{} monsters cached {}s ago ({}, ttl {}s).",
                        status.entries,
                        age.as_secs(),
                        if status.fresh { "fresh" } else { "stale" },
                        status.ttl.as_secs()
                    );
                }
            }
        }
        CacheAction::Refresh => {
            let lookup = dex.names().refresh().await?;
            println!("Fetched {} monster names.", lookup.data.len());
        }
        CacheAction::Clear => {
            if dex.names().clear()? {
                println!("Name cache cleared.");
            } else {
                println!("Name cache was already empty.");
            }
        }
    }
    Ok(())
}
