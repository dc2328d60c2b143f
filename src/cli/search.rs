//! `monsterdex search` command handler.

use anyhow::{Context, Result};

use monsterdex::Monsterdex;

/// Print monsters whose name matches `query`.
pub(crate) async fn cmd_search(dex: &Monsterdex, query: &str) -> Result<()> {
    let result = dex
        .search(query)
        .await
        .with_context(|| "Failed to load the monster list")?;

    if result.from_cache {
        println!("Data loaded from cache.");
    } else {
        println!("Data loaded from the API.");
    }

    if result.matches.is_empty() {
        println!("No monsters match '{}'.", query.trim());
        return Ok(());
    }

    for monster in &result.matches {
        println!("{:>5}  {}", monster.id, monster.name);
    }
    Ok(())
}
