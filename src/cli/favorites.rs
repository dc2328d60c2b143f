//! `monsterdex favorite` / `monsterdex favorites` command handlers.

use anyhow::Result;

use monsterdex::{FavoriteMonster, FavoritesPage, MonsterId, Monsterdex, ToggleOutcome};

/// Toggle one monster in the favorites list.
pub(crate) async fn cmd_toggle(dex: &Monsterdex, id: MonsterId) -> Result<()> {
    match dex.toggle_favorite(id).await? {
        ToggleOutcome::Added => println!("Added monster {} to favorites.", id),
        ToggleOutcome::Removed => println!("Removed monster {} from favorites.", id),
    }
    Ok(())
}

/// Print one page of favorites.
pub(crate) fn cmd_list(dex: &Monsterdex, page: usize) -> Result<()> {
    print!("{}", render_page(&dex.favorites_page(page)));
    Ok(())
}

fn render_page(page: &FavoritesPage) -> String {
    if page.total == 0 {
        return "You have not favorited any monsters yet.\n".to_string();
    }

    let mut out = format!("You have {} favorite monster(s):\n", page.total);
    if page.items.is_empty() {
        out.push_str(&format!(
            "Page {} is empty; there are {} page(s).\n",
            page.page, page.total_pages
        ));
        return out;
    }

    for fav in &page.items {
        out.push('\n');
        out.push_str(&render_card(fav));
    }

    out.push_str(&format!("\nPage {} of {}", page.page, page.total_pages));
    let mut hints = Vec::new();
    if page.has_prev {
        hints.push(format!("--page {} for previous", page.page - 1));
    }
    if page.has_next {
        hints.push(format!("--page {} for next", page.page + 1));
    }
    if !hints.is_empty() {
        out.push_str(&format!(" ({})", hints.join(", ")));
    }
    out.push('\n');
    out
}

fn render_card(fav: &FavoriteMonster) -> String {
    let elements = if fav.elements.is_empty() {
        "None".to_string()
    } else {
        fav.elements.join(", ")
    };
    let mut card = format!(
        "{} (#{})\n  Size: {}\n  Species: {}\n  Elements: {}\n",
        fav.name,
        fav.id,
        fav.kind.as_deref().unwrap_or("N/A"),
        fav.species.as_deref().unwrap_or("N/A"),
        elements
    );
    if let Some(description) = fav.description.as_deref().filter(|d| !d.is_empty()) {
        card.push_str(&format!("  {}\n", description));
    }
    card
}
