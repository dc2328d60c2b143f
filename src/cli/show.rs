//! `monsterdex show` command handler.

use anyhow::{Context, Result};

use monsterdex::api::group_rewards;
use monsterdex::{MonsterDetail, MonsterId, Monsterdex};

/// Print the full detail view of one monster.
pub(crate) async fn cmd_show(dex: &Monsterdex, id: MonsterId) -> Result<()> {
    let detail = dex
        .monster(id)
        .await
        .with_context(|| format!("Failed to load details for monster {}", id))?;
    print!("{}", render_detail(&detail));
    Ok(())
}

const NONE: &str = "None";

fn join_or_none<I>(items: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let joined: Vec<String> = items.into_iter().collect();
    if joined.is_empty() {
        NONE.to_string()
    } else {
        joined.join(", ")
    }
}

fn render_detail(detail: &MonsterDetail) -> String {
    let m = &detail.record;
    let star = if detail.favorite { "★" } else { "☆" };
    let mut out = format!("{} {} (#{})\n", m.name, star, m.id);

    out.push_str(&format!(
        "{}\n",
        m.description.as_deref().unwrap_or("No description available")
    ));
    out.push_str(&format!("Size: {}\n", m.kind.as_deref().unwrap_or("N/A")));
    out.push_str(&format!(
        "Species: {}\n",
        m.species.as_deref().unwrap_or("N/A")
    ));
    out.push_str(&format!(
        "Elements: {}\n",
        join_or_none(m.elements.iter().cloned())
    ));
    out.push_str(&format!(
        "Ailments: {}\n",
        join_or_none(m.ailments.iter().map(|a| a.name.clone()))
    ));

    out.push_str("\nLocations:\n");
    if m.locations.is_empty() {
        out.push_str(&format!("  {}\n", NONE));
    }
    for loc in &m.locations {
        out.push_str(&format!("  - {} ({} zones)\n", loc.name, loc.zone_count));
    }

    out.push_str("\nWeaknesses:\n");
    if m.weaknesses.is_empty() {
        out.push_str("  No known weaknesses\n");
    }
    for w in &m.weaknesses {
        out.push_str(&format!("  - {} - {}", w.element, w.star_string()));
        if let Some(condition) = &w.condition {
            out.push_str(&format!(" ({})", condition));
        }
        out.push('\n');
    }

    out.push_str("\nResistances:\n");
    if m.resistances.is_empty() {
        out.push_str(&format!("  {}\n", NONE));
    }
    for r in &m.resistances {
        out.push_str(&format!("  - {}\n", r.element));
    }

    out.push_str("\nRewards:\n");
    let groups = group_rewards(&m.rewards);
    if groups.is_empty() {
        out.push_str(&format!("  {}\n", NONE));
    }
    for group in &groups {
        out.push_str(&format!(
            "  {} ({}★)\n",
            group.item.name, group.item.rarity
        ));
        if let Some(description) = &group.item.description {
            out.push_str(&format!("    {}\n", description));
        }
        let ranks: Vec<String> = group
            .conditions
            .iter()
            .map(|c| {
                format!(
                    "{} {} x{} {}%",
                    c.rank.as_deref().unwrap_or("?"),
                    c.kind.as_deref().unwrap_or("?"),
                    c.quantity,
                    c.chance
                )
            })
            .collect();
        if !ranks.is_empty() {
            out.push_str(&format!("    {}\n", ranks.join("; ")));
        }
    }
    out
}
