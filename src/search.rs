//! Name search over the cached monster list.

use crate::api::MonsterSummary;

/// Monsters whose name contains `query`, ignoring case.
///
/// The query is trimmed; an empty query matches nothing. Results keep list
/// order and stop after `limit`.
pub fn search_names<'a>(
    names: &'a [MonsterSummary],
    query: &str,
    limit: usize,
) -> Vec<&'a MonsterSummary> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    names
        .iter()
        .filter(|m| m.name.to_lowercase().contains(&query))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MonsterId;

    fn names(list: &[&str]) -> Vec<MonsterSummary> {
        list.iter()
            .enumerate()
            .map(|(i, n)| MonsterSummary {
                id: MonsterId(i as u64 + 1),
                name: n.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_case_insensitive_substring() {
        let all = names(&["Rathalos", "Rathian", "Pink Rathian", "Diablos"]);
        let hits: Vec<_> = search_names(&all, "  RATH ", 8)
            .into_iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(hits, vec!["Rathalos", "Rathian", "Pink Rathian"]);
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let all = names(&["Rathalos"]);
        assert!(search_names(&all, "   ", 8).is_empty());
    }

    #[test]
    fn test_limit() {
        let all = names(&["Kirin", "Kushala Daora", "Kulu-Ya-Ku", "Kulve Taroth"]);
        assert_eq!(search_names(&all, "k", 2).len(), 2);
        assert!(search_names(&all, "k", 0).is_empty());
    }

    #[test]
    fn test_no_match() {
        let all = names(&["Rathalos"]);
        assert!(search_names(&all, "nergigante", 8).is_empty());
    }
}
