//! Substring search over the catalog tables. Pure functions of
//! (query, catalog); both return index vectors into the backing table.

use crate::catalog::Catalog;

/// Games whose lowercase name contains the lowercased query, ranked by the
/// byte index of the first match (earlier matches first, ties keep catalog
/// order). The query is not trimmed; an empty query matches every game at
/// index 0 and so preserves catalog order.
pub fn filter_games(catalog: &Catalog, query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    let mut matches: Vec<(usize, usize)> = catalog
        .games
        .iter()
        .enumerate()
        .filter_map(|(idx, group)| {
            group
                .entry
                .name_lower
                .find(&needle)
                .map(|position| (idx, position))
        })
        .collect();
    matches.sort_by_key(|&(_, position)| position);
    matches.into_iter().map(|(idx, _)| idx).collect()
}

/// Sleeve SKUs whose display name contains the query, case-insensitive.
/// Unlike the games filter there is no rank-by-position: catalog order is
/// preserved.
pub fn filter_skus(catalog: &Catalog, query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    catalog
        .skus
        .iter()
        .enumerate()
        .filter(|(_, meta)| meta.name.to_lowercase().contains(&needle))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GameEntry, GameGroup, SizeVariant, SkuMeta};

    fn group(name: &str) -> GameGroup {
        GameGroup {
            entry: GameEntry {
                name: name.to_string(),
                name_lower: name.to_lowercase(),
            },
            variants: vec![SizeVariant {
                sku: "standard".into(),
                count: "1".into(),
                width: None,
                height: None,
            }],
        }
    }

    fn catalog(names: &[&str]) -> Catalog {
        Catalog {
            games: names.iter().map(|name| group(name)).collect(),
            skus: Vec::new(),
        }
    }

    #[test]
    fn test_filter_games_substring_containment() {
        let catalog = catalog(&["Magic", "Dominion", "Mtg Arena"]);
        let hits = filter_games(&catalog, "mag");
        assert_eq!(hits, vec![0]);
        assert!(filter_games(&catalog, "zzz").is_empty());
    }

    #[test]
    fn test_filter_games_ranks_by_first_match_index() {
        // "mtg" appears at index 0 in "Mtg Arena" and index 1 in a name
        // starting with another letter.
        let prefix_matches = catalog(&["Magic", "Mtg Arena"]);
        let hits = filter_games(&prefix_matches, "m");
        assert_eq!(hits, vec![0, 1]); // both at index 0, catalog order kept

        let mixed_offsets = catalog(&["Amtgard", "Mtg Arena"]);
        let hits = filter_games(&mixed_offsets, "mtg");
        assert_eq!(hits, vec![1, 0]); // index 0 beats index 1
    }

    #[test]
    fn test_filter_games_stable_on_ties() {
        let catalog = catalog(&["Star Realms", "Star Wars Destiny", "Starship Captains"]);
        assert_eq!(filter_games(&catalog, "star"), vec![0, 1, 2]);
    }

    #[test]
    fn test_filter_games_empty_query_returns_all_in_order() {
        let catalog = catalog(&["B Game", "A Game", "C Game"]);
        assert_eq!(filter_games(&catalog, ""), vec![0, 1, 2]);
    }

    #[test]
    fn test_filter_games_case_insensitive_and_untrimmed() {
        let catalog = catalog(&["Mtg Arena"]);
        assert_eq!(filter_games(&catalog, "MTG"), vec![0]);
        // Leading space is part of the query, not noise.
        assert_eq!(filter_games(&catalog, " arena"), vec![0]);
        assert!(filter_games(&catalog, " mtg").is_empty());
    }

    #[test]
    fn test_filter_skus_keeps_catalog_order() {
        let catalog = Catalog {
            games: Vec::new(),
            skus: vec![
                SkuMeta {
                    sku: "mini-euro".into(),
                    name: "Mini Euro".into(),
                    width: 45.0,
                    height: 68.0,
                    link: None,
                    premium_link: None,
                },
                SkuMeta {
                    sku: "standard".into(),
                    name: "Standard Card Game".into(),
                    width: 63.5,
                    height: 88.0,
                    link: None,
                    premium_link: None,
                },
                SkuMeta {
                    sku: "euro".into(),
                    name: "Euro Size".into(),
                    width: 59.0,
                    height: 92.0,
                    link: None,
                    premium_link: None,
                },
            ],
        };
        // "euro" matches at different positions but order stays 0, 2.
        assert_eq!(filter_skus(&catalog, "euro"), vec![0, 2]);
        assert_eq!(filter_skus(&catalog, ""), vec![0, 1, 2]);
        assert_eq!(filter_skus(&catalog, "STANDARD"), vec![1]);
    }
}
