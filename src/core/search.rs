//! Pure filter/sort pipeline for the list page.
//!
//! [`derive`] maps a raw entity list plus the active filter state to an
//! ordered, filtered list. It has no reactive or browser dependencies, so
//! its behavior is fully covered by the unit tests below.
//!
//! Pipeline order:
//! 1. name substring filter (case-insensitive, trimmed query)
//! 2. favorites filter, when sorting by favorites
//! 3. type membership intersection (entity must be in every selected set)
//! 4. stable sort by the active key
//!
//! The output is deterministic for identical inputs; pagination slices it
//! afterwards, so stability matters.

use std::collections::{HashMap, HashSet};

use crate::models::{NamedResource, SortKey};

/// Derive the ordered, filtered list for the current inputs.
///
/// Type filtering is fail-closed: if any selected type's membership set has
/// not been fetched yet and no fetch is in flight, the result is empty. If
/// a fetch is in flight the type filter is skipped for now; the caller is
/// expected to show a loading state instead of these interim results.
pub fn derive(
    source: &[NamedResource],
    query: &str,
    type_filters: &[String],
    sort: SortKey,
    favorite_names: &HashSet<String>,
    membership: &HashMap<String, HashSet<String>>,
    membership_loading: bool,
) -> Vec<NamedResource> {
    let term = query.trim().to_lowercase();

    let mut base: Vec<NamedResource> = source
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&term))
        .cloned()
        .collect();

    if sort == SortKey::Favorites {
        base.retain(|entry| favorite_names.contains(&entry.name));
    }

    if !type_filters.is_empty() {
        let sets: Vec<&HashSet<String>> = type_filters
            .iter()
            .filter_map(|t| membership.get(t))
            .collect();

        if sets.len() == type_filters.len() {
            base.retain(|entry| sets.iter().all(|set| set.contains(&entry.name)));
        } else if !membership_loading {
            // Required membership data is missing and nothing is fetching it.
            base.clear();
        }
    }

    match sort {
        SortKey::Number => base.sort_by_key(|entry| entry.id()),
        SortKey::Name => base.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::NameDesc => base.sort_by(|a, b| b.name.cmp(&a.name)),
        // Favorites keep their persisted insertion order relative to source.
        SortKey::Favorites => {}
    }

    base
}

/// Total number of pages for a filtered result count.
pub fn total_pages(filtered_count: usize, page_size: u32) -> u32 {
    let pages = (filtered_count as u32).div_ceil(page_size);
    pages.max(1)
}

/// Clamp a requested page into `1..=total`.
pub fn clamp_page(page: u32, total: u32) -> u32 {
    page.min(total).max(1)
}

/// The slice of `list` visible on the given 1-based page.
///
/// The offset is computed in u64: the page number comes straight from the
/// URL, so `u32::MAX * page_size` must not overflow into a bogus window.
pub fn page_window(list: &[NamedResource], page: u32, page_size: u32) -> &[NamedResource] {
    let start = (page.max(1) as u64 - 1) * page_size as u64;
    if start >= list.len() as u64 {
        return &[];
    }
    let start = start as usize;
    let end = (start + page_size as usize).min(list.len());
    &list[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(name: &str, id: u32) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: format!("https://pokeapi.co/api/v2/pokemon/{}/", id),
        }
    }

    fn names(list: &[NamedResource]) -> Vec<&str> {
        list.iter().map(|r| r.name.as_str()).collect()
    }

    fn no_favorites() -> HashSet<String> {
        HashSet::new()
    }

    fn no_membership() -> HashMap<String, HashSet<String>> {
        HashMap::new()
    }

    #[test]
    fn test_query_substring_match() {
        let source = vec![resource("bulbasaur", 1), resource("charmander", 4)];
        let out = derive(
            &source,
            "char",
            &[],
            SortKey::Number,
            &no_favorites(),
            &no_membership(),
            false,
        );
        assert_eq!(names(&out), vec!["charmander"]);
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let source = vec![resource("pikachu", 25)];
        let out = derive(
            &source,
            "  PIKA ",
            &[],
            SortKey::Number,
            &no_favorites(),
            &no_membership(),
            false,
        );
        assert_eq!(names(&out), vec!["pikachu"]);
    }

    #[test]
    fn test_type_intersection() {
        let source = vec![
            resource("charizard", 6),
            resource("moltres", 146),
            resource("pidgey", 16),
        ];
        let mut membership = HashMap::new();
        membership.insert(
            "fire".to_string(),
            ["charizard", "moltres"].iter().map(|s| s.to_string()).collect(),
        );
        membership.insert(
            "flying".to_string(),
            ["charizard", "pidgey"].iter().map(|s| s.to_string()).collect(),
        );
        let filters = vec!["fire".to_string(), "flying".to_string()];
        let out = derive(
            &source,
            "",
            &filters,
            SortKey::Number,
            &no_favorites(),
            &membership,
            false,
        );
        assert_eq!(names(&out), vec!["charizard"]);
    }

    #[test]
    fn test_narrowing_filters_is_monotonic() {
        let source: Vec<NamedResource> = (1..=10).map(|i| resource(&format!("mon{}", i), i)).collect();
        let mut membership = HashMap::new();
        membership.insert(
            "a".to_string(),
            (1..=8).map(|i| format!("mon{}", i)).collect::<HashSet<_>>(),
        );
        membership.insert(
            "b".to_string(),
            (4..=10).map(|i| format!("mon{}", i)).collect::<HashSet<_>>(),
        );

        let one = derive(
            &source,
            "",
            &["a".to_string()],
            SortKey::Number,
            &no_favorites(),
            &membership,
            false,
        );
        let both = derive(
            &source,
            "",
            &["a".to_string(), "b".to_string()],
            SortKey::Number,
            &no_favorites(),
            &membership,
            false,
        );
        let one_names: HashSet<_> = one.iter().map(|r| &r.name).collect();
        assert!(both.iter().all(|r| one_names.contains(&r.name)));
        assert!(both.len() <= one.len());
    }

    #[test]
    fn test_missing_membership_fails_closed() {
        let source = vec![resource("charizard", 6)];
        let filters = vec!["fire".to_string()];
        let out = derive(
            &source,
            "",
            &filters,
            SortKey::Number,
            &no_favorites(),
            &no_membership(),
            false,
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_membership_passes_through_while_loading() {
        let source = vec![resource("charizard", 6)];
        let filters = vec!["fire".to_string()];
        let out = derive(
            &source,
            "",
            &filters,
            SortKey::Number,
            &no_favorites(),
            &no_membership(),
            true,
        );
        // Interim results; the caller shows a loading state instead.
        assert_eq!(names(&out), vec!["charizard"]);
    }

    #[test]
    fn test_sort_by_number() {
        let source = vec![resource("venusaur", 3), resource("bulbasaur", 1), resource("ivysaur", 2)];
        let out = derive(
            &source,
            "",
            &[],
            SortKey::Number,
            &no_favorites(),
            &no_membership(),
            false,
        );
        assert_eq!(names(&out), vec!["bulbasaur", "ivysaur", "venusaur"]);
    }

    #[test]
    fn test_sort_by_number_is_idempotent() {
        let source = vec![resource("b", 2), resource("a", 1), resource("c", 3)];
        let once = derive(&source, "", &[], SortKey::Number, &no_favorites(), &no_membership(), false);
        let twice = derive(&once, "", &[], SortKey::Number, &no_favorites(), &no_membership(), false);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_by_name_both_directions() {
        let source = vec![resource("pidgey", 16), resource("abra", 63), resource("zubat", 41)];
        let asc = derive(&source, "", &[], SortKey::Name, &no_favorites(), &no_membership(), false);
        assert_eq!(names(&asc), vec!["abra", "pidgey", "zubat"]);
        let desc = derive(&source, "", &[], SortKey::NameDesc, &no_favorites(), &no_membership(), false);
        assert_eq!(names(&desc), vec!["zubat", "pidgey", "abra"]);
    }

    #[test]
    fn test_favorites_sort_filters_and_keeps_order() {
        let source = vec![
            resource("charmander", 4),
            resource("bulbasaur", 1),
            resource("squirtle", 7),
        ];
        let favorites: HashSet<String> =
            ["squirtle", "charmander"].iter().map(|s| s.to_string()).collect();
        let out = derive(
            &source,
            "",
            &[],
            SortKey::Favorites,
            &favorites,
            &no_membership(),
            false,
        );
        // Original relative order, no re-sort.
        assert_eq!(names(&out), vec!["charmander", "squirtle"]);
    }

    #[test]
    fn test_favorites_filter_applies_with_type_filters() {
        let source = vec![resource("charizard", 6), resource("moltres", 146)];
        let favorites: HashSet<String> = ["moltres"].iter().map(|s| s.to_string()).collect();
        let mut membership = HashMap::new();
        membership.insert(
            "fire".to_string(),
            ["charizard", "moltres"].iter().map(|s| s.to_string()).collect::<HashSet<_>>(),
        );
        let out = derive(
            &source,
            "",
            &["fire".to_string()],
            SortKey::Favorites,
            &favorites,
            &membership,
            false,
        );
        assert_eq!(names(&out), vec!["moltres"]);
    }

    #[test]
    fn test_total_pages_math() {
        assert_eq!(total_pages(50, 24), 3);
        assert_eq!(total_pages(48, 24), 2);
        assert_eq!(total_pages(0, 24), 1);
        assert_eq!(total_pages(1, 24), 1);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(4, 3), 3);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(u32::MAX, 3), 3);
    }

    #[test]
    fn test_page_window_slices() {
        let list: Vec<NamedResource> = (1..=50).map(|i| resource(&format!("mon{}", i), i)).collect();
        assert_eq!(page_window(&list, 1, 24).len(), 24);
        assert_eq!(page_window(&list, 3, 24).len(), 2);
        assert!(page_window(&list, 4, 24).is_empty());
    }

    // A page number this large can only come from a hand-edited URL; it
    // must yield an empty window, not an arithmetic overflow.
    #[test]
    fn test_page_window_url_supplied_extreme_page() {
        let list: Vec<NamedResource> = (1..=5).map(|i| resource(&format!("mon{}", i), i)).collect();
        assert!(page_window(&list, u32::MAX, 24).is_empty());
        assert!(page_window(&[], u32::MAX, 24).is_empty());
    }
}
