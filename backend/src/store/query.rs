//! Lookups over a loaded mark list.

use std::collections::BTreeSet;

use crate::models::Mark;

/// Find a mark by its exact (case-sensitive) id.
pub fn find_by_name<'a>(marks: &'a [Mark], name: &str) -> Option<&'a Mark> {
    marks.iter().find(|m| m.id == name)
}

/// Sorted set of zone characters present in `marks`.
pub fn zones(marks: &[Mark]) -> BTreeSet<char> {
    marks.iter().filter_map(Mark::zone).collect()
}

/// Marks whose zone is in `zone_set`, in their original order.
///
/// An empty `zone_set` selects nothing. Callers that want every mark skip
/// filtering altogether.
pub fn filter_by_zone(marks: &[Mark], zone_set: &BTreeSet<char>) -> Vec<Mark> {
    if zone_set.is_empty() {
        return Vec::new();
    }
    marks
        .iter()
        .filter(|m| m.zone().is_some_and(|z| zone_set.contains(&z)))
        .cloned()
        .collect()
}

/// Parse a `zones` query value such as `"1, 2,3"`.
///
/// Each non-empty comma separated token contributes its first character.
/// Returns `None` when no zone is named, meaning "do not filter".
pub fn parse_zone_list(raw: &str) -> Option<BTreeSet<char>> {
    let set: BTreeSet<char> = raw
        .split(',')
        .filter_map(|token| token.trim().chars().next())
        .collect();
    if set.is_empty() {
        None
    } else {
        Some(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Symbol;

    fn sample_marks() -> Vec<Mark> {
        vec![
            Mark::new("1A", "North Ryde Middle", Symbol::Red, 50.7712, -1.1540),
            Mark::new("2B", "Browndown", Symbol::Yellow, 50.7790, -1.1790),
            Mark::new("1C", "Castle Point", Symbol::Green, 50.7660, -1.2880),
            Mark::new("3D", "Gurnard Ledge", Symbol::Other("YBY".to_string()), 50.7630, -1.3320),
            Mark::new("2a", "Lower case twin", Symbol::Black, 50.7700, -1.2000),
        ]
    }

    #[test]
    fn test_find_by_name_is_case_sensitive() {
        let marks = sample_marks();
        assert_eq!(find_by_name(&marks, "2B").map(|m| m.lat), Some(50.7790));
        assert_eq!(find_by_name(&marks, "2a").map(|m| m.description.as_str()), Some("Lower case twin"));
        assert!(find_by_name(&marks, "2b").is_none());
        assert!(find_by_name(&marks, "9Z").is_none());
    }

    #[test]
    fn test_zones_sorted_and_unique() {
        let marks = sample_marks();
        let z: Vec<char> = zones(&marks).into_iter().collect();
        assert_eq!(z, vec!['1', '2', '3']);
    }

    #[test]
    fn test_filter_by_empty_zone_set_is_empty() {
        let marks = sample_marks();
        assert!(filter_by_zone(&marks, &BTreeSet::new()).is_empty());
    }

    #[test]
    fn test_filter_by_zone_keeps_order() {
        let marks = sample_marks();
        let set: BTreeSet<char> = ['1', '2'].into_iter().collect();
        let filtered = filter_by_zone(&marks, &set);

        let ids: Vec<&str> = filtered.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1A", "2B", "1C", "2a"]);
        assert!(filtered.iter().all(|m| m.id.starts_with('1') || m.id.starts_with('2')));
    }

    #[test]
    fn test_filter_by_unknown_zone() {
        let marks = sample_marks();
        let set: BTreeSet<char> = ['9'].into_iter().collect();
        assert!(filter_by_zone(&marks, &set).is_empty());
    }

    #[test]
    fn test_parse_zone_list() {
        assert_eq!(parse_zone_list(""), None);
        assert_eq!(parse_zone_list(" , ,"), None);

        let parsed = parse_zone_list("1, 2,3").unwrap();
        assert_eq!(parsed.into_iter().collect::<Vec<_>>(), vec!['1', '2', '3']);

        let parsed = parse_zone_list("2,2").unwrap();
        assert_eq!(parsed.len(), 1);
    }
}
