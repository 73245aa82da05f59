//! Section deduplication across the two input lists.
//!
//! The course-range and crosslisting checks run over the union of both
//! lists, keyed by CRN, so a section present in both lists is never compared
//! with itself. The instructor/room check does NOT use this; it compares the
//! raw cross product.

use std::collections::HashSet;

use crate::models::Section;

/// Merges two lists into one, unique by section id.
///
/// Every entry of `first` is inserted before any entry of `second`; on an id
/// collision the earlier entry wins. Output order is insertion order.
pub fn merge_unique<'a>(first: &'a [Section], second: &'a [Section]) -> Vec<&'a Section> {
    let mut seen: HashSet<u32> = HashSet::with_capacity(first.len() + second.len());
    first
        .iter()
        .chain(second.iter())
        .filter(|s| seen.insert(s.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_list_wins() {
        let a = vec![Section::new(1, "CS", "1400").with_instructor(5)];
        let b = vec![
            Section::new(1, "CS", "1400").with_instructor(9),
            Section::new(2, "CS", "1410"),
        ];
        let merged = merge_unique(&a, &b);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].id, 1);
        assert_eq!(merged[0].instructor_id, Some(5));
        assert_eq!(merged[1].id, 2);
    }

    #[test]
    fn test_duplicates_within_one_list_collapse() {
        let a = vec![Section::new(1, "CS", "1400"), Section::new(1, "CS", "1400")];
        let merged = merge_unique(&a, &[]);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_order_is_insertion_order() {
        let a = vec![Section::new(30, "CS", "3"), Section::new(10, "CS", "1")];
        let b = vec![Section::new(20, "CS", "2"), Section::new(30, "CS", "3")];
        let ids: Vec<u32> = merge_unique(&a, &b).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(merge_unique(&[], &[]).is_empty());
    }
}
