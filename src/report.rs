//! Conflict report assembly and queries.
//!
//! # Ordering
//! Classifiers emit pairs in input order, which callers should not rely on.
//! The report sorts conflicts by kind, then by the smaller CRN of the pair,
//! then by the larger. Ties keep emission order. Within a conflict, `first`
//! and `second` keep the orientation the classifier gave them (for
//! instructor/room conflicts, `first` comes from the first input list).

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::models::{Anomaly, Conflict, ConflictKind};

/// Result of one detection run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// All conflicts, canonically ordered.
    pub conflicts: Vec<Conflict>,
    /// Recoverable data anomalies seen during the run.
    pub anomalies: Vec<Anomaly>,
}

/// Per-kind conflict counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictSummary {
    /// Count per kind (kinds with no conflicts are present with 0).
    pub by_kind: BTreeMap<ConflictKind, usize>,
    /// Total conflicts.
    pub total: usize,
    /// Distinct sections appearing in at least one conflict.
    pub sections_involved: usize,
    /// Number of anomalies.
    pub anomalies: usize,
}

impl ConflictReport {
    /// Builds a report, putting conflicts into canonical order.
    pub fn new(mut conflicts: Vec<Conflict>, anomalies: Vec<Anomaly>) -> Self {
        conflicts.sort_by_key(|c| (c.kind, c.ids()));
        Self {
            conflicts,
            anomalies,
        }
    }

    /// No conflicts were found. Anomalies do not count.
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Number of conflicts.
    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    /// Whether there are no conflicts.
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Conflicts of one kind.
    pub fn of_kind(&self, kind: ConflictKind) -> Vec<&Conflict> {
        self.conflicts.iter().filter(|c| c.kind == kind).collect()
    }

    /// Number of conflicts of one kind.
    pub fn count(&self, kind: ConflictKind) -> usize {
        self.conflicts.iter().filter(|c| c.kind == kind).count()
    }

    /// Conflicts grouped by kind. Only kinds that occur are present.
    pub fn grouped(&self) -> BTreeMap<ConflictKind, Vec<&Conflict>> {
        let mut groups: BTreeMap<ConflictKind, Vec<&Conflict>> = BTreeMap::new();
        for c in &self.conflicts {
            groups.entry(c.kind).or_default().push(c);
        }
        groups
    }

    /// Conflicts involving a section.
    pub fn involving(&self, section_id: u32) -> Vec<&Conflict> {
        self.conflicts
            .iter()
            .filter(|c| c.involves(section_id))
            .collect()
    }

    /// Order-insensitive view: `(kind, smaller id, larger id)`.
    ///
    /// Duplicates collapse; use [`len`](Self::len) for multiplicity.
    pub fn pairs(&self) -> BTreeSet<(ConflictKind, u32, u32)> {
        self.conflicts
            .iter()
            .map(|c| {
                let (a, b) = c.ids();
                (c.kind, a, b)
            })
            .collect()
    }

    /// Counts per kind.
    pub fn summary(&self) -> ConflictSummary {
        let mut by_kind: BTreeMap<ConflictKind, usize> =
            ConflictKind::ALL.iter().map(|k| (*k, 0)).collect();
        let mut sections = BTreeSet::new();
        for c in &self.conflicts {
            *by_kind.entry(c.kind).or_insert(0) += 1;
            sections.insert(c.first.id);
            sections.insert(c.second.id);
        }
        ConflictSummary {
            by_kind,
            total: self.conflicts.len(),
            sections_involved: sections.len(),
            anomalies: self.anomalies.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;

    fn conflict(kind: ConflictKind, a: u32, b: u32) -> Conflict {
        Conflict::new(kind, &Section::new(a, "CS", "1400"), &Section::new(b, "CS", "1410"))
    }

    fn sample_report() -> ConflictReport {
        ConflictReport::new(
            vec![
                conflict(ConflictKind::CrosslistingTime, 5, 6),
                conflict(ConflictKind::Course, 4, 2),
                conflict(ConflictKind::Instructor, 3, 1),
                conflict(ConflictKind::Course, 1, 3),
                conflict(ConflictKind::Room, 3, 1),
            ],
            vec![Anomaly::SelfCrosslisted { id: 9 }],
        )
    }

    #[test]
    fn test_canonical_order() {
        let r = sample_report();
        let order: Vec<(ConflictKind, (u32, u32))> =
            r.conflicts.iter().map(|c| (c.kind, c.ids())).collect();
        assert_eq!(
            order,
            vec![
                (ConflictKind::Instructor, (1, 3)),
                (ConflictKind::Room, (1, 3)),
                (ConflictKind::Course, (1, 3)),
                (ConflictKind::Course, (2, 4)),
                (ConflictKind::CrosslistingTime, (5, 6)),
            ]
        );
        // Orientation is kept.
        assert_eq!(r.conflicts[0].first.id, 3);
    }

    #[test]
    fn test_queries() {
        let r = sample_report();
        assert_eq!(r.len(), 5);
        assert!(!r.is_clean());
        assert_eq!(r.count(ConflictKind::Course), 2);
        assert_eq!(r.of_kind(ConflictKind::Room).len(), 1);
        assert_eq!(r.involving(3).len(), 3);
        assert!(r.involving(42).is_empty());

        let groups = r.grouped();
        assert_eq!(groups.len(), 4);
        assert!(!groups.contains_key(&ConflictKind::CrosslistingRoom));
        assert!(r.pairs().contains(&(ConflictKind::Course, 2, 4)));
    }

    #[test]
    fn test_summary() {
        let s = sample_report().summary();
        assert_eq!(s.total, 5);
        assert_eq!(s.by_kind[&ConflictKind::Course], 2);
        assert_eq!(s.by_kind[&ConflictKind::CrosslistingRoom], 0);
        assert_eq!(s.sections_involved, 6);
        assert_eq!(s.anomalies, 1);
    }

    #[test]
    fn test_empty_report() {
        let r = ConflictReport::default();
        assert!(r.is_clean());
        assert!(r.grouped().is_empty());
        assert_eq!(r.summary().total, 0);
    }

    #[test]
    fn test_json_round_trip() {
        let r = sample_report();
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"kind\":\"crosslisting-time\""));
        let back: ConflictReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
