//! Course-range conflicts.
//!
//! Two overlapping sections in the same subject whose course numbers fall in
//! the same thousand-band compete for the same students. Exceptions, in order:
//!
//! 1. **Labs**: if either side is a lab, the pair conflicts only when exactly
//!    one side is a lab and both share the identical course number. Any other
//!    lab combination is skipped outright.
//! 2. **Mode**: the same course number offered in different delivery modes is
//!    two independent offerings.
//! 3. **Crosslisted or prerequisite-chained** pairs are exempt.
//!
//! The 4000s are not a band: 4000-level courses never share a range.

use serde::{Deserialize, Serialize};

use super::ScheduleOracle;
use crate::models::{Conflict, ConflictKind, Section};
use crate::modes::ModeRules;
use crate::prerequisites::PrerequisiteGraph;

/// Thousand-bands that count as peer-level courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseBand {
    /// 1000–1999.
    Lower,
    /// 2000–2999.
    Sophomore,
    /// 3000–3999.
    Upper,
    /// 5000–5999.
    Graduate,
    /// 6000–6999.
    Doctoral,
}

impl CourseBand {
    /// Band of a course number string, if any.
    pub fn of(course_number: &str) -> Option<Self> {
        match course_level(course_number)? {
            1000..=1999 => Some(CourseBand::Lower),
            2000..=2999 => Some(CourseBand::Sophomore),
            3000..=3999 => Some(CourseBand::Upper),
            5000..=5999 => Some(CourseBand::Graduate),
            6000..=6999 => Some(CourseBand::Doctoral),
            _ => None,
        }
    }
}

/// Numeric value of the leading digit run (`"2150H"` → 2150).
///
/// Returns `None` when the string does not start with a digit.
pub fn course_level(course_number: &str) -> Option<u32> {
    let trimmed = course_number.trim();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Whether both numbers fall in the same covered band.
pub fn in_same_range(a: &str, b: &str) -> bool {
    match (CourseBand::of(a), CourseBand::of(b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Finds course-range conflicts among deduplicated sections.
///
/// Each unordered pair is visited once. The crosslisting oracle is only
/// consulted for pairs that reach the exception check.
pub fn classify<O: ScheduleOracle + ?Sized>(
    sections: &[&Section],
    oracle: &O,
    prerequisites: &PrerequisiteGraph,
) -> Result<Vec<Conflict>, O::Error> {
    let mut conflicts = Vec::new();

    for (i, c1) in sections.iter().enumerate() {
        if c1.is_removed() {
            continue;
        }
        for c2 in &sections[i + 1..] {
            if c2.is_removed() || c1.prefix != c2.prefix {
                continue;
            }
            if !crate::models::overlaps(c1.time_slot.as_ref(), c2.time_slot.as_ref()) {
                continue;
            }
            if !in_same_range(&c1.course_number, &c2.course_number) {
                continue;
            }

            let same_number = c1.course_number == c2.course_number;
            if c1.lab || c2.lab {
                // Lecture vs. its own lab: students must take both.
                if c1.lab != c2.lab && same_number {
                    conflicts.push(Conflict::new(ConflictKind::Course, c1, c2));
                }
                continue;
            }
            if same_number && !ModeRules::same_mode(&c1.mode, &c2.mode) {
                continue;
            }

            let exempt = oracle.are_crosslisted(c1.id, c2.id)?
                || prerequisites.are_on_same_chain(
                    &c1.prefix,
                    &c1.course_number,
                    &c2.prefix,
                    &c2.course_number,
                );
            if !exempt {
                conflicts.push(Conflict::new(ConflictKind::Course, c1, c2));
            }
        }
    }

    Ok(conflicts)
}
