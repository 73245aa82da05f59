//! Instructor and room double-booking.
//!
//! Compares every section of the first list against every section of the
//! second (cross product, no deduplication). The two checks are independent:
//! one pair may yield an instructor conflict, a room conflict, both or neither.

use crate::models::{overlaps, Conflict, ConflictKind, Section};
use crate::modes::ModeRules;

/// Finds instructor and room conflicts across two lists.
pub fn classify(first: &[Section], second: &[Section], rules: &ModeRules) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for s1 in first.iter().filter(|s| !s.is_removed()) {
        for s2 in second.iter().filter(|s| !s.is_removed()) {
            if !overlaps(s1.time_slot.as_ref(), s2.time_slot.as_ref()) {
                continue;
            }

            if let (Some(a), Some(b)) = (s1.assigned_instructor(), s2.assigned_instructor()) {
                if a == b && !rules.is_instructor_exempt_pair(&s1.mode, &s2.mode) {
                    conflicts.push(Conflict::new(ConflictKind::Instructor, s1, s2));
                }
            }

            if let (Some(a), Some(b)) = (s1.assigned_room(), s2.assigned_room()) {
                if a == b && !rules.is_room_exempt(&s1.mode) && !rules.is_room_exempt(&s2.mode) {
                    conflicts.push(Conflict::new(ConflictKind::Room, s1, s2));
                }
            }
        }
    }

    conflicts
}
