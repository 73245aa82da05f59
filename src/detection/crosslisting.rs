//! Crosslisting drift.
//!
//! Crosslisted sections are one class listed under several subjects, so they
//! must share an instructor, a room and a meeting time. Each divergence is
//! reported as its own conflict kind.

use super::ScheduleOracle;
use crate::models::{matches, Anomaly, Conflict, ConflictKind, Section};
use crate::modes::ModeRules;

/// Finds crosslisted pairs that have drifted apart.
///
/// The oracle is asked once per unordered pair of active sections. A section
/// reported as crosslisted with itself is handed to `on_anomaly` and skipped.
pub fn classify<O: ScheduleOracle + ?Sized>(
    sections: &[&Section],
    oracle: &O,
    rules: &ModeRules,
    on_anomaly: &mut dyn FnMut(Anomaly),
) -> Result<Vec<Conflict>, O::Error> {
    let mut conflicts = Vec::new();

    for (i, c1) in sections.iter().enumerate() {
        if c1.is_removed() {
            continue;
        }
        for c2 in &sections[i + 1..] {
            if c2.is_removed() || !oracle.are_crosslisted(c1.id, c2.id)? {
                continue;
            }
            if c1.id == c2.id {
                on_anomaly(Anomaly::SelfCrosslisted { id: c1.id });
                continue;
            }

            if let (Some(a), Some(b)) = (c1.assigned_instructor(), c2.assigned_instructor()) {
                if a != b {
                    conflicts.push(Conflict::new(ConflictKind::CrosslistingInstructor, c1, c2));
                }
            }

            if let (Some(a), Some(b)) = (c1.assigned_room(), c2.assigned_room()) {
                if a != b && !rules.is_room_exempt(&c1.mode) && !rules.is_room_exempt(&c2.mode) {
                    conflicts.push(Conflict::new(ConflictKind::CrosslistingRoom, c1, c2));
                }
            }

            if !matches(c1.time_slot.as_ref(), c2.time_slot.as_ref())
                && !rules.is_time_exempt(&c1.mode)
                && !rules.is_time_exempt(&c2.mode)
            {
                conflicts.push(Conflict::new(ConflictKind::CrosslistingTime, c1, c2));
            }
        }
    }

    Ok(conflicts)
}
