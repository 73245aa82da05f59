//! Course scheduling domain models.
//!
//! Plain records handed to the engine by the persistence layer, and the
//! records the engine hands back.
//!
//! | Type | Meaning |
//! |------|---------|
//! | Section | One scheduled offering (CRN) |
//! | TimeSlot | Weekly meeting pattern |
//! | PrerequisiteEdge | Course A must precede course B |
//! | Conflict | Two sections that cannot coexist |
//! | Anomaly | Recoverable data problem seen during a run |

mod conflict;
mod prerequisite;
mod section;
mod time_slot;

pub use conflict::{Anomaly, Conflict, ConflictKind};
pub use prerequisite::{CourseKey, PrerequisiteEdge};
pub use section::{Section, REMOVED_STATUS};
pub use time_slot::{matches, overlaps, DaySet, TimeSlot, TimeSlotError};
