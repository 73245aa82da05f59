//! Conflict and anomaly records produced by a detection run.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Section;

/// Classification of section conflicts.
///
/// Ordering follows declaration order and is used for report sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictKind {
    /// Same instructor teaching two overlapping sections.
    Instructor,
    /// Same room booked by two overlapping sections.
    Room,
    /// Two overlapping sections of peer-level courses in one subject.
    Course,
    /// Crosslisted twins taught by different instructors.
    CrosslistingInstructor,
    /// Crosslisted twins placed in different rooms.
    CrosslistingRoom,
    /// Crosslisted twins meeting at different times.
    CrosslistingTime,
}

impl ConflictKind {
    /// All kinds, in report order.
    pub const ALL: [ConflictKind; 6] = [
        ConflictKind::Instructor,
        ConflictKind::Room,
        ConflictKind::Course,
        ConflictKind::CrosslistingInstructor,
        ConflictKind::CrosslistingRoom,
        ConflictKind::CrosslistingTime,
    ];

    /// Stable tag, e.g. `"crosslisting-time"`.
    pub fn label(&self) -> &'static str {
        match self {
            ConflictKind::Instructor => "instructor",
            ConflictKind::Room => "room",
            ConflictKind::Course => "course",
            ConflictKind::CrosslistingInstructor => "crosslisting-instructor",
            ConflictKind::CrosslistingRoom => "crosslisting-room",
            ConflictKind::CrosslistingTime => "crosslisting-time",
        }
    }

    /// Whether this kind comes from the crosslisting pass.
    pub fn is_crosslisting(&self) -> bool {
        matches!(
            self,
            ConflictKind::CrosslistingInstructor
                | ConflictKind::CrosslistingRoom
                | ConflictKind::CrosslistingTime
        )
    }
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Two sections that cannot coexist, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub kind: ConflictKind,
    pub first: Section,
    pub second: Section,
}

impl Conflict {
    /// Creates a conflict; `first` and `second` keep the given orientation.
    pub fn new(kind: ConflictKind, first: &Section, second: &Section) -> Self {
        Self {
            kind,
            first: first.clone(),
            second: second.clone(),
        }
    }

    /// Participant ids as `(smaller, larger)`.
    pub fn ids(&self) -> (u32, u32) {
        let (a, b) = (self.first.id, self.second.id);
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Whether a section takes part in this conflict.
    pub fn involves(&self, section_id: u32) -> bool {
        self.first.id == section_id || self.second.id == section_id
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} conflict: {} {} ({}) / {} {} ({})",
            self.kind,
            self.first.prefix,
            self.first.course_number,
            self.first.id,
            self.second.prefix,
            self.second.course_number,
            self.second.id
        )
    }
}

/// A data problem found during a run that does not abort it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Anomaly {
    /// The crosslisting relation pairs a section with itself.
    SelfCrosslisted { id: u32 },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::SelfCrosslisted { id } => {
                write!(f, "section {id} is crosslisted with itself")
            }
        }
    }
}
