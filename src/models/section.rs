//! Section model.
//!
//! A section is one scheduled offering of a course: a CRN bound to an
//! instructor, a room, a meeting pattern and a delivery mode. Sections are
//! read-only snapshots supplied by the persistence layer for one detection run.

use serde::{Deserialize, Serialize};

use super::{CourseKey, TimeSlot};

/// Lifecycle status that removes a section from every conflict check.
pub const REMOVED_STATUS: &str = "Removed";

/// A scheduled course section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Course reference number, unique per section.
    pub id: u32,
    /// Subject prefix (e.g., "CS", "MATH").
    pub prefix: String,
    /// Course number, may carry a letter suffix (e.g., "2150H").
    pub course_number: String,
    /// Section code within the course (e.g., "01", "50").
    pub section_code: String,
    /// Owning schedule.
    pub schedule_id: u32,
    /// Assigned instructor. `None` or `Some(0)` = unassigned.
    pub instructor_id: Option<u32>,
    /// Assigned room. `None` or `Some(0)` = unassigned.
    pub room_id: Option<u32>,
    /// Weekly meeting pattern. `None` = no fixed time.
    pub time_slot: Option<TimeSlot>,
    /// Delivery mode code (see [`crate::modes::ModeRules`]).
    pub mode: String,
    /// Laboratory component flag.
    pub lab: bool,
    /// Free-text lifecycle status.
    pub status: String,
}

impl Section {
    /// Creates an active, in-person, unassigned section.
    pub fn new(id: u32, prefix: impl Into<String>, course_number: impl Into<String>) -> Self {
        Self {
            id,
            prefix: prefix.into(),
            course_number: course_number.into(),
            section_code: String::new(),
            schedule_id: 0,
            instructor_id: None,
            room_id: None,
            time_slot: None,
            mode: String::new(),
            lab: false,
            status: String::new(),
        }
    }

    /// Sets the section code.
    pub fn with_section_code(mut self, code: impl Into<String>) -> Self {
        self.section_code = code.into();
        self
    }

    /// Sets the owning schedule.
    pub fn with_schedule(mut self, schedule_id: u32) -> Self {
        self.schedule_id = schedule_id;
        self
    }

    /// Assigns an instructor.
    pub fn with_instructor(mut self, instructor_id: u32) -> Self {
        self.instructor_id = Some(instructor_id);
        self
    }

    /// Assigns a room.
    pub fn with_room(mut self, room_id: u32) -> Self {
        self.room_id = Some(room_id);
        self
    }

    /// Sets the weekly meeting pattern.
    pub fn with_time_slot(mut self, slot: TimeSlot) -> Self {
        self.time_slot = Some(slot);
        self
    }

    /// Sets the delivery mode code.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Marks the section as a lab.
    pub fn as_lab(mut self) -> Self {
        self.lab = true;
        self
    }

    /// Sets the lifecycle status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Whether the section has been removed from its schedule.
    #[inline]
    pub fn is_removed(&self) -> bool {
        self.status == REMOVED_STATUS
    }

    /// Instructor id if one is actually assigned.
    #[inline]
    pub fn assigned_instructor(&self) -> Option<u32> {
        self.instructor_id.filter(|id| *id > 0)
    }

    /// Room id if one is actually assigned.
    #[inline]
    pub fn assigned_room(&self) -> Option<u32> {
        self.room_id.filter(|id| *id > 0)
    }

    /// Prerequisite-graph key for this section's course.
    pub fn course_key(&self) -> CourseKey {
        CourseKey::new(&self.prefix, &self.course_number)
    }
}
