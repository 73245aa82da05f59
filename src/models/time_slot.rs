//! Time slot geometry.
//!
//! A time slot is a weekly meeting pattern: a set of weekdays (Mon–Fri)
//! plus a daily clock interval `[start, end)`.
//!
//! # Overlap
//! Two slots overlap iff they share at least one day AND their intervals
//! intersect under half-open semantics. Touching endpoints (`a.end == b.start`)
//! do not overlap.
//!
//! # Missing slots
//! A section without a slot never overlaps or matches anything, including
//! another section without a slot. See [`overlaps`] and [`matches`].

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a time slot from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeSlotError {
    #[error("Invalid clock time '{text}' (expected HH:MM)")]
    InvalidTime { text: String },

    #[error("Unknown meeting day '{day}' in '{text}'")]
    InvalidDay { day: char, text: String },

    #[error("Time slot must start before it ends ({start} >= {end})")]
    EmptyInterval { start: NaiveTime, end: NaiveTime },
}

/// The weekdays a slot meets on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DaySet {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
}

impl DaySet {
    /// Parses registrar day letters, e.g. `"MWF"` or `"TR"`.
    ///
    /// `R` is Thursday (`H` and `U` are accepted as well). Whitespace is ignored.
    pub fn parse(text: &str) -> Result<Self, TimeSlotError> {
        let mut days = Self::default();
        for c in text.chars().filter(|c| !c.is_whitespace()) {
            match c.to_ascii_uppercase() {
                'M' => days.monday = true,
                'T' => days.tuesday = true,
                'W' => days.wednesday = true,
                'R' | 'H' | 'U' => days.thursday = true,
                'F' => days.friday = true,
                other => {
                    return Err(TimeSlotError::InvalidDay {
                        day: other,
                        text: text.to_string(),
                    })
                }
            }
        }
        Ok(days)
    }

    fn flags(&self) -> [bool; 5] {
        [
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
        ]
    }

    /// Whether at least one day is shared.
    pub fn intersects(&self, other: &Self) -> bool {
        self.flags()
            .iter()
            .zip(other.flags().iter())
            .any(|(a, b)| *a && *b)
    }

    /// Whether no day is set.
    pub fn is_empty(&self) -> bool {
        !self.flags().iter().any(|d| *d)
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (set, letter) in self.flags().iter().zip(['M', 'T', 'W', 'R', 'F']) {
            if *set {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// A weekly meeting pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Interval start (inclusive).
    pub start: NaiveTime,
    /// Interval end (exclusive).
    pub end: NaiveTime,
    /// Meeting days.
    pub days: DaySet,
}

impl TimeSlot {
    /// Creates a slot on the given days.
    ///
    /// No ordering check is done here; use [`TimeSlot::parse`] or
    /// [`crate::validation::validate_sections`] to reject inverted intervals.
    pub fn new(days: DaySet, start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end, days }
    }

    /// Builds a slot from day letters and `HH:MM` clock times.
    ///
    /// ```
    /// use course_conflicts::models::TimeSlot;
    ///
    /// let a = TimeSlot::parse("MWF", "10:00", "10:50").unwrap();
    /// let b = TimeSlot::parse("F", "10:30", "11:20").unwrap();
    /// assert!(a.overlaps(&b));
    /// ```
    pub fn parse(days: &str, start: &str, end: &str) -> Result<Self, TimeSlotError> {
        let days = DaySet::parse(days)?;
        let start = parse_clock(start)?;
        let end = parse_clock(end)?;
        if start >= end {
            return Err(TimeSlotError::EmptyInterval { start, end });
        }
        Ok(Self::new(days, start, end))
    }

    /// Shares a day and the intervals intersect.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.days.intersects(&other.days) && self.start < other.end && other.start < self.end
    }

    /// Identical days and identical endpoints.
    pub fn matches(&self, other: &Self) -> bool {
        self == other
    }

    /// Whether the interval is non-empty.
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.days,
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

fn parse_clock(text: &str) -> Result<NaiveTime, TimeSlotError> {
    let trimmed = text.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| TimeSlotError::InvalidTime {
            text: text.to_string(),
        })
}

/// Overlap over optional slots. A missing slot never overlaps.
pub fn overlaps(a: Option<&TimeSlot>, b: Option<&TimeSlot>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.overlaps(b),
        _ => false,
    }
}

/// Exact match over optional slots. A missing slot never matches, not even
/// another missing slot.
pub fn matches(a: Option<&TimeSlot>, b: Option<&TimeSlot>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.matches(b),
        _ => false,
    }
}
