//! Prerequisite edges and course keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a course (not a section) in the prerequisite graph.
///
/// Rendered as `"PREFIX NUMBER"`, e.g. `"MATH 1050"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseKey(String);

impl CourseKey {
    /// Builds a key from a prefix and course number, both trimmed.
    pub fn new(prefix: &str, number: &str) -> Self {
        Self(format!("{} {}", prefix.trim(), number.trim()))
    }

    /// Key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Predecessor → successor: the predecessor must be taken before the successor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrerequisiteEdge {
    pub predecessor_prefix: String,
    pub predecessor_number: String,
    pub successor_prefix: String,
    pub successor_number: String,
}

impl PrerequisiteEdge {
    /// Creates an edge from the predecessor course to the successor course.
    pub fn new(
        predecessor_prefix: impl Into<String>,
        predecessor_number: impl Into<String>,
        successor_prefix: impl Into<String>,
        successor_number: impl Into<String>,
    ) -> Self {
        Self {
            predecessor_prefix: predecessor_prefix.into(),
            predecessor_number: predecessor_number.into(),
            successor_prefix: successor_prefix.into(),
            successor_number: successor_number.into(),
        }
    }

    /// Key of the course taken first.
    pub fn predecessor(&self) -> CourseKey {
        CourseKey::new(&self.predecessor_prefix, &self.predecessor_number)
    }

    /// Key of the course that requires the predecessor.
    pub fn successor(&self) -> CourseKey {
        CourseKey::new(&self.successor_prefix, &self.successor_number)
    }
}
