//! Input validation for detection runs.
//!
//! Optional pre-flight checks a caller may run on data from the persistence
//! layer. Detection itself tolerates every problem reported here (a cycle in
//! prerequisites only shortens a search), so these checks are for surfacing
//! data-quality issues, not for guarding the engine. Detects:
//! - Duplicate CRNs within one list
//! - Empty subject prefix or course number
//! - Time slots that end before they start, or meet on no day
//! - Self-referencing and circular prerequisites
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::models::{CourseKey, PrerequisiteEdge, Section};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two sections share the same CRN.
    DuplicateId,
    /// Prefix or course number is blank.
    MissingCourse,
    /// Time slot start is not before its end.
    InvertedTimeSlot,
    /// Time slot has no meeting day.
    NoMeetingDays,
    /// A course lists itself as a prerequisite.
    SelfPrerequisite,
    /// Prerequisite graph contains a cycle.
    CyclicPrerequisite,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates one list of sections.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_sections(sections: &[Section]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for s in sections {
        if !ids.insert(s.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate section ID: {}", s.id),
            ));
        }

        if s.prefix.trim().is_empty() || s.course_number.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingCourse,
                format!("Section {} has no prefix or course number", s.id),
            ));
        }

        if let Some(slot) = &s.time_slot {
            if !slot.is_well_formed() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvertedTimeSlot,
                    format!("Section {} meets {} which ends before it starts", s.id, slot),
                ));
            }
            if slot.days.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NoMeetingDays,
                    format!("Section {} has a time slot with no meeting days", s.id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates prerequisite edges: no self-loops, no cycles.
pub fn validate_prerequisites(edges: &[PrerequisiteEdge]) -> ValidationResult {
    let mut errors = Vec::new();

    // Build adjacency list: predecessor → successors
    let mut adj: HashMap<CourseKey, Vec<CourseKey>> = HashMap::new();
    let mut all_keys: BTreeSet<CourseKey> = BTreeSet::new();

    for edge in edges {
        let from = edge.predecessor();
        let to = edge.successor();
        if from == to {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfPrerequisite,
                format!("Course '{from}' lists itself as a prerequisite"),
            ));
            continue;
        }
        all_keys.insert(from.clone());
        all_keys.insert(to.clone());
        adj.entry(from).or_default().push(to);
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for node in &all_keys {
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            errors.push(ValidationError::new(
                ValidationErrorKind::CyclicPrerequisite,
                format!("Circular prerequisite detected involving course '{node}'"),
            ));
            break;
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn has_cycle_dfs<'a>(
    node: &'a CourseKey,
    adj: &'a HashMap<CourseKey, Vec<CourseKey>>,
    visited: &mut HashSet<&'a CourseKey>,
    in_stack: &mut HashSet<&'a CourseKey>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}
