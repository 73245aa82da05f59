//! Delivery-mode exemption rules.
//!
//! A section's delivery mode decides which checks apply to it:
//!
//! | Predicate | Default modes | Effect |
//! |-----------|---------------|--------|
//! | room exempt | `OS`, `PS`, `AO` | no physical room is booked |
//! | time exempt | `AO` | no fixed meeting time |
//! | instructor shareable | `OS`, `PS` | one instructor may teach overlapping sections |
//!
//! Instructor sharing applies only when *both* sections are in that set.
//!
//! The vocabulary is configuration. Institutions with other mode codes load
//! their own via [`ModeRules::from_json`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// In person.
pub const IN_PERSON: &str = "IP";
/// Fully online with a synchronous schedule.
pub const ONLINE_SYNCHRONOUS: &str = "OS";
/// Partially synchronous online.
pub const PARTIALLY_SYNCHRONOUS: &str = "PS";
/// Arranged only: no fixed time or room.
pub const ARRANGED_ONLY: &str = "AO";
/// Hybrid: in person with an online component.
pub const HYBRID: &str = "HY";

/// Mode-rule configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid mode rules: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Mode vocabularies for the three exemption predicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeRules {
    /// Modes that do not book a physical room.
    pub room_exempt: BTreeSet<String>,
    /// Modes without a meaningful fixed time.
    pub time_exempt: BTreeSet<String>,
    /// Synchronous-online modes that may share an instructor.
    pub instructor_shareable: BTreeSet<String>,
}

impl Default for ModeRules {
    fn default() -> Self {
        Self {
            room_exempt: set(&[ONLINE_SYNCHRONOUS, PARTIALLY_SYNCHRONOUS, ARRANGED_ONLY]),
            time_exempt: set(&[ARRANGED_ONLY]),
            instructor_shareable: set(&[ONLINE_SYNCHRONOUS, PARTIALLY_SYNCHRONOUS]),
        }
    }
}

fn set(modes: &[&str]) -> BTreeSet<String> {
    modes.iter().map(|m| m.to_string()).collect()
}

impl ModeRules {
    /// Loads a vocabulary from JSON. Missing fields keep their defaults.
    ///
    /// ```
    /// use course_conflicts::modes::ModeRules;
    ///
    /// let rules = ModeRules::from_json(r#"{ "time_exempt": ["ARR", "AO"] }"#).unwrap();
    /// assert!(rules.is_time_exempt("ARR"));
    /// assert!(rules.is_room_exempt("OS"));
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Whether two mode codes name the same mode (surrounding whitespace ignored).
    pub fn same_mode(mode_a: &str, mode_b: &str) -> bool {
        mode_a.trim() == mode_b.trim()
    }

    /// No physical room is actually booked.
    pub fn is_room_exempt(&self, mode: &str) -> bool {
        self.room_exempt.contains(mode.trim())
    }

    /// A time mismatch is not a conflict signal.
    pub fn is_time_exempt(&self, mode: &str) -> bool {
        self.time_exempt.contains(mode.trim())
    }

    /// Both sides are synchronous-online, so one instructor may teach both.
    pub fn is_instructor_exempt_pair(&self, mode_a: &str, mode_b: &str) -> bool {
        self.instructor_shareable.contains(mode_a.trim())
            && self.instructor_shareable.contains(mode_b.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_room_exemptions() {
        let rules = ModeRules::default();
        assert!(rules.is_room_exempt(ONLINE_SYNCHRONOUS));
        assert!(rules.is_room_exempt(PARTIALLY_SYNCHRONOUS));
        assert!(rules.is_room_exempt(ARRANGED_ONLY));
        assert!(!rules.is_room_exempt(IN_PERSON));
        assert!(!rules.is_room_exempt(HYBRID));
        assert!(!rules.is_room_exempt(""));
    }

    #[test]
    fn test_only_arranged_is_time_exempt() {
        let rules = ModeRules::default();
        assert!(rules.is_time_exempt(ARRANGED_ONLY));
        assert!(rules.is_time_exempt(" AO "));
        for mode in [IN_PERSON, ONLINE_SYNCHRONOUS, PARTIALLY_SYNCHRONOUS, HYBRID] {
            assert!(!rules.is_time_exempt(mode));
        }
    }

    #[test]
    fn test_instructor_exemption_needs_both_sides() {
        let rules = ModeRules::default();
        assert!(rules.is_instructor_exempt_pair(ONLINE_SYNCHRONOUS, PARTIALLY_SYNCHRONOUS));
        assert!(rules.is_instructor_exempt_pair(PARTIALLY_SYNCHRONOUS, PARTIALLY_SYNCHRONOUS));
        assert!(!rules.is_instructor_exempt_pair(ONLINE_SYNCHRONOUS, IN_PERSON));
        assert!(!rules.is_instructor_exempt_pair(IN_PERSON, ONLINE_SYNCHRONOUS));
        assert!(!rules.is_instructor_exempt_pair(ARRANGED_ONLY, ONLINE_SYNCHRONOUS));
    }

    #[test]
    fn test_same_mode_ignores_padding() {
        assert!(ModeRules::same_mode("IP", " IP "));
        assert!(!ModeRules::same_mode("IP", "OS"));
        assert!(!ModeRules::same_mode("ip", "IP"));
    }

    #[test]
    fn test_from_json_overrides_and_defaults() {
        let rules = ModeRules::from_json(
            r#"{ "room_exempt": ["WEB"], "instructor_shareable": ["WEB", "LIVE"] }"#,
        )
        .unwrap();
        assert!(rules.is_room_exempt("WEB"));
        assert!(!rules.is_room_exempt(ONLINE_SYNCHRONOUS));
        assert!(rules.is_instructor_exempt_pair("WEB", "LIVE"));
        assert!(rules.is_time_exempt(ARRANGED_ONLY));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            ModeRules::from_json("{ room_exempt: 3 }"),
            Err(ConfigError::Parse(_))
        ));
    }
}
