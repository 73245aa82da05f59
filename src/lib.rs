//! Conflict detection for university course schedules.
//!
//! Given two lists of scheduled sections (typically two schedules under
//! cross-department review), finds every pair that cannot coexist: shared
//! instructor or room at overlapping times, peer-level courses of one subject
//! at overlapping times, and crosslisted twins that have drifted apart.
//!
//! The engine is a pure classifier over an immutable snapshot. It never
//! mutates, resolves or schedules anything.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Section`, `TimeSlot`, `PrerequisiteEdge`,
//!   `Conflict`, `Anomaly`
//! - **`modes`**: Delivery-mode exemption rules (configurable vocabulary)
//! - **`prerequisites`**: Transitive prerequisite-chain queries with cycle guard
//! - **`dedup`**: Merging the two input lists by CRN
//! - **`detection`**: The classifiers, the collaborator trait and the entry point
//! - **`report`**: Canonically ordered conflict report
//! - **`validation`**: Optional input integrity checks
//!
//! # Collaborators
//!
//! Crosslisting and prerequisite data are owned by the surrounding
//! application and reached through [`detection::ScheduleOracle`]. The
//! prerequisite graph is rebuilt on every call; nothing persists between runs.

pub mod dedup;
pub mod detection;
pub mod models;
pub mod modes;
pub mod prerequisites;
pub mod report;
pub mod validation;

pub use detection::{detect_conflicts, ConflictDetector, InMemoryOracle, ScheduleOracle};
pub use report::{ConflictReport, ConflictSummary};
