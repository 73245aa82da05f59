//! Conflict detection between two lists of sections.
//!
//! Runs three independent classifiers and assembles their output:
//!
//! | Classifier | Input | Kinds |
//! |------------|-------|-------|
//! | [`instructor_room`] | `first × second` cross product | instructor, room |
//! | [`course_range`] | deduplicated union, unordered pairs | course |
//! | [`crosslisting`] | deduplicated union, unordered pairs | crosslisting-* |
//!
//! Crosslisting and prerequisite data come from a [`ScheduleOracle`] passed in
//! by the caller. Any oracle error aborts the run; no partial report is built.
//!
//! # Usage
//!
//! ```
//! use course_conflicts::detection::{ConflictDetector, InMemoryOracle};
//! use course_conflicts::models::{ConflictKind, Section, TimeSlot};
//!
//! let slot = TimeSlot::parse("MWF", "10:00", "10:50").unwrap();
//! let a = vec![Section::new(12345, "CS", "2150").with_time_slot(slot.clone())];
//! let b = vec![Section::new(12346, "CS", "2200").with_time_slot(slot)];
//!
//! let oracle = InMemoryOracle::new();
//! let report = ConflictDetector::new(&oracle).detect(&a, &b).unwrap();
//! assert_eq!(report.count(ConflictKind::Course), 1);
//! ```

pub mod course_range;
pub mod crosslisting;
pub mod instructor_room;

use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt::Debug;

use crate::dedup::merge_unique;
use crate::models::{Anomaly, PrerequisiteEdge, Section};
use crate::modes::ModeRules;
use crate::prerequisites::PrerequisiteGraph;
use crate::report::ConflictReport;

/// External lookups the engine needs but does not own.
///
/// Implementations are typically backed by the scheduling database. Calls are
/// ordinary blocking calls; retries, if wanted, belong inside the implementation.
pub trait ScheduleOracle {
    /// Error surfaced unmodified to the caller of [`ConflictDetector::detect`].
    type Error: std::error::Error;

    /// Every predecessor → successor prerequisite edge.
    fn prerequisite_edges(&self) -> Result<Vec<PrerequisiteEdge>, Self::Error>;

    /// Whether two sections are crosslisted. Must be symmetric.
    fn are_crosslisted(&self, first_id: u32, second_id: u32) -> Result<bool, Self::Error>;
}

/// Oracle over data already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOracle {
    edges: Vec<PrerequisiteEdge>,
    crosslisted: HashSet<(u32, u32)>,
}

impl InMemoryOracle {
    /// Creates an oracle with no edges and no crosslistings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a prerequisite edge.
    pub fn with_prerequisite(mut self, edge: PrerequisiteEdge) -> Self {
        self.edges.push(edge);
        self
    }

    /// Marks two sections as crosslisted (order does not matter).
    pub fn with_crosslisting(mut self, first_id: u32, second_id: u32) -> Self {
        self.crosslisted.insert(ordered(first_id, second_id));
        self
    }

    /// Prerequisite edges held by this oracle.
    pub fn edges(&self) -> &[PrerequisiteEdge] {
        &self.edges
    }
}

fn ordered(a: u32, b: u32) -> (u32, u32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl ScheduleOracle for InMemoryOracle {
    type Error = Infallible;

    fn prerequisite_edges(&self) -> Result<Vec<PrerequisiteEdge>, Self::Error> {
        Ok(self.edges.clone())
    }

    fn are_crosslisted(&self, first_id: u32, second_id: u32) -> Result<bool, Self::Error> {
        Ok(self.crosslisted.contains(&ordered(first_id, second_id)))
    }
}

/// Receives recoverable data anomalies as they are found.
pub trait AnomalySink: Debug {
    fn record(&self, anomaly: &Anomaly);
}

/// Discards anomalies. They still appear in the report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl AnomalySink for NoopSink {
    fn record(&self, _anomaly: &Anomaly) {}
}

/// Writes one `WARN:` line per anomaly to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl AnomalySink for StderrSink {
    fn record(&self, anomaly: &Anomaly) {
        eprintln!("WARN: {anomaly}");
    }
}

/// Conflict detection entry point.
///
/// Holds only borrowed collaborators and mode rules; every call to
/// [`detect`](Self::detect) rebuilds its prerequisite graph from scratch.
#[derive(Debug)]
pub struct ConflictDetector<'a, O: ScheduleOracle + ?Sized> {
    oracle: &'a O,
    rules: ModeRules,
    sink: &'a dyn AnomalySink,
}

impl<'a, O: ScheduleOracle + ?Sized> ConflictDetector<'a, O> {
    /// Creates a detector with default mode rules and a silent sink.
    pub fn new(oracle: &'a O) -> Self {
        Self {
            oracle,
            rules: ModeRules::default(),
            sink: &NoopSink,
        }
    }

    /// Uses a custom mode vocabulary.
    pub fn with_rules(mut self, rules: ModeRules) -> Self {
        self.rules = rules;
        self
    }

    /// Forwards anomalies to `sink` as they are found.
    pub fn with_sink(mut self, sink: &'a dyn AnomalySink) -> Self {
        self.sink = sink;
        self
    }

    /// Mode rules in use.
    pub fn rules(&self) -> &ModeRules {
        &self.rules
    }

    /// Detects every conflict between `first` and `second`.
    ///
    /// # Errors
    /// Returns the oracle's error unchanged if the prerequisite fetch or any
    /// crosslisting lookup fails.
    pub fn detect(
        &self,
        first: &[Section],
        second: &[Section],
    ) -> Result<ConflictReport, O::Error> {
        let edges = self.oracle.prerequisite_edges()?;
        let prerequisites = PrerequisiteGraph::from_edges(&edges);

        let mut conflicts = instructor_room::classify(first, second, &self.rules);

        let merged = merge_unique(first, second);
        conflicts.extend(course_range::classify(&merged, self.oracle, &prerequisites)?);

        let mut anomalies = Vec::new();
        let sink = self.sink;
        conflicts.extend(crosslisting::classify(
            &merged,
            self.oracle,
            &self.rules,
            &mut |anomaly: Anomaly| {
                sink.record(&anomaly);
                anomalies.push(anomaly);
            },
        )?);

        Ok(ConflictReport::new(conflicts, anomalies))
    }
}

/// Detects conflicts with default mode rules and no anomaly logging.
pub fn detect_conflicts<O: ScheduleOracle + ?Sized>(
    oracle: &O,
    first: &[Section],
    second: &[Section],
) -> Result<ConflictReport, O::Error> {
    ConflictDetector::new(oracle).detect(first, second)
}
