//! Prerequisite chain resolution.
//!
//! Builds a directed graph (predecessor → successor) over course keys and
//! answers transitive "is A a prerequisite of B" queries.
//!
//! # Cycles
//! Prerequisite data is not assumed acyclic. Traversal keeps a visited set,
//! so a cycle only ends the search early; it never loops or fails.
//!
//! # Algorithm
//! Course keys are interned into graph node indices once. A query walks
//! incoming edges from the successor with an explicit stack (iterative DFS)
//! until the candidate predecessor is found or the ancestry is exhausted.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::models::{CourseKey, PrerequisiteEdge};

/// Prerequisite graph for one detection run.
#[derive(Debug, Clone, Default)]
pub struct PrerequisiteGraph {
    graph: DiGraph<CourseKey, ()>,
    index: HashMap<CourseKey, NodeIndex>,
}

impl PrerequisiteGraph {
    /// Builds the graph from raw edges. Duplicate edges collapse.
    pub fn from_edges(edges: &[PrerequisiteEdge]) -> Self {
        let mut g = Self::default();
        for edge in edges {
            let from = g.intern(edge.predecessor());
            let to = g.intern(edge.successor());
            if g.graph.find_edge(from, to).is_none() {
                g.graph.add_edge(from, to, ());
            }
        }
        g
    }

    fn intern(&mut self, key: CourseKey) -> NodeIndex {
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }
        let idx = self.graph.add_node(key.clone());
        self.index.insert(key, idx);
        idx
    }

    /// Number of distinct courses mentioned by any edge.
    pub fn course_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Direct predecessors of a course, sorted.
    pub fn predecessors_of(&self, course: &CourseKey) -> Vec<&CourseKey> {
        let Some(&idx) = self.index.get(course) else {
            return Vec::new();
        };
        let mut out: Vec<&CourseKey> = self
            .graph
            .neighbors_directed(idx, Direction::Incoming)
            .map(|n| &self.graph[n])
            .collect();
        out.sort();
        out
    }

    /// Whether `ancestor` is a (possibly indirect) prerequisite of `course`.
    ///
    /// A course is never its own prerequisite, even with a self-loop or a
    /// cycle back to itself in the data.
    pub fn is_prerequisite_of(&self, ancestor: &CourseKey, course: &CourseKey) -> bool {
        if ancestor == course {
            return false;
        }
        let (Some(&target), Some(&start)) = (self.index.get(ancestor), self.index.get(course))
        else {
            return false;
        };

        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut stack = vec![start];
        visited.insert(start);

        while let Some(node) = stack.pop() {
            for pred in self.graph.neighbors_directed(node, Direction::Incoming) {
                if pred == target {
                    return true;
                }
                if visited.insert(pred) {
                    stack.push(pred);
                }
            }
        }
        false
    }

    /// Whether either course is a (possibly indirect) prerequisite of the other.
    pub fn are_on_same_chain(
        &self,
        prefix_a: &str,
        number_a: &str,
        prefix_b: &str,
        number_b: &str,
    ) -> bool {
        let a = CourseKey::new(prefix_a, number_a);
        let b = CourseKey::new(prefix_b, number_b);
        self.is_prerequisite_of(&a, &b) || self.is_prerequisite_of(&b, &a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(prefix: &str, number: &str) -> CourseKey {
        CourseKey::new(prefix, number)
    }

    fn math_chain() -> PrerequisiteGraph {
        PrerequisiteGraph::from_edges(&[
            PrerequisiteEdge::new("MATH", "1050", "MATH", "2150"),
            PrerequisiteEdge::new("MATH", "2150", "MATH", "3150"),
        ])
    }

    #[test]
    fn test_transitive_chain_either_direction() {
        let g = math_chain();
        assert!(g.are_on_same_chain("MATH", "1050", "MATH", "3150"));
        assert!(g.are_on_same_chain("MATH", "3150", "MATH", "1050"));
        assert!(g.are_on_same_chain("MATH", "2150", "MATH", "3150"));
    }

    #[test]
    fn test_direction_of_single_query() {
        let g = math_chain();
        assert!(g.is_prerequisite_of(&key("MATH", "1050"), &key("MATH", "3150")));
        assert!(!g.is_prerequisite_of(&key("MATH", "3150"), &key("MATH", "1050")));
    }

    #[test]
    fn test_unrelated_courses() {
        let g = math_chain();
        assert!(!g.are_on_same_chain("MATH", "1050", "MATH", "1060"));
        assert!(!g.are_on_same_chain("MATH", "1050", "CS", "1050"));
    }

    #[test]
    fn test_siblings_are_not_on_same_chain() {
        // 1050 → 2150 and 1050 → 2270: the two successors are unrelated.
        let g = PrerequisiteGraph::from_edges(&[
            PrerequisiteEdge::new("MATH", "1050", "MATH", "2150"),
            PrerequisiteEdge::new("MATH", "1050", "MATH", "2270"),
        ]);
        assert!(!g.are_on_same_chain("MATH", "2150", "MATH", "2270"));
    }

    #[test]
    fn test_cross_subject_chain() {
        let g = PrerequisiteGraph::from_edges(&[
            PrerequisiteEdge::new("MATH", "1210", "PHYS", "2210"),
            PrerequisiteEdge::new("PHYS", "2210", "PHYS", "2220"),
        ]);
        assert!(g.are_on_same_chain("MATH", "1210", "PHYS", "2220"));
    }

    #[test]
    fn test_cycle_terminates() {
        // A → B → C → A
        let g = PrerequisiteGraph::from_edges(&[
            PrerequisiteEdge::new("CS", "1400", "CS", "1410"),
            PrerequisiteEdge::new("CS", "1410", "CS", "2420"),
            PrerequisiteEdge::new("CS", "2420", "CS", "1400"),
        ]);
        assert!(g.are_on_same_chain("CS", "1400", "CS", "2420"));
        assert!(!g.are_on_same_chain("CS", "1400", "CS", "9999"));
        assert!(!g.is_prerequisite_of(&key("CS", "1400"), &key("CS", "1400")));
    }

    #[test]
    fn test_self_loop_is_not_self_prerequisite() {
        let g = PrerequisiteGraph::from_edges(&[PrerequisiteEdge::new("CS", "1400", "CS", "1400")]);
        assert!(!g.are_on_same_chain("CS", "1400", "CS", "1400"));
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let g = PrerequisiteGraph::from_edges(&[
            PrerequisiteEdge::new("MATH", "1050", "MATH", "2150"),
            PrerequisiteEdge::new("MATH", "1050", "MATH", "2150"),
            PrerequisiteEdge::new("MATH", "1060", "MATH", "2150"),
        ]);
        assert_eq!(g.course_count(), 3);
        assert_eq!(g.edge_count(), 2);
        let preds = g.predecessors_of(&key("MATH", "2150"));
        assert_eq!(preds, vec![&key("MATH", "1050"), &key("MATH", "1060")]);
        assert!(g.predecessors_of(&key("MATH", "9999")).is_empty());
    }

    #[test]
    fn test_empty_graph() {
        let g = PrerequisiteGraph::from_edges(&[]);
        assert!(!g.are_on_same_chain("MATH", "1050", "MATH", "2150"));
    }
}
