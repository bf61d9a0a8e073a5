//! Approximate solver: a randomized greedy biclique cover, produced lazily.
//!
//! Each round samples a handful of still-uncovered edges, grows a maximal biclique from each via
//! the closure operator restricted to the uncovered edge set, keeps the candidate covering the
//! most uncovered edges and yields it. The seed edge itself serves as a fallback biclique, so
//! every round makes progress and the sequence is finite. Consuming the full sequence yields a
//! valid (not necessarily minimum) cover; callers may stop early once enough edges are covered.

use fxhash::FxHashSet;
use rand::seq::IteratorRandom;
use rand::thread_rng;
use crate::bipartite::CompleteBipartiteGraph;
use crate::closure;
use crate::cust_error::ValidationError;
use crate::graph::Graph;

/// A finite, non-restartable, pull-based sequence of bicliques covering a graph's edges.
#[derive(Debug, Clone)]
pub struct GreedyCover {
    uncovered: FxHashSet<(usize, usize)>,
    sample_size: Option<usize>,
}

impl GreedyCover {

    /// Prepares a lazy cover of `graph`. With `sample_size` of `None` each round samples up to
    /// ceil(sqrt(|uncovered|)) + 1 edges; a fixed value trades quality against runtime.
    /// Returns a `ValidationError` if `graph` holds a self-loop, which no biclique can cover.
    pub fn new(graph: &Graph, sample_size: Option<usize>) -> Result<Self, ValidationError> {
        let mut uncovered = FxHashSet::default();
        for edge in graph.edges() {
            let (u, v) = edge.endpoints();
            if edge.is_loop() {
                return Err(ValidationError::LoopInCoverTarget(u))
            }
            uncovered.insert((u.min(v), u.max(v)));
        }
        Ok(GreedyCover { uncovered, sample_size })
    }

    /// Returns the number of edges not yet covered by the yielded bicliques.
    pub fn remaining(&self) -> usize {
        self.uncovered.len()
    }

}

/// Neighbors of `v` with respect to an uncovered edge set.
pub(crate) fn uncovered_neighbors(uncovered: &FxHashSet<(usize, usize)>, v: usize) -> FxHashSet<usize> {
    uncovered
        .iter()
        .filter_map(|&(a, b)| {
            if a == v {
                Some(b)
            } else if b == v {
                Some(a)
            } else {
                None
            }
        })
        .collect()
}

impl Iterator for GreedyCover {
    type Item = CompleteBipartiteGraph;

    fn next(&mut self) -> Option<CompleteBipartiteGraph> {
        let &(seed_u, seed_v) = self.uncovered.iter().next()?;
        let sample_size = self
            .sample_size
            .unwrap_or_else(|| (self.uncovered.len() as f64).sqrt().ceil() as usize + 1);
        let sample: Vec<(usize, usize)> = if self.uncovered.len() <= sample_size {
            self.uncovered.iter().copied().collect()
        } else {
            self.uncovered.iter().copied().choose_multiple(&mut thread_rng(), sample_size)
        };
        // The seed edge is a biclique on its own, guaranteeing progress even if every closure
        // collapses.
        let mut best = CompleteBipartiteGraph::from_sides([seed_u], [seed_v])
            .expect("self-loops were rejected at construction");
        let mut best_covered = 0;
        let uncovered = &self.uncovered;
        let neighbors = |v: usize| uncovered_neighbors(uncovered, v);
        for &(a, b) in &sample {
            let (left, right) = closure::maximal_biclique_from_edge(a, b, &neighbors);
            if left.is_empty() || right.is_empty() {
                continue;
            }
            // Every left-right pair is an uncovered edge, per the closure guarantee.
            let covered = left.len() * right.len();
            if covered > best_covered {
                best = CompleteBipartiteGraph::from_sides(left.into_iter(), right.into_iter())
                    .expect("the closure keeps its sides disjoint");
                best_covered = covered;
            }
        }
        for (u, v) in best.edge_pairs() {
            self.uncovered.remove(&(u.min(v), u.max(v)));
        }
        Some(best)
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bipartite::is_valid_cover;

    const CROWN3: [(usize, usize); 6] = [(0, 3), (0, 4), (1, 3), (1, 5), (2, 4), (2, 5)];

    #[test]
    fn cover_is_valid_test() {
        let graph = Graph::from_pairs(&CROWN3).unwrap();
        let cover: Vec<CompleteBipartiteGraph> =
            GreedyCover::new(&graph, None).unwrap().collect();
        assert!(is_valid_cover(&graph, &cover));
        // The 3-crown has bipartite dimension 3, so no cover can be smaller.
        assert!(cover.len() >= 3);
    }

    #[test]
    fn complete_bipartite_single_round_test() {
        let pairs: Vec<(usize, usize)> = (0..3).flat_map(|u| (3..6).map(move |v| (u, v))).collect();
        let graph = Graph::from_pairs(&pairs).unwrap();
        let cover: Vec<CompleteBipartiteGraph> =
            GreedyCover::new(&graph, None).unwrap().collect();
        assert_eq!(cover.len(), 1);
        assert!(is_valid_cover(&graph, &cover));
    }

    #[test]
    fn degenerate_cases_test() {
        let empty = Graph::new();
        assert_eq!(GreedyCover::new(&empty, None).unwrap().count(), 0);
        let single = Graph::from_pairs(&[(0, 1)]).unwrap();
        let cover: Vec<CompleteBipartiteGraph> =
            GreedyCover::new(&single, None).unwrap().collect();
        assert_eq!(cover.len(), 1);
        assert!(is_valid_cover(&single, &cover));
    }

    #[test]
    fn early_stop_test() {
        let graph = Graph::from_pairs(&CROWN3).unwrap();
        let mut cover = GreedyCover::new(&graph, None).unwrap();
        assert_eq!(cover.remaining(), 6);
        let first = cover.next().unwrap();
        assert!(first.m() >= 1);
        assert!(cover.remaining() < 6);
    }

    #[test]
    fn fixed_sample_size_test() {
        let graph = Graph::from_pairs(&CROWN3).unwrap();
        let cover: Vec<CompleteBipartiteGraph> =
            GreedyCover::new(&graph, Some(1)).unwrap().collect();
        assert!(is_valid_cover(&graph, &cover));
    }

    #[test]
    fn self_loop_rejection_test() {
        let mut graph = Graph::new();
        graph.add_vertex(0);
        graph.add_edge(crate::graph::Edge::new(0, 0)).unwrap();
        assert!(matches!(
            GreedyCover::new(&graph, None),
            Err(ValidationError::LoopInCoverTarget(0)),
        ));
    }

}
