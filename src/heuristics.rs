//! A deterministic greedy cover heuristic.
//!
//! Follows the same contract as the randomized approximation: choose a maximal biclique, remove
//! its edges, repeat. Instead of sampling it scans every uncovered edge per round, and instead
//! of recursing it keeps the shrinking uncovered set on an explicit work-stack, so dense graphs
//! can not exhaust the call stack.

use fxhash::FxHashSet;
use crate::approx::uncovered_neighbors;
use crate::bipartite::CompleteBipartiteGraph;
use crate::closure;
use crate::cust_error::ValidationError;
use crate::graph::Graph;

/// Computes a biclique cover of `graph` by repeatedly taking the maximal biclique that covers
/// the most uncovered edges. Deterministic: ties go to the lexicographically first seed edge.
/// Returns a `ValidationError` if `graph` holds a self-loop, which no biclique can cover.
pub fn greedy_cover(graph: &Graph) -> Result<Vec<CompleteBipartiteGraph>, ValidationError> {
    let mut initial: FxHashSet<(usize, usize)> = FxHashSet::default();
    for edge in graph.edges() {
        let (u, v) = edge.endpoints();
        if edge.is_loop() {
            return Err(ValidationError::LoopInCoverTarget(u))
        }
        initial.insert((u.min(v), u.max(v)));
    }
    let mut cover = Vec::new();
    let mut stack = vec![initial];
    while let Some(mut uncovered) = stack.pop() {
        if uncovered.is_empty() {
            continue;
        }
        let mut edges: Vec<(usize, usize)> = uncovered.iter().copied().collect();
        edges.sort_unstable();
        let (seed_u, seed_v) = edges[0];
        let mut best = CompleteBipartiteGraph::from_sides([seed_u], [seed_v])
            .expect("self-loops were rejected above");
        let mut best_covered = 1;
        let neighbors = |v: usize| uncovered_neighbors(&uncovered, v);
        for &(a, b) in &edges {
            let (left, right) = closure::maximal_biclique_from_edge(a, b, &neighbors);
            if left.is_empty() || right.is_empty() {
                continue;
            }
            let covered = left.len() * right.len();
            if covered > best_covered {
                best = CompleteBipartiteGraph::from_sides(left.into_iter(), right.into_iter())
                    .expect("the closure keeps its sides disjoint");
                best_covered = covered;
            }
        }
        for (u, v) in best.edge_pairs() {
            uncovered.remove(&(u.min(v), u.max(v)));
        }
        stack.push(uncovered);
        cover.push(best);
    }
    Ok(cover)
}
