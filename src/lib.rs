//! Several independent strategies for computing the minimum biclique cover (bipartite
//! dimension) of a bipartite graph: the fewest complete bipartite subgraphs whose edges union
//! to the graph's edge set.
//!
//! The exact solvers share a twin-reduction kernelizer and report the dimension as a count; the
//! approximation produces the cover itself as a lazy sequence of bicliques. Graphs handed to a
//! solver are never mutated.

pub mod graph;
pub mod bipartite;
pub mod cust_error;
pub mod closure;
pub mod cover_instance;
pub mod kernelization;
pub mod bitmask_dp;
pub mod sat_search;
pub mod approx;
pub mod heuristics;

pub use approx::GreedyCover;
pub use bipartite::{is_valid_cover, BipartiteGraph, CompleteBipartiteGraph};
pub use cover_instance::CoverInstance;
pub use graph::{Edge, Graph};
pub use heuristics::greedy_cover;

use cust_error::{ProcessingError, ValidationError};
use sat_search::SplrOracle;

/// Computes the exact bipartite dimension of `graph` by kernelizing and searching feasible
/// cover sizes k = 1, 2, ..., `max_k` through a SAT oracle.
/// Returns `Ok(None)` if no cover of size <= `max_k` exists.
pub fn minimum_cover_exact(
    graph: &BipartiteGraph,
    max_k: usize,
) -> Result<Option<usize>, ProcessingError> {
    CoverInstance::from_graph(graph).sat_dimension(max_k, &mut SplrOracle)
}

/// Computes the exact bipartite dimension of `graph` with the bitmask subset-cover DP, applied
/// to the twin-reduction kernel. Fails fast if the kernel still has more edges than the bitmask
/// width addresses.
pub fn minimum_cover_dp(graph: &BipartiteGraph) -> Result<usize, ProcessingError> {
    CoverInstance::from_graph(graph).kernelized().bitmask_dimension()
}

/// Produces a lazy biclique cover of `graph` via randomized greedy rounds. Consuming the whole
/// iterator yields a valid cover; its length is an upper bound on the bipartite dimension.
pub fn approximate_cover(
    graph: &Graph,
    sample_size: Option<usize>,
) -> Result<GreedyCover, ValidationError> {
    GreedyCover::new(graph, sample_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CROWN3: [(usize, usize); 6] = [(0, 3), (0, 4), (1, 3), (1, 5), (2, 4), (2, 5)];

    #[test]
    fn crown_scenario_test() {
        let bipartite = BipartiteGraph::from_pairs(&CROWN3).unwrap();
        assert_eq!(minimum_cover_exact(&bipartite, 9), Ok(Some(3)));
        assert_eq!(minimum_cover_dp(&bipartite), Ok(3));
        let graph = Graph::from_pairs(&CROWN3).unwrap();
        let cover: Vec<CompleteBipartiteGraph> =
            approximate_cover(&graph, None).unwrap().collect();
        assert!(cover.len() >= 3);
        assert!(is_valid_cover(&graph, &cover));
    }

    #[test]
    fn monotonic_exactness_test() {
        // The exact dimension never exceeds the approximation's cover number.
        let pairs = [(0, 5), (0, 6), (1, 5), (1, 6), (2, 6), (2, 7), (3, 7), (4, 5)];
        let bipartite = BipartiteGraph::from_pairs(&pairs).unwrap();
        let exact = minimum_cover_dp(&bipartite).unwrap();
        let graph = Graph::from_pairs(&pairs).unwrap();
        let approx = approximate_cover(&graph, None).unwrap().count();
        assert!(exact <= approx);
        assert_eq!(minimum_cover_exact(&bipartite, 9), Ok(Some(exact)));
    }

    #[test]
    fn solvers_never_mutate_input_test() {
        let bipartite = BipartiteGraph::from_pairs(&CROWN3).unwrap();
        let before = bipartite.clone();
        minimum_cover_exact(&bipartite, 9).unwrap();
        minimum_cover_dp(&bipartite).unwrap();
        assert_eq!(bipartite, before);
    }

}
