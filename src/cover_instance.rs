//! The indexed working representation shared by the exact solvers.
//!
//! A `CoverInstance` is built once from a bipartite graph (or an edge-pair list) and is treated
//! as read-only afterwards: the kernelizer, the bitmask solver and the SAT search all operate on
//! the same sorted vertex lists and adjacency maps without ever mutating them.

use fxhash::{FxHashMap, FxHashSet};
use crate::bipartite::BipartiteGraph;
use crate::cust_error::ValidationError;

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct CoverInstance {
    /// Left-side vertices, sorted.
    pub(crate) u_nodes: Vec<usize>,
    /// Right-side vertices, sorted.
    pub(crate) v_nodes: Vec<usize>,
    /// Neighbors of each left vertex.
    pub(crate) adj_u: FxHashMap<usize, FxHashSet<usize>>,
    /// Neighbors of each right vertex.
    pub(crate) adj_v: FxHashMap<usize, FxHashSet<usize>>,
    /// Edges as (left, right) pairs in a fixed order.
    pub(crate) edges: Vec<(usize, usize)>,
    /// Position of each edge in `edges`, used for bitmask encoding.
    pub(crate) edge_index: FxHashMap<(usize, usize), usize>,
}

impl CoverInstance {

    /// Builds an instance from (left, right) vertex pairs.
    /// Returns a `ValidationError` if a pair occurs twice or a vertex appears on both sides.
    pub fn from_pairs(pairs: &[(usize, usize)]) -> Result<Self, ValidationError> {
        let mut adj_u: FxHashMap<usize, FxHashSet<usize>> = FxHashMap::default();
        let mut adj_v: FxHashMap<usize, FxHashSet<usize>> = FxHashMap::default();
        let mut edges = Vec::with_capacity(pairs.len());
        let mut edge_index = FxHashMap::default();
        for &(u, v) in pairs {
            if edge_index.insert((u, v), edges.len()).is_some() {
                return Err(ValidationError::DuplicateEdge(u, v))
            }
            edges.push((u, v));
            adj_u.entry(u).or_default().insert(v);
            adj_v.entry(v).or_default().insert(u);
        }
        for u in adj_u.keys() {
            if adj_v.contains_key(u) {
                return Err(ValidationError::SidesNotDisjoint(*u))
            }
        }
        let mut u_nodes: Vec<usize> = adj_u.keys().copied().collect();
        let mut v_nodes: Vec<usize> = adj_v.keys().copied().collect();
        u_nodes.sort_unstable();
        v_nodes.sort_unstable();
        Ok(CoverInstance { u_nodes, v_nodes, adj_u, adj_v, edges, edge_index })
    }

    /// Builds an instance from a bipartite graph. Vertices without edges do not influence the
    /// cover number and are dropped.
    pub fn from_graph(graph: &BipartiteGraph) -> Self {
        let mut pairs: Vec<(usize, usize)> = graph
            .edges()
            .map(|e| {
                let (a, b) = e.endpoints();
                if graph.left().contains(&a) { (a, b) } else { (b, a) }
            })
            .collect();
        pairs.sort_unstable();
        // Parallel edges with distinct weights collapse onto one pair to cover.
        pairs.dedup();
        CoverInstance::from_pairs(&pairs)
            .expect("a `BipartiteGraph` has distinct edge pairs and disjoint sides")
    }

    /// Returns the number of edges.
    pub fn m(&self) -> usize {
        self.edges.len()
    }

    /// Checks if `(u, v)` is an edge, with `u` on the left side.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj_u.get(&u).map_or(false, |neighbors| neighbors.contains(&v))
    }

    /// Returns the neighbors of the left vertex `u`.
    pub(crate) fn neighbors_of_u(&self, u: usize) -> &FxHashSet<usize> {
        self.adj_u.get(&u).expect("`u` is a left vertex of the instance")
    }

    /// Returns the neighbors of the right vertex `v`.
    pub(crate) fn neighbors_of_v(&self, v: usize) -> &FxHashSet<usize> {
        self.adj_v.get(&v).expect("`v` is a right vertex of the instance")
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bipartite::BipartiteGraph;

    #[test]
    fn from_pairs_test() {
        let ins = CoverInstance::from_pairs(&[(0, 3), (0, 4), (1, 3)]).unwrap();
        assert_eq!(ins.u_nodes, vec![0, 1]);
        assert_eq!(ins.v_nodes, vec![3, 4]);
        assert_eq!(ins.m(), 3);
        assert!(ins.has_edge(0, 4));
        assert!(!ins.has_edge(1, 4));
    }

    #[test]
    fn from_pairs_validation_test() {
        assert_eq!(
            CoverInstance::from_pairs(&[(0, 3), (0, 3)]),
            Err(ValidationError::DuplicateEdge(0, 3)),
        );
        assert!(matches!(
            CoverInstance::from_pairs(&[(0, 3), (3, 4)]),
            Err(ValidationError::SidesNotDisjoint(3)),
        ));
    }

    #[test]
    fn from_graph_test() {
        let graph = BipartiteGraph::from_pairs(&[(0, 3), (0, 4), (1, 3)]).unwrap();
        let ins = CoverInstance::from_graph(&graph);
        assert_eq!(ins.m(), 3);
        assert_eq!(ins.u_nodes, vec![0, 1]);
        assert_eq!(ins.edges, vec![(0, 3), (0, 4), (1, 3)]);
    }

}
