//! Implementation of a simple graph data structure over integer vertices with optionally
//! directed and optionally weighted edges.

use fxhash::{FxHashMap, FxHashSet};
use crate::cust_error::ValidationError;

/// An edge between two vertices.
///
/// Undirected edges are canonicalized on construction so that two edges are equal iff their
/// vertex sets (and weights) match. Directed edges keep their order and must not self-loop.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    ends: (usize, usize),
    directed: bool,
    weight: Option<i64>,
}

impl Edge {

    /// Creates an undirected, unweighted edge. Self-loops are permitted.
    pub fn new(u: usize, v: usize) -> Self {
        Edge {
            ends: (u.min(v), u.max(v)),
            directed: false,
            weight: None,
        }
    }

    /// Creates an undirected edge with weight `w`.
    pub fn weighted(u: usize, v: usize, w: i64) -> Self {
        Edge {
            ends: (u.min(v), u.max(v)),
            directed: false,
            weight: Some(w),
        }
    }

    /// Creates a directed edge from `u` to `v`.
    pub fn directed(u: usize, v: usize) -> Result<Self, ValidationError> {
        if u == v {
            return Err(ValidationError::DirectedSelfLoop(u))
        }
        Ok(Edge {
            ends: (u, v),
            directed: true,
            weight: None,
        })
    }

    /// Creates a directed edge from `u` to `v` with weight `w`.
    pub fn directed_weighted(u: usize, v: usize, w: i64) -> Result<Self, ValidationError> {
        let mut edge = Edge::directed(u, v)?;
        edge.weight = Some(w);
        Ok(edge)
    }

    /// Returns both endpoints. For directed edges the order is (source, target).
    pub fn endpoints(&self) -> (usize, usize) {
        self.ends
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_loop(&self) -> bool {
        self.ends.0 == self.ends.1
    }

    pub fn weight(&self) -> Option<i64> {
        self.weight
    }

    /// Checks if `v` is an endpoint of `self`.
    pub fn contains(&self, v: usize) -> bool {
        self.ends.0 == v || self.ends.1 == v
    }

    /// Returns the endpoint opposite to `v`. For a self-loop this is `v` itself.
    pub fn other(&self, v: usize) -> usize {
        if self.ends.0 == v {
            self.ends.1
        } else {
            self.ends.0
        }
    }

}

/// A graph holding a vertex set, an incidence map from each vertex to its incident edges and a
/// weight map that doubles as the canonical edge set.
///
/// Invariants: every edge endpoint is a vertex of the graph, and the incidence map of a vertex
/// holds exactly the edges touching it. All mutations keep both maps consistent.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: FxHashSet<usize>,
    incidence: FxHashMap<usize, FxHashSet<Edge>>,
    weights: FxHashMap<Edge, Option<i64>>,
}

impl Graph {

    pub fn new() -> Self {
        Graph::default()
    }

    /// Creates a graph from a sequence of vertex pairs, adding endpoints as vertices first.
    /// Returns a `ValidationError` if a pair occurs twice.
    pub fn from_pairs(pairs: &[(usize, usize)]) -> Result<Self, ValidationError> {
        let mut graph = Graph::new();
        for &(u, v) in pairs {
            graph.add_vertex(u);
            graph.add_vertex(v);
        }
        for &(u, v) in pairs {
            graph.add_edge(Edge::new(u, v))?;
        }
        Ok(graph)
    }

    /// Returns an `Iterator` over all vertices.
    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices.iter().copied()
    }

    pub fn contains_vertex(&self, v: usize) -> bool {
        self.vertices.contains(&v)
    }

    /// Returns the number of vertices of `self`.
    pub fn n(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges of `self`.
    pub fn m(&self) -> usize {
        self.weights.len()
    }

    /// Returns an `Iterator` over all edges.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.weights.keys()
    }

    /// Returns the edge-to-weight map, which also serves as the canonical edge set.
    pub fn edge_weights(&self) -> &FxHashMap<Edge, Option<i64>> {
        &self.weights
    }

    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.weights.contains_key(edge)
    }

    /// Returns the sum of all edge weights, counting unweighted edges as 0.
    pub fn total_weight(&self) -> i64 {
        self.weights.values().flatten().sum()
    }

    /// Returns the edges incident to `v`, or `None` if `v` is not a vertex of `self`.
    pub fn incident_edges(&self, v: usize) -> Option<&FxHashSet<Edge>> {
        self.incidence.get(&v)
    }

    /// Returns the neighbors of `v`. A self-loop makes `v` its own neighbor.
    pub fn adjacent(&self, v: usize) -> FxHashSet<usize> {
        self.incidence
            .get(&v)
            .map(|edges| edges.iter().map(|e| e.other(v)).collect())
            .unwrap_or_default()
    }

    /// Returns the degree of `v`, or `None` if `v` is not a vertex of `self`.
    pub fn degree(&self, v: usize) -> Option<usize> {
        self.incidence.get(&v).map(|edges| edges.len())
    }

    /// Adds `v` to the vertex set. Returns `false` if `v` was already present.
    pub fn add_vertex(&mut self, v: usize) -> bool {
        if self.vertices.insert(v) {
            self.incidence.insert(v, FxHashSet::default());
            true
        } else {
            false
        }
    }

    /// Removes `v` and every edge touching it, keeping incidence and weight maps consistent.
    pub fn remove_vertex(&mut self, v: usize) {
        if !self.vertices.remove(&v) {
            return
        }
        let edges = self.incidence.remove(&v).expect("`v` was a vertex of `self`");
        for edge in edges {
            let other = edge.other(v);
            if other != v {
                if let Some(other_edges) = self.incidence.get_mut(&other) {
                    other_edges.remove(&edge);
                }
            }
            self.weights.remove(&edge);
        }
    }

    /// Adds `edge` to the graph.
    /// Returns a `ValidationError` if an endpoint is unknown or the edge is already present.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), ValidationError> {
        let (u, v) = edge.endpoints();
        if !self.vertices.contains(&u) {
            return Err(ValidationError::UnknownVertex(u))
        }
        if !self.vertices.contains(&v) {
            return Err(ValidationError::UnknownVertex(v))
        }
        if self.weights.contains_key(&edge) {
            return Err(ValidationError::DuplicateEdge(u, v))
        }
        self.weights.insert(edge.clone(), edge.weight());
        self.incidence.get_mut(&u).expect("`u` is a vertex of `self`").insert(edge.clone());
        if v != u {
            self.incidence.get_mut(&v).expect("`v` is a vertex of `self`").insert(edge);
        }
        Ok(())
    }

    /// Returns the induced star around `v`: the vertex, its neighbors and all incident edges.
    pub fn star(&self, v: usize) -> Graph {
        let mut star = Graph::new();
        star.add_vertex(v);
        if let Some(edges) = self.incidence.get(&v) {
            for edge in edges {
                star.add_vertex(edge.other(v));
                star.add_edge(edge.clone()).expect("incident edges of `v` are distinct");
            }
        }
        star
    }

    /// Merges several graphs into one, skipping edges that are already present.
    pub fn union<'a, I: IntoIterator<Item = &'a Graph>>(graphs: I) -> Graph {
        let mut merged = Graph::new();
        for graph in graphs {
            for v in graph.vertices() {
                merged.add_vertex(v);
            }
            for edge in graph.edges() {
                if !merged.contains_edge(edge) {
                    merged.add_edge(edge.clone()).expect("`edge` is new and its endpoints were added");
                }
            }
        }
        merged
    }

}

impl PartialEq for Graph {
    /// Structural equality: equal vertex sets and equal edge sets.
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.weights == other.weights
    }
}

impl Eq for Graph {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_equality_test() {
        assert_eq!(Edge::new(1, 2), Edge::new(2, 1));
        assert_ne!(Edge::new(1, 2), Edge::weighted(1, 2, 3));
        let d1 = Edge::directed(1, 2).unwrap();
        let d2 = Edge::directed(2, 1).unwrap();
        assert_ne!(d1, d2);
        assert!(Edge::directed(1, 1).is_err());
        assert!(Edge::new(1, 1).is_loop());
    }

    #[test]
    fn add_edge_validation_test() {
        let mut graph = Graph::new();
        graph.add_vertex(0);
        graph.add_vertex(1);
        assert_eq!(graph.add_edge(Edge::new(0, 2)), Err(ValidationError::UnknownVertex(2)));
        assert!(graph.add_edge(Edge::new(0, 1)).is_ok());
        assert_eq!(graph.add_edge(Edge::new(1, 0)), Err(ValidationError::DuplicateEdge(0, 1)));
        assert_eq!(graph.m(), 1);
    }

    #[test]
    fn weighted_edges_test() {
        let mut graph = Graph::new();
        graph.add_vertex(0);
        graph.add_vertex(1);
        graph.add_edge(Edge::weighted(0, 1, 3)).unwrap();
        graph.add_edge(Edge::directed_weighted(1, 0, 4).unwrap()).unwrap();
        assert_eq!(graph.m(), 2);
        assert_eq!(graph.total_weight(), 7);
        assert_eq!(graph.edge_weights().get(&Edge::weighted(0, 1, 3)), Some(&Some(3)));
        assert_eq!(graph.degree(0), Some(2));
        assert_eq!(graph.degree(7), None);
    }

    #[test]
    fn remove_vertex_consistency_test() {
        let mut graph = Graph::from_pairs(&[(0, 1), (0, 2), (1, 2)]).unwrap();
        graph.remove_vertex(0);
        assert_eq!(graph.n(), 2);
        assert_eq!(graph.m(), 1);
        assert!(!graph.incident_edges(1).unwrap().contains(&Edge::new(0, 1)));
        assert!(graph.contains_edge(&Edge::new(1, 2)));
    }

    #[test]
    fn star_test() {
        let graph = Graph::from_pairs(&[(0, 1), (0, 2), (1, 2)]).unwrap();
        let star = graph.star(0);
        assert_eq!(star.n(), 3);
        assert_eq!(star.m(), 2);
        assert!(star.contains_edge(&Edge::new(0, 1)));
        assert!(!star.contains_edge(&Edge::new(1, 2)));
    }

    #[test]
    fn union_test() {
        let g1 = Graph::from_pairs(&[(0, 1), (1, 2)]).unwrap();
        let g2 = Graph::from_pairs(&[(1, 2), (2, 3)]).unwrap();
        let merged = Graph::union([&g1, &g2]);
        assert_eq!(merged.n(), 4);
        assert_eq!(merged.m(), 3);
    }

    #[test]
    fn structural_equality_test() {
        let g1 = Graph::from_pairs(&[(0, 1), (1, 2)]).unwrap();
        let g2 = Graph::from_pairs(&[(1, 2), (0, 1)]).unwrap();
        assert_eq!(g1, g2);
        let mut g3 = g1.clone();
        g3.add_vertex(7);
        assert_ne!(g1, g3);
    }

    #[test]
    fn self_loop_adjacency_test() {
        let mut graph = Graph::new();
        graph.add_vertex(0);
        assert!(graph.add_edge(Edge::new(0, 0)).is_ok());
        assert!(graph.adjacent(0).contains(&0));
        graph.remove_vertex(0);
        assert_eq!(graph.m(), 0);
    }

}
