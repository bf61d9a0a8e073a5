//! Bipartite graph variants of the data model in [`crate::graph`].
//!
//! `BipartiteGraph` partitions its vertices into two disjoint sides and rejects edges within a
//! side. `CompleteBipartiteGraph` (a biclique) only stores its two sides: completeness is an
//! invariant of the representation, adding a vertex to one side implicitly materializes the
//! edges to every vertex of the other side.

use fxhash::{FxHashMap, FxHashSet};
use crate::cust_error::ValidationError;
use crate::graph::{Edge, Graph};

/// A graph whose vertices split into a left and a right side with all edges crossing between
/// them. Same invariants as [`Graph`] otherwise.
#[derive(Debug, Clone, Default)]
pub struct BipartiteGraph {
    left: FxHashSet<usize>,
    right: FxHashSet<usize>,
    incidence: FxHashMap<usize, FxHashSet<Edge>>,
    weights: FxHashMap<Edge, Option<i64>>,
}

impl BipartiteGraph {

    pub fn new() -> Self {
        BipartiteGraph::default()
    }

    /// Creates an edgeless bipartite graph from two vertex sets.
    /// Returns a `ValidationError` if the sets share a vertex.
    pub fn from_sides<L, R>(left: L, right: R) -> Result<Self, ValidationError>
    where
        L: IntoIterator<Item = usize>,
        R: IntoIterator<Item = usize>,
    {
        let mut graph = BipartiteGraph::new();
        for v in left {
            graph.add_left_vertex(v)?;
        }
        for v in right {
            graph.add_right_vertex(v)?;
        }
        Ok(graph)
    }

    /// Creates a bipartite graph from a sequence of vertex pairs, placing first elements on the
    /// left side and second elements on the right side.
    /// Returns a `ValidationError` if a vertex would end up on both sides or a pair occurs twice.
    pub fn from_pairs(pairs: &[(usize, usize)]) -> Result<Self, ValidationError> {
        let mut graph = BipartiteGraph::new();
        for &(u, v) in pairs {
            if !graph.left.contains(&u) {
                graph.add_left_vertex(u)?;
            }
            if !graph.right.contains(&v) {
                graph.add_right_vertex(v)?;
            }
        }
        for &(u, v) in pairs {
            graph.add_edge(Edge::new(u, v))?;
        }
        Ok(graph)
    }

    pub fn left(&self) -> &FxHashSet<usize> {
        &self.left
    }

    pub fn right(&self) -> &FxHashSet<usize> {
        &self.right
    }

    /// Returns an `Iterator` over all vertices of both sides.
    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.left.iter().chain(self.right.iter()).copied()
    }

    pub fn n(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn m(&self) -> usize {
        self.weights.len()
    }

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

    /// Checks if both sides have the same size.
    pub fn is_balanced(&self) -> bool {
        self.left.len() == self.right.len()
    }

    /// Checks if every left-right pair is connected.
    pub fn is_complete(&self) -> bool {
        self.m() == self.left.len() * self.right.len()
    }

    /// Adds `v` to the left side. Returns `false` if `v` was already there and a
    /// `ValidationError` if `v` sits on the right side.
    pub fn add_left_vertex(&mut self, v: usize) -> Result<bool, ValidationError> {
        if self.right.contains(&v) {
            return Err(ValidationError::SidesNotDisjoint(v))
        }
        if self.left.insert(v) {
            self.incidence.insert(v, FxHashSet::default());
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Adds `v` to the right side. Returns `false` if `v` was already there and a
    /// `ValidationError` if `v` sits on the left side.
    pub fn add_right_vertex(&mut self, v: usize) -> Result<bool, ValidationError> {
        if self.left.contains(&v) {
            return Err(ValidationError::SidesNotDisjoint(v))
        }
        if self.right.insert(v) {
            self.incidence.insert(v, FxHashSet::default());
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Removes `v` from whichever side holds it, along with every incident edge.
    pub fn remove_vertex(&mut self, v: usize) {
        if !self.left.remove(&v) && !self.right.remove(&v) {
            return
        }
        let edges = self.incidence.remove(&v).expect("`v` was a vertex of `self`");
        for edge in edges {
            if let Some(other_edges) = self.incidence.get_mut(&edge.other(v)) {
                other_edges.remove(&edge);
            }
            self.weights.remove(&edge);
        }
    }

    /// Adds `edge` to the graph.
    /// Returns a `ValidationError` if an endpoint is unknown, both endpoints fall on the same
    /// side, or the edge is already present.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), ValidationError> {
        let (u, v) = edge.endpoints();
        for w in [u, v] {
            if !self.left.contains(&w) && !self.right.contains(&w) {
                return Err(ValidationError::UnknownVertex(w))
            }
        }
        if self.left.contains(&u) == self.left.contains(&v) {
            return Err(ValidationError::SameSideEdge(u, v))
        }
        if self.weights.contains_key(&edge) {
            return Err(ValidationError::DuplicateEdge(u, v))
        }
        self.weights.insert(edge.clone(), edge.weight());
        self.incidence.get_mut(&u).expect("`u` is a vertex of `self`").insert(edge.clone());
        self.incidence.get_mut(&v).expect("`v` is a vertex of `self`").insert(edge);
        Ok(())
    }

    /// Returns the neighbors of `v` (always on the opposite side).
    pub fn adjacent(&self, v: usize) -> FxHashSet<usize> {
        self.incidence
            .get(&v)
            .map(|edges| edges.iter().map(|e| e.other(v)).collect())
            .unwrap_or_default()
    }

    /// Returns the edges incident to `v`, or `None` if `v` is not a vertex of `self`.
    pub fn incident_edges(&self, v: usize) -> Option<&FxHashSet<Edge>> {
        self.incidence.get(&v)
    }

    /// Returns the induced star around `v`: `v` alone on one side, its neighbors on the other.
    pub fn star(&self, v: usize) -> BipartiteGraph {
        let mut star = BipartiteGraph::new();
        star.add_left_vertex(v).expect("`star` is empty");
        if let Some(edges) = self.incidence.get(&v) {
            for edge in edges {
                star.add_right_vertex(edge.other(v)).expect("neighbors of `v` differ from `v`");
                star.add_edge(edge.clone()).expect("incident edges of `v` are distinct");
            }
        }
        star
    }

    /// Forgets the side assignment.
    pub fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();
        for v in self.vertices() {
            graph.add_vertex(v);
        }
        for edge in self.edges() {
            graph.add_edge(edge.clone()).expect("edges of `self` are distinct over known vertices");
        }
        graph
    }

}

impl PartialEq for BipartiteGraph {
    /// Structural equality: equal edge sets and equal sides, up to swapping the side assignment.
    fn eq(&self, other: &Self) -> bool {
        let sides_match = (self.left == other.left && self.right == other.right)
            || (self.left == other.right && self.right == other.left);
        sides_match && self.weights == other.weights
    }
}

impl Eq for BipartiteGraph {}

/// A complete bipartite graph (biclique), represented by its two sides only. Every left-right
/// pair is an edge by definition, so completeness can not be violated.
#[derive(Debug, Clone, Default)]
pub struct CompleteBipartiteGraph {
    left: FxHashSet<usize>,
    right: FxHashSet<usize>,
}

impl CompleteBipartiteGraph {

    /// Creates a biclique from two vertex sets.
    /// Returns a `ValidationError` if the sets share a vertex.
    pub fn from_sides<L, R>(left: L, right: R) -> Result<Self, ValidationError>
    where
        L: IntoIterator<Item = usize>,
        R: IntoIterator<Item = usize>,
    {
        let left: FxHashSet<usize> = left.into_iter().collect();
        let right: FxHashSet<usize> = right.into_iter().collect();
        if let Some(shared) = left.intersection(&right).next() {
            return Err(ValidationError::SidesNotDisjoint(*shared))
        }
        Ok(CompleteBipartiteGraph { left, right })
    }

    pub fn left(&self) -> &FxHashSet<usize> {
        &self.left
    }

    pub fn right(&self) -> &FxHashSet<usize> {
        &self.right
    }

    pub fn n(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn m(&self) -> usize {
        self.left.len() * self.right.len()
    }

    /// Adds `v` to the left side, implicitly connecting it to the whole right side.
    pub fn add_left_vertex(&mut self, v: usize) -> Result<bool, ValidationError> {
        if self.right.contains(&v) {
            return Err(ValidationError::SidesNotDisjoint(v))
        }
        Ok(self.left.insert(v))
    }

    /// Adds `v` to the right side, implicitly connecting it to the whole left side.
    pub fn add_right_vertex(&mut self, v: usize) -> Result<bool, ValidationError> {
        if self.left.contains(&v) {
            return Err(ValidationError::SidesNotDisjoint(v))
        }
        Ok(self.right.insert(v))
    }

    /// Checks if the unordered pair `{u, v}` is an edge of the biclique.
    pub fn contains_pair(&self, u: usize, v: usize) -> bool {
        (self.left.contains(&u) && self.right.contains(&v))
            || (self.left.contains(&v) && self.right.contains(&u))
    }

    /// Returns an `Iterator` over all left-right pairs.
    pub fn edge_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.left
            .iter()
            .flat_map(move |&u| self.right.iter().map(move |&v| (u, v)))
    }

    /// Materializes the edges into a `BipartiteGraph`.
    pub fn to_bipartite(&self) -> BipartiteGraph {
        let mut graph = BipartiteGraph::from_sides(self.left.iter().copied(), self.right.iter().copied())
            .expect("the sides of `self` are disjoint");
        for (u, v) in self.edge_pairs() {
            graph.add_edge(Edge::new(u, v)).expect("left-right pairs are distinct edges");
        }
        graph
    }

}

impl PartialEq for CompleteBipartiteGraph {
    fn eq(&self, other: &Self) -> bool {
        (self.left == other.left && self.right == other.right)
            || (self.left == other.right && self.right == other.left)
    }
}

impl Eq for CompleteBipartiteGraph {}

/// Checks if the union of the bicliques' edges equals `target` exactly: no edge of `target`
/// uncovered and no biclique edge outside of `target`.
pub fn is_valid_cover<'a, I>(target: &Graph, cover: I) -> bool
where
    I: IntoIterator<Item = &'a CompleteBipartiteGraph>,
{
    let target_pairs: FxHashSet<(usize, usize)> = target
        .edges()
        .map(|e| {
            let (u, v) = e.endpoints();
            (u.min(v), u.max(v))
        })
        .collect();
    let mut covered: FxHashSet<(usize, usize)> = FxHashSet::default();
    for biclique in cover {
        for (u, v) in biclique.edge_pairs() {
            let pair = (u.min(v), u.max(v));
            if !target_pairs.contains(&pair) {
                return false
            }
            covered.insert(pair);
        }
    }
    covered == target_pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_validation_test() {
        let mut graph = BipartiteGraph::from_sides([0, 1], [2, 3]).unwrap();
        assert_eq!(graph.add_left_vertex(2), Err(ValidationError::SidesNotDisjoint(2)));
        assert_eq!(graph.add_edge(Edge::new(0, 1)), Err(ValidationError::SameSideEdge(0, 1)));
        assert_eq!(graph.add_edge(Edge::new(0, 4)), Err(ValidationError::UnknownVertex(4)));
        assert!(graph.add_edge(Edge::new(0, 2)).is_ok());
        assert_eq!(graph.add_edge(Edge::new(2, 0)), Err(ValidationError::DuplicateEdge(0, 2)));
        assert!(BipartiteGraph::from_sides([0, 1], [1, 2]).is_err());
    }

    #[test]
    fn from_pairs_test() {
        let graph = BipartiteGraph::from_pairs(&[(0, 3), (0, 4), (1, 3)]).unwrap();
        assert_eq!(graph.n(), 4);
        assert_eq!(graph.m(), 3);
        assert_eq!(graph.adjacent(0), [3, 4].into_iter().collect());
        // 3 would end up on both sides
        assert!(BipartiteGraph::from_pairs(&[(0, 3), (3, 4)]).is_err());
    }

    #[test]
    fn swapped_sides_equality_test() {
        let g1 = BipartiteGraph::from_pairs(&[(0, 2), (1, 2)]).unwrap();
        let mut g2 = BipartiteGraph::from_sides([2], [0, 1]).unwrap();
        g2.add_edge(Edge::new(2, 0)).unwrap();
        g2.add_edge(Edge::new(2, 1)).unwrap();
        assert_eq!(g1, g2);
    }

    #[test]
    fn remove_vertex_test() {
        let mut graph = BipartiteGraph::from_pairs(&[(0, 2), (0, 3), (1, 2)]).unwrap();
        graph.remove_vertex(2);
        assert_eq!(graph.n(), 3);
        assert_eq!(graph.m(), 1);
        assert!(graph.adjacent(1).is_empty());
    }

    #[test]
    fn star_test() {
        let graph = BipartiteGraph::from_pairs(&[(0, 2), (0, 3), (1, 2)]).unwrap();
        let star = graph.star(0);
        assert_eq!(star.n(), 3);
        assert_eq!(star.m(), 2);
        assert!(star.is_complete());
    }

    #[test]
    fn biclique_materialization_test() {
        let mut biclique = CompleteBipartiteGraph::from_sides([0, 1], [2]).unwrap();
        assert!(biclique.add_right_vertex(3).unwrap());
        assert_eq!(biclique.m(), 4);
        assert!(biclique.contains_pair(3, 0));
        let materialized = biclique.to_bipartite();
        assert!(materialized.is_complete());
        assert_eq!(materialized.m(), 4);
        assert_eq!(biclique.add_left_vertex(2), Err(ValidationError::SidesNotDisjoint(2)));
    }

    #[test]
    fn cover_validity_test() {
        let graph = Graph::from_pairs(&[(0, 3), (0, 4), (1, 3), (1, 5), (2, 4), (2, 5)]).unwrap();
        let cover = vec![
            CompleteBipartiteGraph::from_sides([0], [3, 4]).unwrap(),
            CompleteBipartiteGraph::from_sides([1], [3, 5]).unwrap(),
            CompleteBipartiteGraph::from_sides([2], [4, 5]).unwrap(),
        ];
        assert!(is_valid_cover(&graph, &cover));
        // missing an edge
        assert!(!is_valid_cover(&graph, &cover[..2]));
        // claims the non-edge (0, 5)
        let bogus = vec![
            CompleteBipartiteGraph::from_sides([0], [3, 4, 5]).unwrap(),
            CompleteBipartiteGraph::from_sides([1], [3, 5]).unwrap(),
            CompleteBipartiteGraph::from_sides([2], [4, 5]).unwrap(),
        ];
        assert!(!is_valid_cover(&graph, &bogus));
    }

}
