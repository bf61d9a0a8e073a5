//! The maximal-biclique closure operator shared by the enumeration and approximation solvers.
//!
//! Given two seed sets and a neighbor function restricted to some active edge set, the operator
//! alternates `L <- intersection of N(v) over R` and `R <- (intersection of N(v) over L) - L`
//! until a fixed point is reached or a side runs empty. Each round either shrinks a side or
//! leaves both unchanged, so at most min(|L|, |R|) rounds happen.

use fxhash::FxHashSet;

/// Intersects the neighborhoods of all vertices in `set`. Empty `set` yields the empty set.
pub fn common_neighbors<F>(set: &FxHashSet<usize>, neighbors: &F) -> FxHashSet<usize>
where
    F: Fn(usize) -> FxHashSet<usize>,
{
    let mut iter = set.iter();
    let first = match iter.next() {
        Some(v) => *v,
        None => return FxHashSet::default(),
    };
    let mut intersection = neighbors(first);
    for v in iter {
        if intersection.is_empty() {
            break;
        }
        let nv = neighbors(*v);
        intersection.retain(|w| nv.contains(w));
    }
    intersection
}

/// Expands the seed pair `(left, right)` to a maximal biclique with respect to the edge set
/// underlying `neighbors`.
///
/// If the returned pair is non-empty on both sides, every left-right pair is an active edge and
/// no vertex can join either side without breaking completeness. Applying the operator to an
/// already-maximal pair returns it unchanged.
pub fn maximal_biclique<F>(
    mut left: FxHashSet<usize>,
    mut right: FxHashSet<usize>,
    neighbors: &F,
) -> (FxHashSet<usize>, FxHashSet<usize>)
where
    F: Fn(usize) -> FxHashSet<usize>,
{
    while !left.is_empty() && !right.is_empty() {
        let new_left = common_neighbors(&right, neighbors);
        if new_left.is_empty() {
            left = new_left;
            break;
        }
        let mut new_right = common_neighbors(&new_left, neighbors);
        new_right.retain(|v| !new_left.contains(v));
        let converged = new_left == left && new_right == right;
        left = new_left;
        right = new_right;
        if converged {
            break;
        }
    }
    (left, right)
}

/// Seeds the closure from a single active edge `(u, v)`: `L = N(u)` and `R = N(v) - L`.
pub fn maximal_biclique_from_edge<F>(
    u: usize,
    v: usize,
    neighbors: &F,
) -> (FxHashSet<usize>, FxHashSet<usize>)
where
    F: Fn(usize) -> FxHashSet<usize>,
{
    let left = neighbors(u);
    let mut right = neighbors(v);
    right.retain(|w| !left.contains(w));
    maximal_biclique(left, right, neighbors)
}
