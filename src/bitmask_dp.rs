//! Exact solver A: bitmask subset-cover dynamic programming.
//!
//! Enumerates every maximal biclique of the instance, encodes each as a bitmask with one bit per
//! covered edge and searches for the smallest family whose union is the full edge set. The
//! memoized search only ever branches on bicliques covering the lowest-index uncovered edge,
//! which is sound for set cover: any optimal cover must contain some biclique covering that
//! edge. Exponential in the edge count, intended for small or kernelized inputs.

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;
use crate::cover_instance::CoverInstance;
use crate::cust_error::ProcessingError;

/// One bit per edge in a `u128`.
pub const EDGE_LIMIT: usize = 128;

impl CoverInstance {

    /// Enumerates all maximal bicliques as edge bitmasks.
    ///
    /// For every subset of left vertices, one intersection pass over the right side and one back
    /// over the left side yields a maximal biclique (no fixed-point iteration is needed for this
    /// seed shape). Results are deduplicated by their (left, right) signature.
    pub fn maximal_biclique_masks(&self) -> Vec<u128> {
        let mut seen: FxHashSet<(Vec<usize>, Vec<usize>)> = FxHashSet::default();
        let mut masks = Vec::new();
        for size in 1..=self.u_nodes.len() {
            for subset in self.u_nodes.iter().copied().combinations(size) {
                let common_v = self.intersect_u_neighborhoods(&subset);
                if common_v.is_empty() {
                    continue;
                }
                let maximal_u = self.intersect_v_neighborhoods(&common_v);
                let mut u_sig: Vec<usize> = maximal_u.into_iter().collect();
                let mut v_sig: Vec<usize> = common_v.into_iter().collect();
                u_sig.sort_unstable();
                v_sig.sort_unstable();
                if seen.contains(&(u_sig.clone(), v_sig.clone())) {
                    continue;
                }
                let mut mask = 0u128;
                for &u in &u_sig {
                    for &v in &v_sig {
                        let idx = *self.edge_index.get(&(u, v))
                            .expect("every pair of a maximal biclique is an edge");
                        mask |= 1 << idx;
                    }
                }
                masks.push(mask);
                seen.insert((u_sig, v_sig));
            }
        }
        masks
    }

    /// Computes the exact bipartite dimension of the instance via the subset-cover DP.
    /// Returns a `ProcessingError` if the edge count exceeds [`EDGE_LIMIT`].
    pub fn bitmask_dimension(&self) -> Result<usize, ProcessingError> {
        let m = self.m();
        if m == 0 {
            return Ok(0)
        }
        if m > EDGE_LIMIT {
            return Err(ProcessingError::EdgeLimitExceeded { edges: m, limit: EDGE_LIMIT })
        }
        let masks = self.maximal_biclique_masks();
        let full = if m == EDGE_LIMIT { u128::MAX } else { (1u128 << m) - 1 };
        let mut memo: FxHashMap<u128, usize> = FxHashMap::default();
        Ok(cover_from(0, full, &masks, &mut memo))
    }

    fn intersect_u_neighborhoods(&self, subset: &[usize]) -> FxHashSet<usize> {
        let mut iter = subset.iter();
        let first = iter.next().expect("subsets are non-empty");
        let mut common = self.neighbors_of_u(*first).clone();
        for u in iter {
            if common.is_empty() {
                break;
            }
            let nu = self.neighbors_of_u(*u);
            common.retain(|v| nu.contains(v));
        }
        common
    }

    fn intersect_v_neighborhoods(&self, subset: &FxHashSet<usize>) -> FxHashSet<usize> {
        let mut iter = subset.iter();
        let first = iter.next().expect("`subset` is non-empty");
        let mut common = self.neighbors_of_v(*first).clone();
        for v in iter {
            if common.is_empty() {
                break;
            }
            let nv = self.neighbors_of_v(*v);
            common.retain(|u| nv.contains(u));
        }
        common
    }

}

/// Minimum number of biclique masks whose union with `mask` reaches `full`, memoized by `mask`.
fn cover_from(mask: u128, full: u128, masks: &[u128], memo: &mut FxHashMap<u128, usize>) -> usize {
    if mask == full {
        return 0
    }
    if let Some(&count) = memo.get(&mask) {
        return count
    }
    let target = (!mask & full).trailing_zeros();
    let mut best = usize::MAX;
    for &candidate in masks {
        if (candidate >> target) & 1 == 1 {
            // Every edge lies in at least one maximal biclique, so this branch is always taken
            // for some candidate and `best` ends up finite.
            let count = 1 + cover_from(mask | candidate, full, masks, memo);
            if count < best {
                best = count;
            }
        }
    }
    memo.insert(mask, best);
    best
}
