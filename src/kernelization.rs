//! Twin-reduction kernelization for the biclique cover problem.
//!
//! Two vertices on the same side are *true twins* if their neighbor sets, restricted to the
//! currently active vertices of the other side, are identical. Dropping all but one
//! representative per twin class does not change the bipartite dimension: any cover of the
//! kernel extends to the full graph by placing each twin wherever its representative sits.
//! The reduction alternates between the two sides until a full pass removes nothing.

use fxhash::FxHashSet;
use crate::cover_instance::CoverInstance;

impl CoverInstance {

    /// Reduces both sides to one representative per twin class, iterating to a fixed point.
    /// Returns the kept vertices per side, in the instance's sorted order.
    pub fn twin_reduction(&self) -> (Vec<usize>, Vec<usize>) {
        let mut curr_u = self.u_nodes.clone();
        let mut curr_v = self.v_nodes.clone();
        let mut stable = false;
        while !stable {
            stable = true;
            let v_set: FxHashSet<usize> = curr_v.iter().copied().collect();
            curr_u = keep_representatives(&curr_u, &mut stable, |u| {
                signature(self.neighbors_of_u(u), &v_set)
            });
            let u_set: FxHashSet<usize> = curr_u.iter().copied().collect();
            curr_v = keep_representatives(&curr_v, &mut stable, |v| {
                signature(self.neighbors_of_v(v), &u_set)
            });
        }
        (curr_u, curr_v)
    }

    /// Returns the instance induced by the twin-reduction representatives. The kernel has the
    /// same bipartite dimension as `self`.
    pub fn kernelized(&self) -> CoverInstance {
        let (kernel_u, kernel_v) = self.twin_reduction();
        let kernel_v_set: FxHashSet<usize> = kernel_v.iter().copied().collect();
        let mut pairs = Vec::new();
        for &u in &kernel_u {
            let mut kept: Vec<usize> = self
                .neighbors_of_u(u)
                .intersection(&kernel_v_set)
                .copied()
                .collect();
            kept.sort_unstable();
            for v in kept {
                pairs.push((u, v));
            }
        }
        CoverInstance::from_pairs(&pairs).expect("the kernel inherits distinct edges and disjoint sides")
    }

}

/// The sorted neighbor list restricted to `active`, hashable for twin detection.
fn signature(neighbors: &FxHashSet<usize>, active: &FxHashSet<usize>) -> Vec<usize> {
    let mut sig: Vec<usize> = neighbors.intersection(active).copied().collect();
    sig.sort_unstable();
    sig
}

/// Keeps the first vertex per distinct signature, flagging `stable` down when a twin is dropped.
fn keep_representatives<F>(nodes: &[usize], stable: &mut bool, signature_of: F) -> Vec<usize>
where
    F: Fn(usize) -> Vec<usize>,
{
    let mut seen: FxHashSet<Vec<usize>> = FxHashSet::default();
    let mut kept = Vec::with_capacity(nodes.len());
    for &node in nodes {
        if seen.insert(signature_of(node)) {
            kept.push(node);
        } else {
            *stable = false;
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_bipartite_collapses_test() {
        // K_{3,3}: all left vertices are twins, all right vertices are twins.
        let pairs: Vec<(usize, usize)> = (0..3).flat_map(|u| (3..6).map(move |v| (u, v))).collect();
        let ins = CoverInstance::from_pairs(&pairs).unwrap();
        let (ku, kv) = ins.twin_reduction();
        assert_eq!(ku, vec![0]);
        assert_eq!(kv, vec![3]);
        let kernel = ins.kernelized();
        assert_eq!(kernel.m(), 1);
    }

    #[test]
    fn crown_is_twin_free_test() {
        let ins = CoverInstance::from_pairs(&[(0, 3), (0, 4), (1, 3), (1, 5), (2, 4), (2, 5)]).unwrap();
        let (ku, kv) = ins.twin_reduction();
        assert_eq!(ku, vec![0, 1, 2]);
        assert_eq!(kv, vec![3, 4, 5]);
        assert_eq!(ins.kernelized(), ins);
    }

    #[test]
    fn partial_reduction_test() {
        // 1 and 2 are twins; the right side stays irreducible.
        let ins = CoverInstance::from_pairs(&[(0, 5), (1, 5), (1, 6), (2, 5), (2, 6)]).unwrap();
        let (ku, kv) = ins.twin_reduction();
        assert_eq!(ku, vec![0, 1]);
        assert_eq!(kv, vec![5, 6]);
    }

    #[test]
    fn kernel_preserves_dimension_test() {
        // K_{3,3} plus a pending edge; kernel answer must match the full answer.
        let mut pairs: Vec<(usize, usize)> = (0..3).flat_map(|u| (3..6).map(move |v| (u, v))).collect();
        pairs.push((7, 3));
        let ins = CoverInstance::from_pairs(&pairs).unwrap();
        let full = ins.bitmask_dimension().unwrap();
        let kernel = ins.kernelized().bitmask_dimension().unwrap();
        assert_eq!(full, kernel);
        assert_eq!(full, 2);
    }

}
