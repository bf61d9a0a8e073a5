//! Exact solver B: twin-reduction kernelization followed by a satisfiability feasibility search.
//!
//! For a candidate cover size k the encoder introduces two boolean variable families over the
//! kernel adjacency matrix: `W[i][z]` ("kernel row i participates in biclique z") and `H[z][j]`
//! ("biclique z covers kernel column j"). Non-edges forbid any biclique from covering them with
//! one binary clause per z; edges demand coverage by at least one biclique, distributed into 2^k
//! clauses of k literals each. The search tries k = 1, 2, ... and reports the first feasible k.

use crate::cover_instance::CoverInstance;
use crate::cust_error::ProcessingError;

/// Hard cap on candidate cover sizes. The distribution encoding emits 2^k clauses per edge, so
/// anything beyond this is intractable to even write down.
pub const MAX_SAT_K: usize = 15;

/// The boundary to an external boolean-satisfiability capability.
///
/// A formula is a sequence of clauses, each a sequence of 1-indexed signed literals with
/// negative literals negated. Any correct general-purpose SAT solver satisfies the contract.
pub trait SatOracle {
    /// Returns a satisfying assignment (signed literals, as in DIMACS), or `None` if the formula
    /// is unsatisfiable.
    fn solve(&mut self, clauses: Vec<Vec<i32>>) -> Result<Option<Vec<i32>>, ProcessingError>;
}

/// Oracle backed by the pure-Rust `splr` CDCL solver.
#[derive(Debug, Default)]
pub struct SplrOracle;

impl SatOracle for SplrOracle {
    fn solve(&mut self, clauses: Vec<Vec<i32>>) -> Result<Option<Vec<i32>>, ProcessingError> {
        match splr::Certificate::try_from(clauses) {
            Ok(splr::Certificate::SAT(assignment)) => Ok(Some(assignment)),
            Ok(splr::Certificate::UNSAT) => Ok(None),
            Err(e) => Err(ProcessingError::OracleFailure(e.to_string())),
        }
    }
}

impl CoverInstance {

    /// Computes the exact bipartite dimension by kernelizing and searching for the smallest
    /// feasible cover size k = 1, 2, ..., `max_k`.
    ///
    /// Returns `Ok(None)` if no cover of size <= `max_k` exists, a normal outcome of bounded
    /// search. `max_k` beyond [`MAX_SAT_K`] is rejected up front.
    pub fn sat_dimension<O: SatOracle>(
        &self,
        max_k: usize,
        oracle: &mut O,
    ) -> Result<Option<usize>, ProcessingError> {
        if self.m() == 0 {
            return Ok(Some(0))
        }
        if max_k > MAX_SAT_K {
            return Err(ProcessingError::InvalidParameter(format!(
                "max_k is {} but the feasibility encoding supports at most {}",
                max_k, MAX_SAT_K,
            )))
        }
        let kernel = self.kernelized();
        let rows = kernel.u_nodes.len();
        let cols = kernel.v_nodes.len();
        for k in 1..=max_k {
            // Counting bound: k bicliques distinguish at most 2^k membership fingerprints per
            // side, and the kernel is twin-free.
            if rows > (1 << k) || cols > (1 << k) {
                continue;
            }
            if k == 1 {
                // A single biclique covers the kernel iff the kernel is complete; no oracle call
                // needed, and the k = 1 encoding would consist of unit clauses anyway.
                if kernel.m() == rows * cols {
                    return Ok(Some(1))
                }
                continue;
            }
            let clauses = kernel.encode_cover_feasibility(k);
            if oracle.solve(clauses)?.is_some() {
                return Ok(Some(k))
            }
        }
        Ok(None)
    }

    /// Encodes "does a biclique cover of size `k` exist?" for the (already kernelized) instance
    /// as CNF. Variables: `W[i][z] = 1 + i*k + z`, `H[z][j] = 1 + rows*k + z*cols + j`.
    pub(crate) fn encode_cover_feasibility(&self, k: usize) -> Vec<Vec<i32>> {
        let rows = self.u_nodes.len();
        let cols = self.v_nodes.len();
        let w_var = |i: usize, z: usize| (1 + i * k + z) as i32;
        let h_var = |z: usize, j: usize| (1 + rows * k + z * cols + j) as i32;
        let mut clauses = Vec::new();
        for (i, &u) in self.u_nodes.iter().enumerate() {
            for (j, &v) in self.v_nodes.iter().enumerate() {
                if self.has_edge(u, v) {
                    // Covered by at least one biclique: distribute over all 2^k choices of
                    // contributing literal per biclique.
                    for pattern in 0..(1usize << k) {
                        let clause = (0..k)
                            .map(|z| {
                                if (pattern >> z) & 1 == 0 {
                                    w_var(i, z)
                                } else {
                                    h_var(z, j)
                                }
                            })
                            .collect();
                        clauses.push(clause);
                    }
                } else {
                    // No biclique may claim the non-edge (i, j).
                    for z in 0..k {
                        clauses.push(vec![-w_var(i, z), -h_var(z, j)]);
                    }
                }
            }
        }
        clauses
    }

}
