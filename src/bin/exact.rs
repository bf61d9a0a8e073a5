//! Binary that takes a bipartite edge list on standard in (one `u v` pair per line, `c`-lines
//! are comments), computes the exact bipartite dimension and writes it to standard out.

use std::error;
use std::io::{self, BufRead};

use biclique_cover::cust_error::ImportError;
use biclique_cover::{minimum_cover_dp, minimum_cover_exact, BipartiteGraph};

const MAX_K: usize = 9;

fn read_pairs<R: BufRead>(input: R) -> Result<Vec<(usize, usize)>, ImportError> {
    let mut pairs = Vec::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with("c ") {
            continue;
        }
        let mut parts = line.split_whitespace();
        let u = parts.next().ok_or(ImportError::InputMalformedError)?.parse()?;
        let v = parts.next().ok_or(ImportError::InputMalformedError)?.parse()?;
        if parts.next().is_some() {
            return Err(ImportError::InputMalformedError);
        }
        pairs.push((u, v));
    }
    Ok(pairs)
}

pub fn main() -> Result<(), Box<dyn error::Error>> {
    let stdin = io::stdin();
    let pairs = read_pairs(stdin.lock())?;
    let graph = BipartiteGraph::from_pairs(&pairs).map_err(ImportError::from)?;
    let dimension = match minimum_cover_exact(&graph, MAX_K) {
        Ok(found) => found,
        // The oracle is an external capability; fall back to the bitmask solver.
        Err(_) => Some(minimum_cover_dp(&graph)?),
    };
    match dimension {
        Some(k) => println!("{}", k),
        None => println!("c no cover of size <= {} found", MAX_K),
    }
    Ok(())
}
