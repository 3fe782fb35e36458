// randomized depth first search with backtracking, used to seed the population
// and to regrow the tail of a mutated route

use rand::Rng;
use tracing::trace;

use crate::dsa::path_list::PathList;
use crate::genetic::chromosome::Individual;
use crate::optical_network::topology::NetworkTopology;

// Extends `visited` with `current` and walks randomly towards `destination`.
//
// Neighbours are drawn uniformly without replacement: the drawn candidate is
// swap-removed from the pool, so a dead end is never retried. Each recursion
// level works on its own copy of the prefix, a failed branch simply drops it,
// and the caller's prefix is never touched.
//
// Returns the complete route `visited + current + ... + destination`, or None
// when every neighbour is a dead end (degree 0 or already on the path).
pub fn build_path<R:Rng + ?Sized>(
    topology:&NetworkTopology,
    current:usize,
    destination:usize,
    visited:&PathList,
    rng:&mut R
) -> Option<PathList> {
    let mut path = visited.clone();
    path.push(current);
    if current == destination {
        return Some(path);
    }

    let mut candidates = topology.neighbours(current);
    while !candidates.is_empty() {
        let pick = rng.random_range(0..candidates.len());
        let next = candidates.swap_remove(pick);
        if path.contains(next) {
            continue;
        }
        if let Some(route) = build_path(topology, next, destination, &path, rng) {
            return Some(route);
        }
    }

    trace!(node = current, depth = path.len(), "dead end, backtracking");
    None
}

// a fresh source -> destination individual with unevaluated fitness
pub fn make_chromosome<R:Rng + ?Sized>(topology:&NetworkTopology,rng:&mut R) -> Option<Individual> {
    let route = build_path(topology, topology.source(), topology.destination(), &PathList::new(), rng)?;
    Some(Individual::new(route, topology.wavelength_count()))
}
