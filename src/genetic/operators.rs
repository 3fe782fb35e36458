use rand::Rng;
use tracing::trace;

use crate::dsa::bitset::BitSet;
use crate::genetic::builder::build_path;
use crate::genetic::chromosome::Individual;
use crate::optical_network::state::NetworkState;
use crate::optical_network::topology::NetworkTopology;

// Regrows the route from a random interior node.
//
// The node at index k (never the source, never the destination) is kept, the
// tail after it is rebuilt by `build_path`. Routes of fewer than 3 nodes have no
// interior node and come back unchanged, so does the original when the regrowth
// hits a dead end.
pub fn mutate<R:Rng + ?Sized>(topology:&NetworkTopology,individual:&Individual,rng:&mut R) -> Individual {
    let path = individual.path();
    if path.len() < 3 {
        return individual.clone();
    }
    // drawn once, uniformly over the interior indices 1..=len-2
    let k = rng.random_range(1..path.len() - 1);
    let start_router = path.as_slice()[k];
    let prefix = path.slice(0..k);

    match build_path(topology, start_router, topology.destination(), &prefix, rng) {
        Some(route) => Individual::new(route, topology.wavelength_count()),
        None => {
            trace!(%path, mutation_point = k, "mutation failed, keeping the original route");
            individual.clone()
        }
    }
}

// interior routers shared by both routes, ascending and deduplicated
pub fn common_routers(father:&Individual,mother:&Individual) -> Vec<usize> {
    let interior = |individual:&Individual| {
        let path = individual.path();
        path.slice(1..path.len().saturating_sub(1))
    };
    let mother_interior = interior(mother);
    let mut common:Vec<usize> = interior(father).iter()
        .filter(|router| mother_interior.contains(*router))
        .collect();
    common.sort_unstable();
    common.dedup();
    common
}

// One point crossover at a router both parents pass through.
//
// son      = father[..router] + mother[router..]
// daughter = mother[..router] + father[router..]
//
// Each parent is cut at the first occurrence of the router. The joined halves
// may cross each other elsewhere, such walks are loop-erased so both children
// stay simple paths from source to destination. Returns None when the parents
// share no interior router.
pub fn cross<R:Rng + ?Sized>(father:&Individual,mother:&Individual,rng:&mut R) -> Option<(Individual,Individual)> {
    let common = common_routers(father, mother);
    if common.is_empty() {
        return None;
    }
    let router = common[rng.random_range(0..common.len())];

    let father_path = father.path();
    let mother_path = mother.path();
    let father_cut = father_path.position(router)?;
    let mother_cut = mother_path.position(router)?;

    let son = father_path.slice(0..father_cut)
        .concat(&mother_path.slice(mother_cut..mother_path.len()));
    let daughter = mother_path.slice(0..mother_cut)
        .concat(&father_path.slice(father_cut..father_path.len()));

    let wavelength_count = father.labels().len();
    // loop erasure may leave a child shorter than the spliced walk
    let son = Individual::new(son.erase_loops(), wavelength_count);
    let daughter = Individual::new(daughter.erase_loops(), wavelength_count);
    Some((son,daughter))
}

// General objective function (GOF).
//
// For the wavelength of weight w (1-indexed) the label is
//     L_w = sum_links(w * available[u][v][w-1]) / (w * links)
// which is 1 exactly when the wavelength is free on every hop. `free_count`
// counts the wavelengths whose label is 1.
pub fn evaluate(individual:&mut Individual,state:&NetworkState) {
    let wavelength_count = state.wavelength_count();
    let links = individual.path.hops();

    let mut labels = BitSet::zeros(wavelength_count);
    let mut free_count = 0;
    if links > 0 {
        for w in 1..=wavelength_count {
            let numerator:usize = individual.path.links()
                .map(|(u,v)| w*(state.wavelength_available(u, v, w-1) as usize))
                .sum();
            let usable = numerator == w*links;
            if usable {
                labels.store_at(w-1, true);
                free_count += 1;
            }
        }
    }

    individual.labels = labels;
    individual.free_count = free_count;
}
