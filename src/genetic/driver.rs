use rand::Rng;
use thiserror::Error;
use tracing::{debug, instrument, trace};

use crate::config::{ConfigError, GaConfig};
use crate::dsa::path_list::PathList;
use crate::genetic::operators::{cross, evaluate, mutate};
use crate::genetic::population::Population;
use crate::genetic::ranking;
use crate::optical_network::state::NetworkState;
use crate::optical_network::topology::NetworkTopology;

#[derive(Error,Debug)]
pub enum RwaError {
    #[error("Network state covers {state_nodes} nodes and {state_wavelengths} wavelengths, \
        but the topology has {topology_nodes} nodes and {topology_wavelengths} wavelengths")]
    StateMismatch{
        state_nodes:usize,
        state_wavelengths:usize,
        topology_nodes:usize,
        topology_wavelengths:usize
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T,RwaError>;

// route and wavelength committed for one request
#[derive(Debug,Clone,PartialEq)]
pub struct Lightpath {
    pub route:PathList,
    pub wavelength:usize,
    // usable wavelengths the winning route had before the commit
    pub free_count:usize,
}

#[derive(Debug,Clone,PartialEq)]
pub enum RwaOutcome {
    Allocated(Lightpath),
    Blocked,
}

impl RwaOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self,Self::Blocked)
    }
    pub fn lightpath(&self) -> Option<&Lightpath> {
        match self {
            Self::Allocated(lightpath) => Some(lightpath),
            Self::Blocked => None,
        }
    }
}

pub struct GeneticAlgorithm {
    config:GaConfig,
}

impl GeneticAlgorithm {
    pub fn new(config:GaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {config})
    }

    // Searches a route and a wavelength for one request between the topology's
    // source and destination. On Allocated the first fit wavelength of the best
    // route is reserved in `state` for `holding_time`; on Blocked `state` is left
    // exactly as it was.
    #[instrument(level = "debug", skip_all, fields(
        source = topology.source(),
        destination = topology.destination(),
        holding_time = holding_time
    ))]
    pub fn run<R:Rng + ?Sized>(
        &self,
        topology:&NetworkTopology,
        state:&mut NetworkState,
        holding_time:f64,
        rng:&mut R
    ) -> Result<RwaOutcome> {
        ensure_matching(topology, state)?;

        let mut population = Population::seed(topology, self.config.population_size, rng);
        for generation in 0..self.config.generations {
            population.evaluate_all(state);
            population.sort();
            if let Some(best) = population.best() {
                debug!(generation, free_count = best.free_count(), hops = best.path().hops(), "generation ranked");
            }
            for _ in 0..population.len()/2 {
                self.breed(topology, state, &mut population, rng);
            }
        }
        population.evaluate_all(state);
        population.sort();

        let Some(best) = population.best() else {
            return Ok(RwaOutcome::Blocked)
        };
        let wavelength = match best.first_free_wavelength() {
            Some(w) if best.free_count() > 0 => w,
            _ => {
                debug!(route = %best.path(), "blocked, no wavelength free on the best route");
                return Ok(RwaOutcome::Blocked)
            }
        };
        state.reserve(best.path().as_slice(), wavelength, holding_time);
        debug!(route = %best.path(), wavelength, free_count = best.free_count(), "lightpath allocated");
        Ok(RwaOutcome::Allocated(Lightpath {
            route: best.path().clone(),
            wavelength,
            free_count: best.free_count()
        }))
    }

    // one pairing: tournament, optional mutation of each parent in place,
    // optional crossover whose offspring evict the worst ranked slots
    fn breed<R:Rng + ?Sized>(
        &self,
        topology:&NetworkTopology,
        state:&NetworkState,
        population:&mut Population,
        rng:&mut R
    ) {
        let (first,second) = ranking::select(population.individuals(), self.config.tournament_size, rng);
        self.maybe_mutate(topology, state, population, first, rng);
        if second != first {
            self.maybe_mutate(topology, state, population, second, rng);
        }

        if !rng.random_bool(self.config.crossover_rate) {
            return;
        }
        let (Some(father),Some(mother)) = (population.get(first),population.get(second)) else {
            return;
        };
        let Some((son,daughter)) = cross(father, mother, rng) else {
            trace!(father = %father.path(), mother = %mother.path(), "no common router, crossover skipped");
            return;
        };
        for mut child in [son,daughter] {
            evaluate(&mut child, state);
            if population.replace_worst(child).is_err() {
                trace!("no slot left to evict this generation, offspring dropped");
                break;
            }
        }
    }

    fn maybe_mutate<R:Rng + ?Sized>(
        &self,
        topology:&NetworkTopology,
        state:&NetworkState,
        population:&mut Population,
        index:usize,
        rng:&mut R
    ) {
        if !rng.random_bool(self.config.mutation_rate) {
            return;
        }
        let Some(parent) = population.get(index) else {
            return;
        };
        let mut mutated = mutate(topology, parent, rng);
        evaluate(&mut mutated, state);
        if let Some(slot) = population.get_mut(index) {
            *slot = mutated;
        }
    }
}

// every strategy checks this before touching `state`
pub(crate) fn ensure_matching(topology:&NetworkTopology,state:&NetworkState) -> Result<()> {
    if !state.matches(topology) {
        return Err(RwaError::StateMismatch {
            state_nodes: state.node_count(),
            state_wavelengths: state.wavelength_count(),
            topology_nodes: topology.node_count(),
            topology_wavelengths: topology.wavelength_count()
        })
    }
    Ok(())
}

// one-shot entry point, see `GeneticAlgorithm::run`
pub fn rwa<R:Rng + ?Sized>(
    topology:&NetworkTopology,
    state:&mut NetworkState,
    holding_time:f64,
    config:&GaConfig,
    rng:&mut R
) -> Result<RwaOutcome> {
    GeneticAlgorithm::new(config.clone())?.run(topology, state, holding_time, rng)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::{GeneticAlgorithm, RwaError, RwaOutcome, rwa};
    use crate::config::{ConfigError, GaConfig};
    use crate::dsa::path_list::PathList;
    use crate::optical_network::nsf::nsf_topology;
    use crate::optical_network::state::NetworkState;
    use crate::optical_network::topology::NetworkTopology;

    #[test]
    fn test_free_linear_network_is_allocated() {
        let topology = NetworkTopology::new(3,4,[(0,1),(1,2)],0,2).unwrap();
        let mut state = NetworkState::all_free(&topology);
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = rwa(&topology,&mut state,2.5,&GaConfig::default(),&mut rng).unwrap();
        let lightpath = outcome.lightpath().unwrap();
        assert_eq!(lightpath.route,PathList::from([0,1,2]));
        assert_eq!(lightpath.free_count,4);
        assert_eq!(lightpath.wavelength,0);
        for (u,v) in [(0,1),(1,0),(1,2),(2,1)] {
            assert!(!state.wavelength_available(u,v,0));
            assert_eq!(state.holding_time(u,v,0),2.5);
            assert!(state.wavelength_available(u,v,1));
        }
    }
    #[test]
    fn test_next_request_takes_the_next_wavelength() {
        let topology = NetworkTopology::new(3,2,[(0,1),(1,2)],0,2).unwrap();
        let mut state = NetworkState::all_free(&topology);
        let mut rng = StdRng::seed_from_u64(2);
        let ga = GeneticAlgorithm::new(GaConfig::default()).unwrap();
        let first = ga.run(&topology,&mut state,1.0,&mut rng).unwrap();
        let second = ga.run(&topology,&mut state,1.0,&mut rng).unwrap();
        assert_eq!(first.lightpath().unwrap().wavelength,0);
        assert_eq!(second.lightpath().unwrap().wavelength,1);
        assert_eq!(second.lightpath().unwrap().free_count,1);
        assert!(ga.run(&topology,&mut state,1.0,&mut rng).unwrap().is_blocked());
    }
    #[test]
    fn test_busy_source_links_block_without_touching_state() {
        let topology = nsf_topology(8).unwrap();
        let mut state = NetworkState::all_free(&topology);
        for neighbour in topology.neighbours(0) {
            for w in 0..8 {
                state.set_wavelength_available(0,neighbour,w,false);
                state.set_holding_time(0,neighbour,w,0.3);
            }
        }
        let before = state.clone();
        let mut rng = StdRng::seed_from_u64(3);
        let outcome = rwa(&topology,&mut state,1.0,&GaConfig::default(),&mut rng).unwrap();
        assert_eq!(outcome,RwaOutcome::Blocked);
        assert_eq!(state,before);
    }
    #[test]
    fn test_nsf_allocation_commits_the_route() {
        let topology = nsf_topology(8).unwrap();
        let mut state = NetworkState::all_free(&topology);
        let mut rng = StdRng::seed_from_u64(4);
        let outcome = rwa(&topology,&mut state,0.7,&GaConfig::default(),&mut rng).unwrap();
        let lightpath = outcome.lightpath().unwrap();
        assert_eq!(lightpath.free_count,8);
        assert_eq!(lightpath.wavelength,0);
        assert_eq!(lightpath.route.first(),Some(0));
        assert_eq!(lightpath.route.last(),Some(12));
        assert!(lightpath.route.is_simple());
        assert!(topology.is_walk(lightpath.route.as_slice()));
        for (u,v) in lightpath.route.links() {
            assert!(!state.wavelength_available(u,v,0) && !state.wavelength_available(v,u,0));
            assert_eq!(state.holding_time(v,u,0),0.7);
        }
    }
    #[test]
    fn test_least_congested_route_wins() {
        // two disjoint routes, 0 - 1 - 3 has a single free wavelength, 0 - 2 - 3 has both
        let topology = NetworkTopology::new(4,2,[(0,1),(1,3),(0,2),(2,3)],0,3).unwrap();
        let mut state = NetworkState::all_free(&topology);
        state.set_wavelength_available(0,1,0,false);
        let config = GaConfig {population_size:20,..Default::default()};
        let mut rng = StdRng::seed_from_u64(5);
        let outcome = rwa(&topology,&mut state,1.0,&config,&mut rng).unwrap();
        let lightpath = outcome.lightpath().unwrap();
        assert_eq!(lightpath.route,PathList::from([0,2,3]));
        assert_eq!(lightpath.free_count,2);
    }
    #[test]
    fn test_same_seed_same_outcome() {
        let topology = nsf_topology(8).unwrap();
        let base = NetworkState::random(&topology,0.5,&mut StdRng::seed_from_u64(6));
        let config = GaConfig {generations:20,crossover_rate:0.9,mutation_rate:0.3,..Default::default()};
        let mut state1 = base.clone();
        let mut state2 = base.clone();
        let outcome1 = rwa(&topology,&mut state1,1.0,&config,&mut StdRng::seed_from_u64(7)).unwrap();
        let outcome2 = rwa(&topology,&mut state2,1.0,&config,&mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(outcome1,outcome2);
        assert_eq!(state1,state2);
    }
    #[test]
    fn test_caller_misuse_is_rejected() {
        let topology = nsf_topology(8).unwrap();
        let other = nsf_topology(4).unwrap();
        let mut state = NetworkState::all_free(&other);
        let mut rng = StdRng::seed_from_u64(8);
        let result = rwa(&topology,&mut state,1.0,&GaConfig::default(),&mut rng);
        assert!(matches!(result,Err(RwaError::StateMismatch{state_wavelengths:4,topology_wavelengths:8,..})));

        let config = GaConfig {crossover_rate:-0.1,..Default::default()};
        assert!(matches!(GeneticAlgorithm::new(config),Err(RwaError::Config(ConfigError::Invalid{..}))));
    }
}
