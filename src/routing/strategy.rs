use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::Config;
use crate::dsa::path_list::PathList;
use crate::genetic::driver::{GeneticAlgorithm, Lightpath, Result, RwaOutcome, ensure_matching};
use crate::optical_network::state::NetworkState;
use crate::optical_network::topology::NetworkTopology;
use crate::routing::first_fit::{first_fit, free_wavelengths};
use crate::routing::shortest_path::{dijkstra, yen};

// how a request picks its route and wavelength
#[derive(Debug,Clone,Copy,Default,PartialEq,Eq,Serialize,Deserialize,clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RwaStrategy {
    // joint routing and assignment by the genetic search
    #[default]
    Genetic,
    // single fewest hops route, lowest free wavelength
    DijkstraFirstFit,
    // the first of the k fewest hops routes with a free wavelength
    YenFirstFit,
}

impl std::fmt::Display for RwaStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Genetic => "genetic",
            Self::DijkstraFirstFit => "dijkstra-first-fit",
            Self::YenFirstFit => "yen-first-fit",
        };
        write!(f,"{name}")
    }
}

pub struct Router {
    strategy:RwaStrategy,
    // alternate routes tried by Yen
    k_paths:usize,
    ga:GeneticAlgorithm,
}

impl Router {
    pub fn new(config:&Config) -> Result<Self> {
        config.rwa.validate()?;
        Ok(Self {
            strategy: config.rwa.strategy,
            k_paths: config.rwa.k_paths,
            ga: GeneticAlgorithm::new(config.ga.clone())?
        })
    }
    pub fn strategy(&self) -> RwaStrategy {
        self.strategy
    }

    // Serves one request. Every strategy commits through `NetworkState::reserve`
    // on Allocated and leaves `state` untouched on Blocked.
    #[instrument(level = "debug", skip_all, fields(strategy = %self.strategy))]
    pub fn route<R:Rng + ?Sized>(
        &self,
        topology:&NetworkTopology,
        state:&mut NetworkState,
        holding_time:f64,
        rng:&mut R
    ) -> Result<RwaOutcome> {
        match self.strategy {
            RwaStrategy::Genetic => self.ga.run(topology, state, holding_time, rng),
            RwaStrategy::DijkstraFirstFit => {
                ensure_matching(topology, state)?;
                let routes:Vec<PathList> = dijkstra(topology).into_iter().collect();
                Ok(assign_first_fit(state, &routes, holding_time))
            },
            RwaStrategy::YenFirstFit => {
                ensure_matching(topology, state)?;
                let routes = yen(topology, self.k_paths);
                Ok(assign_first_fit(state, &routes, holding_time))
            },
        }
    }
}

// first route in `routes` with a wavelength free end to end gets its lowest such wavelength
fn assign_first_fit(state:&mut NetworkState,routes:&[PathList],holding_time:f64) -> RwaOutcome {
    for route in routes {
        let Some(wavelength) = first_fit(state, route.as_slice()) else {
            continue;
        };
        let free_count = free_wavelengths(state, route.as_slice()).count();
        state.reserve(route.as_slice(), wavelength, holding_time);
        debug!(%route, wavelength, free_count, "lightpath allocated");
        return RwaOutcome::Allocated(Lightpath {route:route.clone(),wavelength,free_count});
    }
    debug!(routes = routes.len(), "blocked, no candidate route has a free wavelength");
    RwaOutcome::Blocked
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::{Router, RwaStrategy};
    use crate::config::{Config, ConfigError, RwaConfig};
    use crate::dsa::path_list::PathList;
    use crate::genetic::driver::{RwaError, RwaOutcome};
    use crate::optical_network::nsf::nsf_topology;
    use crate::optical_network::state::NetworkState;

    fn router(strategy:RwaStrategy,k_paths:usize) -> Router {
        let config = Config {rwa:RwaConfig {strategy,k_paths},..Default::default()};
        Router::new(&config).unwrap()
    }

    #[test]
    fn test_dijkstra_first_fit_on_free_nsf() {
        let topology = nsf_topology(8).unwrap();
        let mut state = NetworkState::all_free(&topology);
        let mut rng = StdRng::seed_from_u64(30);
        let outcome = router(RwaStrategy::DijkstraFirstFit,2).route(&topology,&mut state,1.25,&mut rng).unwrap();
        let lightpath = outcome.lightpath().unwrap();
        assert_eq!(lightpath.route,PathList::from([0,5,10,12]));
        assert_eq!(lightpath.wavelength,0);
        assert_eq!(lightpath.free_count,8);
        for (u,v) in [(0,5),(5,10),(10,12)] {
            assert!(!state.wavelength_available(u,v,0) && !state.wavelength_available(v,u,0));
            assert_eq!(state.holding_time(v,u,0),1.25);
            assert!(state.wavelength_available(u,v,1));
        }
    }
    #[test]
    fn test_dijkstra_first_fit_fills_wavelengths_then_blocks() {
        let topology = nsf_topology(4).unwrap();
        let mut state = NetworkState::all_free(&topology);
        let mut rng = StdRng::seed_from_u64(31);
        let dijkstra = router(RwaStrategy::DijkstraFirstFit,2);
        for w in 0..4 {
            let outcome = dijkstra.route(&topology,&mut state,1.0,&mut rng).unwrap();
            assert_eq!(outcome.lightpath().unwrap().wavelength,w);
        }
        // the shortest route is full even though longer ones are free
        let before = state.clone();
        assert_eq!(dijkstra.route(&topology,&mut state,1.0,&mut rng).unwrap(),RwaOutcome::Blocked);
        assert_eq!(state,before);
    }
    #[test]
    fn test_yen_first_fit_falls_back_to_the_next_route() {
        let topology = nsf_topology(4).unwrap();
        let mut state = NetworkState::all_free(&topology);
        for w in 0..4 {
            state.set_wavelength_available(5,10,w,false);
        }
        let mut rng = StdRng::seed_from_u64(32);
        let outcome = router(RwaStrategy::YenFirstFit,2).route(&topology,&mut state,1.0,&mut rng).unwrap();
        let lightpath = outcome.lightpath().unwrap();
        assert_eq!(lightpath.route,PathList::from([0,2,8,9,12]));
        assert_eq!(lightpath.wavelength,0);
        assert!(!state.wavelength_available(8,2,0));

        // a single candidate route behaves like Dijkstra
        let before = state.clone();
        let outcome = router(RwaStrategy::YenFirstFit,1).route(&topology,&mut state,1.0,&mut rng).unwrap();
        assert!(outcome.is_blocked());
        assert_eq!(state,before);
    }
    #[test]
    fn test_genetic_strategy_dispatch() {
        let topology = nsf_topology(8).unwrap();
        let mut state = NetworkState::all_free(&topology);
        let mut rng = StdRng::seed_from_u64(33);
        let genetic = router(RwaStrategy::Genetic,2);
        assert_eq!(genetic.strategy(),RwaStrategy::Genetic);
        let outcome = genetic.route(&topology,&mut state,1.0,&mut rng).unwrap();
        let lightpath = outcome.lightpath().unwrap();
        assert_eq!(lightpath.wavelength,0);
        assert!(topology.is_walk(lightpath.route.as_slice()));
    }
    #[test]
    fn test_baselines_reject_mismatched_state() {
        let topology = nsf_topology(8).unwrap();
        let mut state = NetworkState::all_free(&nsf_topology(2).unwrap());
        let mut rng = StdRng::seed_from_u64(34);
        for strategy in [RwaStrategy::DijkstraFirstFit,RwaStrategy::YenFirstFit] {
            let result = router(strategy,2).route(&topology,&mut state,1.0,&mut rng);
            assert!(matches!(result,Err(RwaError::StateMismatch{..})));
        }
        let config = Config {rwa:RwaConfig {strategy:RwaStrategy::YenFirstFit,k_paths:0},..Default::default()};
        assert!(matches!(Router::new(&config),Err(RwaError::Config(ConfigError::Invalid{field:"k_paths",..}))));
    }
    #[test]
    fn test_strategy_names() {
        let strategy:RwaStrategy = serde_json::from_str("\"yen-first-fit\"").unwrap();
        assert_eq!(strategy,RwaStrategy::YenFirstFit);
        assert_eq!(RwaStrategy::DijkstraFirstFit.to_string(),"dijkstra-first-fit");
        assert_eq!(serde_json::to_string(&RwaStrategy::Genetic).unwrap(),"\"genetic\"");
    }
}
