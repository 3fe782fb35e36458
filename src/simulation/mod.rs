// dynamic traffic over a WDM network: requests arrive as a Poisson process of
// rate `load` Erlangs with unit mean exponential holding times, each one is
// routed by the genetic search, and the network clock advances between arrivals

use rand::Rng;
use tracing::{info, instrument};

use crate::config::Config;
use crate::genetic::driver::Result;
use crate::optical_network::state::NetworkState;
use crate::optical_network::topology::NetworkTopology;
use crate::routing::strategy::Router;
use crate::scientific_computing::statistics::{mean, sample_std_dev};

#[derive(Debug,Clone,PartialEq)]
pub struct LoadReport {
    pub load:usize,
    pub calls:usize,
    pub blocked:usize,
    // percent of calls blocked
    pub blocking_probability:f64,
}

impl LoadReport {
    fn new(load:usize,calls:usize,blocked:usize) -> Self {
        let blocking_probability = if calls == 0 {0.0} else {100.0*blocked as f64/calls as f64};
        Self {load,calls,blocked,blocking_probability}
    }
}

// blocking probability at one load across every repetition
#[derive(Debug,Clone,PartialEq)]
pub struct LoadSummary {
    pub load:usize,
    pub mean:f64,
    // None with a single repetition
    pub std_dev:Option<f64>,
}

#[derive(Debug,Clone,Default,PartialEq)]
pub struct SimulationReport {
    // one row of load reports per repetition, loads ascending
    repetitions:Vec<Vec<LoadReport>>,
}

impl SimulationReport {
    pub fn repetitions(&self) -> &[Vec<LoadReport>] {
        &self.repetitions
    }
    pub fn loads(&self) -> Vec<usize> {
        self.repetitions.first()
            .map(|row| row.iter().map(|report| report.load).collect())
            .unwrap_or_default()
    }
    pub fn summary(&self) -> Vec<LoadSummary> {
        self.loads().into_iter().enumerate().filter_map(|(i,load)| {
            let samples:Vec<f64> = self.repetitions.iter()
                .filter_map(|row| row.get(i))
                .map(|report| report.blocking_probability)
                .collect();
            Some(LoadSummary {load,mean:mean(&samples)?,std_dev:sample_std_dev(&samples)})
        }).collect()
    }
}

pub struct Simulator {
    config:Config,
    router:Router,
}

impl Simulator {
    pub fn new(config:Config) -> Result<Self> {
        config.validate()?;
        let router = Router::new(&config)?;
        Ok(Self {config,router})
    }

    #[instrument(level = "info", skip_all, fields(
        strategy = %self.router.strategy(),
        repetitions = self.config.simulation.repetitions,
        calls = self.config.simulation.calls
    ))]
    pub fn run<R:Rng + ?Sized>(&self,topology:&NetworkTopology,rng:&mut R) -> Result<SimulationReport> {
        let simulation = &self.config.simulation;
        let mut report = SimulationReport::default();
        for repetition in 0..simulation.repetitions {
            let base = self.initial_state(topology, rng);
            let mut row = Vec::with_capacity(simulation.max_load + 1 - simulation.min_load);
            for load in simulation.min_load..=simulation.max_load {
                // every load starts from the same traffic snapshot
                let mut state = base.clone();
                let load_report = self.run_load(topology, &mut state, load, rng)?;
                info!(repetition, load, blocked = load_report.blocked,
                    blocking_probability = load_report.blocking_probability, "load finished");
                row.push(load_report);
            }
            report.repetitions.push(row);
        }
        Ok(report)
    }

    fn initial_state<R:Rng + ?Sized>(&self,topology:&NetworkTopology,rng:&mut R) -> NetworkState {
        let network = &self.config.network;
        if network.channel_free {
            NetworkState::all_free(topology)
        } else {
            NetworkState::random(topology, network.channel_bias, rng)
        }
    }

    // `calls` arrivals at `load` Erlangs against `state`
    pub fn run_load<R:Rng + ?Sized>(
        &self,
        topology:&NetworkTopology,
        state:&mut NetworkState,
        load:usize,
        rng:&mut R
    ) -> Result<LoadReport> {
        let calls = self.config.simulation.calls;
        let mut blocked = 0;
        for _ in 0..calls {
            let until_next = exponential(rng)/load as f64;
            let holding_time = exponential(rng);
            if self.router.route(topology, state, holding_time, rng)?.is_blocked() {
                blocked += 1;
            }
            state.advance(topology, until_next);
        }
        Ok(LoadReport::new(load,calls,blocked))
    }
}

// unit mean exponential draw, 1-U lies in (0,1] so the log is finite
fn exponential<R:Rng + ?Sized>(rng:&mut R) -> f64 {
    let u:f64 = rng.random();
    -(1.0 - u).ln()
}
