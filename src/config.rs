use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::optical_network::catalog::TopologyKind;
use crate::optical_network::topology::{NetworkError, NetworkTopology};
use crate::routing::strategy::RwaStrategy;

#[derive(Error,Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config value `{field}`: {reason}")]
    Invalid{field:&'static str,reason:String},
}

type Result<T> = std::result::Result<T,ConfigError>;

// genetic algorithm tunables
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct GaConfig {
    pub population_size:usize,
    pub generations:usize,
    pub crossover_rate:f64,
    pub mutation_rate:f64,
    pub tournament_size:usize,
    // fixed seed for reproducible runs, fresh entropy when absent
    pub seed:Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size:10,
            generations:5,
            crossover_rate:0.40,
            mutation_rate:0.02,
            tournament_size:3,
            seed:None,
        }
    }
}

impl GaConfig {
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(ConfigError::Invalid {
                field: "population_size",
                reason: format!("tournaments need at least 2 individuals, got {}",self.population_size)
            })
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::Invalid { field: "tournament_size", reason: "must be at least 1".into() })
        }
        check_rate("crossover_rate",self.crossover_rate)?;
        check_rate("mutation_rate",self.mutation_rate)?;
        Ok(())
    }
}

fn check_rate(field:&'static str,rate:f64) -> Result<()> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::Invalid { field, reason: format!("{rate} is not a probability") })
    }
    Ok(())
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub topology:TopologyKind,
    pub wavelength_count:usize,
    // request endpoints, the backbone's usual pair when absent
    pub source:Option<usize>,
    pub destination:Option<usize>,
    // start with every channel free instead of a random occupancy
    pub channel_free:bool,
    // probability that a channel starts free
    pub channel_bias:f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            topology:TopologyKind::default(),
            wavelength_count:8,
            source:None,
            destination:None,
            channel_free:false,
            channel_bias:0.5,
        }
    }
}

impl NetworkConfig {
    pub fn source(&self) -> usize {
        self.source.unwrap_or_else(|| self.topology.default_source())
    }
    pub fn destination(&self) -> usize {
        self.destination.unwrap_or_else(|| self.topology.default_destination())
    }
    pub fn build_topology(&self) -> std::result::Result<NetworkTopology,NetworkError> {
        self.topology.topology_between(self.wavelength_count, self.source(), self.destination())
    }
}

// which RWA strategy serves the requests
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct RwaConfig {
    pub strategy:RwaStrategy,
    // candidate routes for Yen's k shortest paths
    pub k_paths:usize,
}

impl Default for RwaConfig {
    fn default() -> Self {
        Self {
            strategy:RwaStrategy::default(),
            k_paths:2,
        }
    }
}

impl RwaConfig {
    pub fn validate(&self) -> Result<()> {
        if self.k_paths == 0 {
            return Err(ConfigError::Invalid { field: "k_paths", reason: "must be at least 1".into() })
        }
        Ok(())
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub repetitions:usize,
    // offered load range in Erlangs, both ends inclusive
    pub min_load:usize,
    pub max_load:usize,
    pub calls:usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            repetitions:1,
            min_load:1,
            max_load:10,
            calls:150,
        }
    }
}

#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct Config {
    pub ga:GaConfig,
    pub rwa:RwaConfig,
    pub network:NetworkConfig,
    pub simulation:SimulationConfig,
}

impl Config {
    pub fn from_json_str(json:&str) -> Result<Self> {
        let config:Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
    pub fn load<P:AsRef<Path>>(path:P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
    pub fn validate(&self) -> Result<()> {
        self.ga.validate()?;
        self.rwa.validate()?;
        check_rate("channel_bias",self.network.channel_bias)?;
        if self.network.wavelength_count == 0 {
            return Err(ConfigError::Invalid { field: "wavelength_count", reason: "must be at least 1".into() })
        }
        let simulation = &self.simulation;
        if simulation.min_load == 0 || simulation.min_load > simulation.max_load {
            return Err(ConfigError::Invalid {
                field: "min_load",
                reason: format!("load range {}..={} is empty or starts at 0",simulation.min_load,simulation.max_load)
            })
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigError, GaConfig};
    use crate::optical_network::catalog::TopologyKind;
    use crate::routing::strategy::RwaStrategy;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.ga.population_size,10);
        assert_eq!(config.ga.tournament_size,3);
        assert_eq!(config.network.topology,TopologyKind::Nsf);
        assert_eq!(config.network.destination(),12);
        assert_eq!(config.rwa.strategy,RwaStrategy::Genetic);
        assert_eq!(config.rwa.k_paths,2);
    }
    #[test]
    fn test_topology_and_strategy_from_json() {
        let config = Config::from_json_str(
            r#"{"network":{"topology":"rnp"},"rwa":{"strategy":"yen-first-fit","k_paths":3}}"#
        ).unwrap();
        assert_eq!((config.network.source(),config.network.destination()),(3,11));
        let topology = config.network.build_topology().unwrap();
        assert_eq!(topology.node_count(),28);
        assert_eq!(config.rwa.strategy,RwaStrategy::YenFirstFit);

        let config = Config::from_json_str(r#"{"network":{"topology":"janet","source":0}}"#).unwrap();
        assert_eq!((config.network.source(),config.network.destination()),(0,6));
        assert!(matches!(Config::from_json_str(r#"{"rwa":{"k_paths":0}}"#),
            Err(ConfigError::Invalid{field:"k_paths",..})));
        assert!(matches!(Config::from_json_str(r#"{"network":{"topology":"geant"}}"#),Err(ConfigError::Parse(_))));
    }
    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json_str(r#"{"ga":{"generations":40,"seed":7},"simulation":{"calls":20}}"#).unwrap();
        assert_eq!(config.ga.generations,40);
        assert_eq!(config.ga.seed,Some(7));
        assert_eq!(config.ga.population_size,10);
        assert_eq!(config.simulation.calls,20);
        assert_eq!(config.network,Default::default());
    }
    #[test]
    fn test_rejects_invalid_values() {
        let ga = GaConfig {population_size:1,..Default::default()};
        assert!(matches!(ga.validate(),Err(ConfigError::Invalid{field:"population_size",..})));
        let ga = GaConfig {mutation_rate:1.5,..Default::default()};
        assert!(matches!(ga.validate(),Err(ConfigError::Invalid{field:"mutation_rate",..})));
        assert!(matches!(Config::from_json_str("{\"ga\":"),Err(ConfigError::Parse(_))));
        assert!(matches!(Config::from_json_str(r#"{"simulation":{"min_load":5,"max_load":2}}"#),
            Err(ConfigError::Invalid{field:"min_load",..})));
    }
}
