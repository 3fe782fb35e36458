// the reference backbones the simulator can run on, selectable by name
// from the command line and the configuration file

use serde::{Deserialize, Serialize};

use crate::optical_network::topology::{NetworkTopology, Result};
use crate::optical_network::{arpa, clara, italian, janet, nsf, rnp};

#[derive(Debug,Clone,Copy,Default,PartialEq,Eq,Serialize,Deserialize,clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TopologyKind {
    #[default]
    Nsf,
    Clara,
    Janet,
    Rnp,
    Arpa,
    Italian,
}

impl TopologyKind {
    pub fn node_count(&self) -> usize {
        match self {
            Self::Nsf => nsf::NSF_NUM_NODES,
            Self::Clara => clara::CLARA_NUM_NODES,
            Self::Janet => janet::JANET_NUM_NODES,
            Self::Rnp => rnp::RNP_NUM_NODES,
            Self::Arpa => arpa::ARPA_NUM_NODES,
            Self::Italian => italian::ITALIAN_NUM_NODES,
        }
    }
    pub fn default_source(&self) -> usize {
        match self {
            Self::Nsf => nsf::NSF_SOURCE_NODE,
            Self::Clara => clara::CLARA_SOURCE_NODE,
            Self::Janet => janet::JANET_SOURCE_NODE,
            Self::Rnp => rnp::RNP_SOURCE_NODE,
            Self::Arpa => arpa::ARPA_SOURCE_NODE,
            Self::Italian => italian::ITALIAN_SOURCE_NODE,
        }
    }
    pub fn default_destination(&self) -> usize {
        match self {
            Self::Nsf => nsf::NSF_DEST_NODE,
            Self::Clara => clara::CLARA_DEST_NODE,
            Self::Janet => janet::JANET_DEST_NODE,
            Self::Rnp => rnp::RNP_DEST_NODE,
            Self::Arpa => arpa::ARPA_DEST_NODE,
            Self::Italian => italian::ITALIAN_DEST_NODE,
        }
    }
    pub fn topology_between(&self,wavelength_count:usize,source:usize,destination:usize) -> Result<NetworkTopology> {
        match self {
            Self::Nsf => nsf::nsf_topology_between(wavelength_count, source, destination),
            Self::Clara => clara::clara_topology_between(wavelength_count, source, destination),
            Self::Janet => janet::janet_topology_between(wavelength_count, source, destination),
            Self::Rnp => rnp::rnp_topology_between(wavelength_count, source, destination),
            Self::Arpa => arpa::arpa_topology_between(wavelength_count, source, destination),
            Self::Italian => italian::italian_topology_between(wavelength_count, source, destination),
        }
    }
    // the backbone with its usual request endpoints
    pub fn topology(&self,wavelength_count:usize) -> Result<NetworkTopology> {
        self.topology_between(wavelength_count, self.default_source(), self.default_destination())
    }
}

impl std::fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Nsf => "nsf",
            Self::Clara => "clara",
            Self::Janet => "janet",
            Self::Rnp => "rnp",
            Self::Arpa => "arpa",
            Self::Italian => "italian",
        };
        write!(f,"{name}")
    }
}
