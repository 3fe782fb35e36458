// RedCLARA, Cooperación Latino Americana de Redes Avanzadas, 13 nodes and 17 fiber links

use lazy_static::lazy_static;

use crate::dsa::graph::UnDirectedGraph;
use crate::optical_network::topology::{NetworkTopology, Result};

pub const CLARA_NUM_NODES:usize = 13;
pub const CLARA_SOURCE_NODE:usize = 3;
pub const CLARA_DEST_NODE:usize = 9;

const CLARA_LINKS:[(usize,usize);17] = [
    (0,1), (0,5), (0,8), (0,11),
    (1,2),
    (2,3),
    (3,4),
    (4,5),
    (5,6), (5,7), (5,11),
    (7,8),
    (8,9), (8,11),
    (9,10), (9,11),
    (11,12),
];

lazy_static! {
    static ref clara_graph:UnDirectedGraph = UnDirectedGraph::from(CLARA_LINKS);
}

pub fn clara_links() -> Vec<(usize,usize)> {
    clara_graph.edges()
}

// requests go from El Salvador (3) to Argentina (9)
pub fn clara_topology(wavelength_count:usize) -> Result<NetworkTopology> {
    clara_topology_between(wavelength_count,CLARA_SOURCE_NODE,CLARA_DEST_NODE)
}

pub fn clara_topology_between(wavelength_count:usize,source:usize,destination:usize) -> Result<NetworkTopology> {
    NetworkTopology::new(CLARA_NUM_NODES,wavelength_count,clara_links(),source,destination)
}
