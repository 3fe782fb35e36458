// Italian national backbone, 21 nodes and 36 fiber links

use lazy_static::lazy_static;

use crate::dsa::graph::UnDirectedGraph;
use crate::optical_network::topology::{NetworkTopology, Result};

pub const ITALIAN_NUM_NODES:usize = 21;
pub const ITALIAN_SOURCE_NODE:usize = 0;
pub const ITALIAN_DEST_NODE:usize = 12;

const ITALIAN_LINKS:[(usize,usize);36] = [
    (0,1), (0,2),
    (1,2), (1,3), (1,4),
    (2,7), (2,8), (2,9),
    (3,4), (3,5),
    (4,6), (4,7),
    (5,6),
    (6,7),
    (7,9), (7,10),
    (8,9), (8,12),
    (9,11), (9,12),
    (10,13),
    (11,12), (11,13),
    (12,14), (12,20),
    (13,14), (13,15),
    (14,15), (14,16), (14,18), (14,19),
    (15,16),
    (16,17),
    (17,18),
    (18,19),
    (19,20),
];

lazy_static! {
    static ref italian_graph:UnDirectedGraph = UnDirectedGraph::from(ITALIAN_LINKS);
}

pub fn italian_links() -> Vec<(usize,usize)> {
    italian_graph.edges()
}

// requests go 0 -> 12
pub fn italian_topology(wavelength_count:usize) -> Result<NetworkTopology> {
    italian_topology_between(wavelength_count,ITALIAN_SOURCE_NODE,ITALIAN_DEST_NODE)
}

pub fn italian_topology_between(wavelength_count:usize,source:usize,destination:usize) -> Result<NetworkTopology> {
    NetworkTopology::new(ITALIAN_NUM_NODES,wavelength_count,italian_links(),source,destination)
}
