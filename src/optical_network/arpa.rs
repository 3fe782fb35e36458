// U.S. Advanced Research Projects Agency network (ARPANET), 20 nodes and 30 fiber links

use lazy_static::lazy_static;

use crate::dsa::graph::UnDirectedGraph;
use crate::optical_network::topology::{NetworkTopology, Result};

pub const ARPA_NUM_NODES:usize = 20;
pub const ARPA_SOURCE_NODE:usize = 0;
pub const ARPA_DEST_NODE:usize = 12;

const ARPA_LINKS:[(usize,usize);30] = [
    (0,1), (0,2), (0,19),
    (1,2), (1,3),
    (2,4),
    (3,4), (3,5),
    (4,6),
    (5,6), (5,7),
    (6,9),
    (7,8), (7,9), (7,10),
    (8,9), (8,19),
    (9,15),
    (10,11), (10,12),
    (11,12),
    (12,13),
    (13,14), (13,16),
    (14,15),
    (15,17), (15,18),
    (16,17), (16,19),
    (17,18),
];

lazy_static! {
    static ref arpa_graph:UnDirectedGraph = UnDirectedGraph::from(ARPA_LINKS);
}

pub fn arpa_links() -> Vec<(usize,usize)> {
    arpa_graph.edges()
}

// requests go 0 -> 12
pub fn arpa_topology(wavelength_count:usize) -> Result<NetworkTopology> {
    arpa_topology_between(wavelength_count,ARPA_SOURCE_NODE,ARPA_DEST_NODE)
}

pub fn arpa_topology_between(wavelength_count:usize,source:usize,destination:usize) -> Result<NetworkTopology> {
    NetworkTopology::new(ARPA_NUM_NODES,wavelength_count,arpa_links(),source,destination)
}
