// U.S. National Science Foundation network (NSFNET), 14 nodes and 20 fiber links

use lazy_static::lazy_static;

use crate::dsa::graph::UnDirectedGraph;
use crate::optical_network::topology::{NetworkTopology, Result};

pub const NSF_NUM_NODES:usize = 14;
pub const NSF_SOURCE_NODE:usize = 0;
pub const NSF_DEST_NODE:usize = 12;

const NSF_LINKS:[(usize,usize);20] = [
    (0,1), (0,2), (0,5),
    (1,2), (1,3),
    (2,8),
    (3,4), (3,6), (3,13),
    (4,9),
    (5,6), (5,10),
    (6,7),
    (7,8),
    (8,9),
    (9,11), (9,12),
    (10,11), (10,12),
    (11,13),
];

lazy_static! {
    static ref nsf_graph:UnDirectedGraph = UnDirectedGraph::from(NSF_LINKS);
}

pub fn nsf_links() -> Vec<(usize,usize)> {
    nsf_graph.edges()
}

// NSFNET with `wavelength_count` channels per link, requests always go 0 -> 12
pub fn nsf_topology(wavelength_count:usize) -> Result<NetworkTopology> {
    nsf_topology_between(wavelength_count,NSF_SOURCE_NODE,NSF_DEST_NODE)
}

pub fn nsf_topology_between(wavelength_count:usize,source:usize,destination:usize) -> Result<NetworkTopology> {
    NetworkTopology::new(NSF_NUM_NODES,wavelength_count,nsf_links(),source,destination)
}
