// U.K. Joint Academic Network (JANET), 7 nodes and 9 fiber links

use lazy_static::lazy_static;

use crate::dsa::graph::UnDirectedGraph;
use crate::optical_network::topology::{NetworkTopology, Result};

pub const JANET_NUM_NODES:usize = 7;
pub const JANET_SOURCE_NODE:usize = 1;
pub const JANET_DEST_NODE:usize = 6;

const JANET_LINKS:[(usize,usize);9] = [
    (0,1), (0,2),
    (1,2), (1,3),
    (2,4),
    (3,4), (3,5),
    (4,6),
    (5,6),
];

lazy_static! {
    static ref janet_graph:UnDirectedGraph = UnDirectedGraph::from(JANET_LINKS);
}

pub fn janet_links() -> Vec<(usize,usize)> {
    janet_graph.edges()
}

// requests go from Manchester (1) to London (6)
pub fn janet_topology(wavelength_count:usize) -> Result<NetworkTopology> {
    janet_topology_between(wavelength_count,JANET_SOURCE_NODE,JANET_DEST_NODE)
}

pub fn janet_topology_between(wavelength_count:usize,source:usize,destination:usize) -> Result<NetworkTopology> {
    NetworkTopology::new(JANET_NUM_NODES,wavelength_count,janet_links(),source,destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_janet_shape() {
        let topology = janet_topology(8).unwrap();
        assert_eq!(topology.node_count(),7);
        assert_eq!(topology.links_len(),9);
        assert_eq!(topology.source(),1);
        assert_eq!(topology.destination(),6);
        assert_eq!(topology.neighbours(6),vec![4, 5]);
    }
}
