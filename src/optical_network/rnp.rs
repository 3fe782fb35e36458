// Brazilian Rede Nacional de Ensino e Pesquisa (Rede Ipê), 28 nodes and 39 fiber links

use lazy_static::lazy_static;

use crate::dsa::graph::UnDirectedGraph;
use crate::optical_network::topology::{NetworkTopology, Result};

pub const RNP_NUM_NODES:usize = 28;
pub const RNP_SOURCE_NODE:usize = 3;
pub const RNP_DEST_NODE:usize = 11;

const RNP_LINKS:[(usize,usize);39] = [
    (0,1),
    (1,3), (1,4),
    (2,4),
    (3,4), (3,7), (3,17), (3,19), (3,25),
    (4,6), (4,12),
    (5,25),
    (6,7),
    (7,8), (7,11), (7,18), (7,19),
    (8,9),
    (9,10),
    (10,11),
    (11,12), (11,13), (11,15),
    (13,14),
    (14,15),
    (15,16), (15,19),
    (16,17),
    (17,18),
    (18,19), (18,20), (18,22),
    (20,21),
    (21,22),
    (22,23),
    (23,24),
    (24,25), (24,26),
    (26,27),
];

lazy_static! {
    static ref rnp_graph:UnDirectedGraph = UnDirectedGraph::from(RNP_LINKS);
}

pub fn rnp_links() -> Vec<(usize,usize)> {
    rnp_graph.edges()
}

// requests go from Distrito Federal (3) to Pernambuco (11)
pub fn rnp_topology(wavelength_count:usize) -> Result<NetworkTopology> {
    rnp_topology_between(wavelength_count,RNP_SOURCE_NODE,RNP_DEST_NODE)
}

pub fn rnp_topology_between(wavelength_count:usize,source:usize,destination:usize) -> Result<NetworkTopology> {
    NetworkTopology::new(RNP_NUM_NODES,wavelength_count,rnp_links(),source,destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rnp_shape() {
        let topology = rnp_topology(8).unwrap();
        assert_eq!(topology.node_count(),28);
        assert_eq!(topology.links_len(),39);
        assert_eq!(topology.source(),3);
        assert_eq!(topology.destination(),11);
        assert_eq!(topology.neighbours(3),vec![1, 4, 7, 17, 19, 25]);
    }
}
