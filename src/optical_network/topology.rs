use thiserror::Error;

use crate::dsa::graph::UnDirectedGraph;

#[derive(Error,Debug,Clone,PartialEq,Eq)]
pub enum NetworkError {
    #[error("Network has {node_count} nodes, but node {node} was referenced")]
    NodeOutOfRange{node_count:usize,node:usize},
    #[error("Link {node} -> {node} is a self loop, fiber links must join two distinct nodes")]
    SelfLoop{node:usize},
    #[error("A WDM network needs at least one wavelength per link")]
    NoWavelengths,
    #[error("Source and destination are both node {node}")]
    SourceIsDestination{node:usize},
    #[error("Destination {to} cannot be reached from source {from}")]
    Unreachable{from:usize,to:usize},
}

pub type Result<T> = std::result::Result<T,NetworkError>;

// fixed physical topology plus the single source/destination pair every request uses
#[derive(Clone)]
pub struct NetworkTopology {
    graph:UnDirectedGraph,
    node_count:usize,
    wavelength_count:usize,
    source:usize,
    destination:usize
}

impl NetworkTopology {
    pub fn new<E:AsRef<[(usize,usize)]>>(
        node_count:usize,
        wavelength_count:usize,
        edges:E,
        source:usize,
        destination:usize
    ) -> Result<Self> {
        if wavelength_count == 0 {
            return Err(NetworkError::NoWavelengths)
        }
        let out_of_range = |node| NetworkError::NodeOutOfRange { node_count, node };
        for &(node1,node2) in edges.as_ref() {
            if node1 >= node_count {return Err(out_of_range(node1))}
            if node2 >= node_count {return Err(out_of_range(node2))}
            if node1 == node2 {return Err(NetworkError::SelfLoop { node: node1 })}
        }
        if source >= node_count {return Err(out_of_range(source))}
        if destination >= node_count {return Err(out_of_range(destination))}
        if source == destination {
            return Err(NetworkError::SourceIsDestination { node: source })
        }

        let mut graph = UnDirectedGraph::with_capacity(node_count);
        for node in 0..node_count {
            graph.push_node(node);
        }
        for edge in edges.as_ref() {
            graph.push_edge(edge);
        }
        graph.shrink_to_fit();

        // seeding retries until a path is built, so the pair must be connected
        if !graph.reachable(source, destination) {
            return Err(NetworkError::Unreachable { from: source, to: destination })
        }

        Ok(Self {graph,node_count,wavelength_count,source,destination})
    }
    pub fn adjacency(&self,node1:usize,node2:usize) -> bool {
        self.graph.contains_edge(node1, node2)
    }
    pub fn neighbours(&self,node:usize) -> Vec<usize> {
        self.graph.neighbours(node)
    }
    pub fn edges(&self) -> Vec<(usize,usize)> {
        self.graph.edges()
    }
    pub fn links_len(&self) -> usize {
        self.graph.edges_len()
    }
    pub fn node_count(&self) -> usize {
        self.node_count
    }
    pub fn wavelength_count(&self) -> usize {
        self.wavelength_count
    }
    pub fn source(&self) -> usize {
        self.source
    }
    pub fn destination(&self) -> usize {
        self.destination
    }
    // every consecutive pair must be a fiber link
    pub fn is_walk(&self,nodes:&[usize]) -> bool {
        nodes.windows(2).all(|pair| self.adjacency(pair[0], pair[1]))
    }
}

impl std::fmt::Debug for NetworkTopology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkTopology")
            .field("node_count",&self.node_count)
            .field("links",&self.graph.edges_len())
            .field("wavelength_count",&self.wavelength_count)
            .field("source",&self.source)
            .field("destination",&self.destination)
            .finish()
    }
}
