use rand::Rng;

use crate::optical_network::topology::NetworkTopology;

// per link, per wavelength channel occupancy, row major [node1][node2][wavelength]
// every write goes to both directions, so available[u][v][w] == available[v][u][w] always holds
// indices out of range panic, the same way slice indexing does
#[derive(Clone,Debug,PartialEq)]
pub struct NetworkState {
    node_count:usize,
    wavelength_count:usize,
    available:Vec<bool>,
    holding_time:Vec<f64>
}

impl NetworkState {
    fn with_fill(node_count:usize,wavelength_count:usize,free:bool) -> Self {
        let len = node_count*node_count*wavelength_count;
        Self {
            node_count,
            wavelength_count,
            available:vec![free;len],
            holding_time:vec![0.0;len]
        }
    }
    // every channel on every link free, no traffic
    pub fn all_free(topology:&NetworkTopology) -> Self {
        let mut state = Self::with_fill(topology.node_count(),topology.wavelength_count(),false);
        for (node1,node2) in topology.edges() {
            for w in 0..state.wavelength_count {
                state.set_wavelength_available(node1, node2, w, true);
            }
        }
        state
    }
    // every channel busy with zero remaining time
    pub fn all_busy(topology:&NetworkTopology) -> Self {
        Self::with_fill(topology.node_count(),topology.wavelength_count(),false)
    }
    // each link channel is free with probability `bias`, busy channels get a holding time in [0,1)
    // a NaN or infinite bias counts as 0, every channel busy
    pub fn random<R:Rng + ?Sized>(topology:&NetworkTopology,bias:f64,rng:&mut R) -> Self {
        let bias = if bias.is_finite() {bias.clamp(0.0,1.0)} else {0.0};
        let mut state = Self::all_busy(topology);
        for (node1,node2) in topology.edges() {
            for w in 0..state.wavelength_count {
                let free = rng.random_bool(bias);
                state.set_wavelength_available(node1, node2, w, free);
                if !free {
                    state.set_holding_time(node1, node2, w, rng.random_range(0.0..1.0));
                }
            }
        }
        state
    }
    #[inline]
    fn index(&self,node1:usize,node2:usize,w:usize) -> usize {
        assert!(node1 < self.node_count && node2 < self.node_count && w < self.wavelength_count,
            "channel ({node1},{node2},{w}) outside a {0}x{0}x{1} network state",
            self.node_count,self.wavelength_count);
        (node1*self.node_count + node2)*self.wavelength_count + w
    }
    pub fn node_count(&self) -> usize {
        self.node_count
    }
    pub fn wavelength_count(&self) -> usize {
        self.wavelength_count
    }
    pub fn matches(&self,topology:&NetworkTopology) -> bool {
        self.node_count == topology.node_count() && self.wavelength_count == topology.wavelength_count()
    }
    pub fn wavelength_available(&self,node1:usize,node2:usize,w:usize) -> bool {
        self.available[self.index(node1, node2, w)]
    }
    pub fn set_wavelength_available(&mut self,node1:usize,node2:usize,w:usize,free:bool) {
        let forward = self.index(node1, node2, w);
        let backward = self.index(node2, node1, w);
        self.available[forward] = free;
        self.available[backward] = free;
    }
    pub fn holding_time(&self,node1:usize,node2:usize,w:usize) -> f64 {
        self.holding_time[self.index(node1, node2, w)]
    }
    pub fn set_holding_time(&mut self,node1:usize,node2:usize,w:usize,time:f64) {
        let forward = self.index(node1, node2, w);
        let backward = self.index(node2, node1, w);
        self.holding_time[forward] = time;
        self.holding_time[backward] = time;
    }
    // locks wavelength `w` along every hop of `route`
    pub fn reserve(&mut self,route:&[usize],w:usize,holding_time:f64) {
        for pair in route.windows(2) {
            self.set_wavelength_available(pair[0], pair[1], w, false);
            self.set_holding_time(pair[0], pair[1], w, holding_time);
        }
    }
    pub fn free_channels(&self,node1:usize,node2:usize) -> usize {
        (0..self.wavelength_count).filter(|w| self.wavelength_available(node1, node2, *w)).count()
    }
    // one time step of the traffic model: decay holding times, release expired channels
    pub fn advance(&mut self,topology:&NetworkTopology,elapsed:f64) {
        for (node1,node2) in topology.edges() {
            for w in 0..self.wavelength_count {
                let remaining = self.holding_time(node1, node2, w);
                if remaining > elapsed {
                    self.set_holding_time(node1, node2, w, remaining - elapsed);
                } else {
                    self.set_holding_time(node1, node2, w, 0.0);
                    self.set_wavelength_available(node1, node2, w, true);
                }
            }
        }
    }
}
