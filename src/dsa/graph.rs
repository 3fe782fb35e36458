use std::borrow::Borrow;

type HashMap<K,V> = std::collections::hash_map::HashMap<K,V,nohash::BuildNoHashHasher<usize>>;
type HashSet<K> = std::collections::hash_set::HashSet<K,nohash::BuildNoHashHasher<usize>>;

#[derive(Clone)]
pub struct UnDirectedGraph {
    edges_len:usize,
    adjacency_list:HashMap<usize,HashSet<usize>>
}

impl Default for UnDirectedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl UnDirectedGraph {
    pub fn edges_len(&self) -> usize {
        self.edges_len
    }
    pub fn nodes_len(&self) -> usize {
        self.adjacency_list.len()
    }
    pub fn is_empty(&self) -> bool {
        if self.nodes_len() == 0 {
            debug_assert!(self.edges_len() == 0);
            return true;
        }
        false
    }
    pub fn new() -> Self {
        Self {
            edges_len:0,
            adjacency_list:HashMap::with_hasher(
                nohash::BuildNoHashHasher::default()
            )
        }
    }
    pub fn with_capacity(capacity:usize) -> Self {
        Self {
            edges_len:0,
            adjacency_list:HashMap::with_capacity_and_hasher(
                capacity,
                nohash::BuildNoHashHasher::default())
        }
    }
    // only push node, not adding edges
    pub fn push_node<B:Borrow<usize>>(&mut self,node:B) {
        let node = node.borrow();
        if self.adjacency_list.contains_key(node) {
            return;
        }
        let adj_nodes:HashSet<usize> = HashSet::with_hasher(nohash::BuildNoHashHasher::default());
        self.adjacency_list.insert(*node,adj_nodes);
    }
    pub fn push_edge<B:Borrow<(usize,usize)>>(&mut self,edge:B) {
        let (node1,node2) = edge.borrow();
        let mut is_edge_present = false;
        // adj_nodes.insert() returns false if the neighbour is already registered
        if !self.adjacency_list.entry(*node1)
            .or_insert_with(|| HashSet::with_hasher(nohash::BuildNoHashHasher::default()))
            .insert(*node2) {is_edge_present = true};
        if !self.adjacency_list.entry(*node2)
            .or_insert_with(|| HashSet::with_hasher(nohash::BuildNoHashHasher::default()))
            .insert(*node1) {is_edge_present = true};
        if !is_edge_present {
            self.edges_len += 1;
        }
    }
    pub fn contains_node(&self,node:usize) -> bool {
        self.adjacency_list.contains_key(&node)
    }
    pub fn contains_edge(&self,node1:usize,node2:usize) -> bool {
        self.adjacency_list.get(&node1)
            .is_some_and(|adj_nodes| adj_nodes.contains(&node2))
    }
    // ascending order, so a seeded rng always sees the same candidate list
    pub fn neighbours(&self,node:usize) -> Vec<usize> {
        let Some(adj_nodes) = self.adjacency_list.get(&node)
            else {return vec![]};
        let mut neighbours:Vec<usize> = adj_nodes.iter().copied().collect();
        neighbours.sort_unstable();
        neighbours
    }
    pub fn degree(&self,node:usize) -> usize {
        self.adjacency_list.get(&node).map_or(0,|adj_nodes| adj_nodes.len())
    }
    // every edge once, as (smaller,larger), sorted
    pub fn edges(&self) -> Vec<(usize,usize)> {
        let mut edges = Vec::with_capacity(self.edges_len);
        for (node,adj_nodes) in self.adjacency_list.iter() {
            for other in adj_nodes.iter() {
                if node < other {
                    edges.push((*node,*other));
                }
            }
        }
        edges.sort_unstable();
        debug_assert_eq!(edges.len(),self.edges_len);
        edges
    }
    // iterative dfs, O(V + E)
    pub fn reachable(&self,from:usize,to:usize) -> bool {
        if !self.contains_node(from) || !self.contains_node(to) {
            return false;
        }
        let mut visited:HashSet<usize> = HashSet::with_capacity_and_hasher(
            self.nodes_len(),nohash::BuildNoHashHasher::default());
        let mut stack = Vec::with_capacity(self.nodes_len());
        stack.push(from);
        while let Some(current) = stack.pop() {
            if current == to {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(adj_nodes) = self.adjacency_list.get(&current) {
                stack.extend(adj_nodes.iter().filter(|n| !visited.contains(*n)));
            }
        }
        false
    }
    pub fn shrink_to_fit(&mut self) {
        self.adjacency_list.shrink_to_fit();
        for v in self.adjacency_list.values_mut() {
            v.shrink_to_fit();
        }
    }
}

impl<T:AsRef<[(usize,usize)]>> From<T> for UnDirectedGraph {
    fn from(value: T) -> Self {
        let size_estimation = value.as_ref().len();
        let mut new_graph = Self::with_capacity(size_estimation);
        for edge in value.as_ref() {
            new_graph.push_edge(edge);
        }
        new_graph.shrink_to_fit();
        new_graph
    }
}

impl<B:Borrow<(usize,usize)>> FromIterator<B> for UnDirectedGraph {
    fn from_iter<T: IntoIterator<Item = B>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let size_estimation = match iter.size_hint() {
            (_,Some(n)) => {n},
            (n,None) => {n}
        };
        let mut new_graph = Self::with_capacity(size_estimation);
        for b in iter {
            new_graph.push_edge(b.borrow());
        }
        new_graph.shrink_to_fit();
        new_graph
    }
}
