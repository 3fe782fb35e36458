use crate::dsa::bitset::BitSet;
use crate::dsa::path_list::PathList;

// a candidate route plus the fitness derived from it
// `labels` and `free_count` go stale whenever `path` changes, they are only
// meaningful right after `operators::evaluate`
#[derive(Clone,Debug,PartialEq,Eq)]
pub struct Individual {
    pub(crate) path:PathList,
    // GOF labels: bit w set iff wavelength w is free on every hop
    pub(crate) labels:BitSet,
    pub(crate) free_count:usize,
}

impl Individual {
    pub fn new(path:PathList,wavelength_count:usize) -> Self {
        Self {
            path,
            labels:BitSet::zeros(wavelength_count),
            free_count:0
        }
    }
    pub fn path(&self) -> &PathList {
        &self.path
    }
    pub fn labels(&self) -> &BitSet {
        &self.labels
    }
    pub fn free_count(&self) -> usize {
        self.free_count
    }
    // number of nodes on the route
    pub fn len(&self) -> usize {
        self.path.len()
    }
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
    // lowest indexed usable wavelength (first fit)
    pub fn first_free_wavelength(&self) -> Option<usize> {
        self.labels.first_one()
    }
    pub fn reset_fitness(&mut self) {
        self.labels.clear();
        self.free_count = 0;
    }
}

impl std::fmt::Display for Individual {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,"{} {:?} ({} free)",self.path,self.labels,self.free_count)
    }
}
