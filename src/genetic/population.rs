use rand::Rng;
use tracing::trace;

use crate::genetic::builder::make_chromosome;
use crate::genetic::chromosome::Individual;
use crate::genetic::operators::evaluate;
use crate::genetic::ranking;
use crate::optical_network::state::NetworkState;
use crate::optical_network::topology::NetworkTopology;

// Fixed size pool of candidate routes.
//
// Offspring never grow the pool: each one overwrites the worst ranked slot not
// yet overwritten since the last `sort`, walking from the tail towards index 1.
// Index 0 holds the best individual of the last sort and is never evicted.
#[derive(Debug,Clone)]
pub struct Population {
    individuals:Vec<Individual>,
    // next slot to evict, None once every slot but the best has been replaced
    cursor:Option<usize>,
}

impl Population {
    // `size` fresh individuals, a failed build is retried until every slot is filled
    // NetworkTopology guarantees the destination is reachable and the DFS is
    // exhaustive, so every attempt succeeds in practice
    pub fn seed<R:Rng + ?Sized>(topology:&NetworkTopology,size:usize,rng:&mut R) -> Self {
        let mut individuals = Vec::with_capacity(size);
        while individuals.len() < size {
            match make_chromosome(topology, rng) {
                Some(individual) => individuals.push(individual),
                None => trace!(slot = individuals.len(), "seeding failed, retrying"),
            }
        }
        Self::from(individuals)
    }
    pub fn len(&self) -> usize {
        self.individuals.len()
    }
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }
    pub fn get(&self,index:usize) -> Option<&Individual> {
        self.individuals.get(index)
    }
    pub fn get_mut(&mut self,index:usize) -> Option<&mut Individual> {
        self.individuals.get_mut(index)
    }
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }
    pub fn evaluate_all(&mut self,state:&NetworkState) {
        for individual in self.individuals.iter_mut() {
            evaluate(individual, state);
        }
    }
    // ranks best first and rearms the eviction cursor at the tail
    pub fn sort(&mut self) {
        ranking::sort(&mut self.individuals);
        self.cursor = Self::tail(self.individuals.len());
    }
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.first()
    }
    // Overwrites the next worst slot with `offspring`.
    // Returns the slot index, or hands the offspring back when nothing is left to evict.
    pub fn replace_worst(&mut self,offspring:Individual) -> Result<usize,Individual> {
        let Some(index) = self.cursor else {
            return Err(offspring);
        };
        self.individuals[index] = offspring;
        self.cursor = if index > 1 {Some(index - 1)} else {None};
        Ok(index)
    }
    fn tail(len:usize) -> Option<usize> {
        if len > 1 {Some(len - 1)} else {None}
    }
}

impl From<Vec<Individual>> for Population {
    fn from(individuals: Vec<Individual>) -> Self {
        let cursor = Self::tail(individuals.len());
        Self {individuals,cursor}
    }
}
