use std::cmp::Ordering;

use rand::Rng;

use crate::genetic::chromosome::Individual;

// Total order over evaluated individuals, `Less` means `a` ranks ahead of `b`:
// 1. more usable wavelengths (least congested route)
// 2. the first wavelength where the labels differ is usable on `a` (first fit)
// 3. fewer nodes on the route (shortest path)
// anything left is a tie
pub fn compare(a:&Individual,b:&Individual) -> Ordering {
    b.free_count.cmp(&a.free_count)
        .then_with(|| first_fit_order(a, b))
        .then_with(|| a.path.len().cmp(&b.path.len()))
}

fn first_fit_order(a:&Individual,b:&Individual) -> Ordering {
    for (label_a,label_b) in a.labels.iter().zip(b.labels.iter()) {
        if label_a != label_b {
            return if label_a {Ordering::Less} else {Ordering::Greater};
        }
    }
    Ordering::Equal
}

// stable, best first
pub fn sort(individuals:&mut [Individual]) {
    individuals.sort_by(compare);
}

// Binary tournament run twice, once per parent slot.
//
// A random incumbent meets `tournament_size` random challengers, each distinct
// from the current incumbent, and a challenger takes over only if it strictly
// outranks the incumbent. The two slots are drawn independently and may name
// the same individual.
pub fn select<R:Rng + ?Sized>(individuals:&[Individual],tournament_size:usize,rng:&mut R) -> (usize,usize) {
    let first = tournament(individuals, tournament_size, rng);
    let second = tournament(individuals, tournament_size, rng);
    (first,second)
}

fn tournament<R:Rng + ?Sized>(individuals:&[Individual],tournament_size:usize,rng:&mut R) -> usize {
    let size = individuals.len();
    debug_assert!(size > 0,"tournament over an empty population");
    if size < 2 {
        return 0;
    }
    let mut incumbent = rng.random_range(0..size);
    for _ in 0..tournament_size {
        // uniform over every index but the incumbent
        let mut challenger = rng.random_range(0..size - 1);
        if challenger >= incumbent {
            challenger += 1;
        }
        if compare(&individuals[challenger], &individuals[incumbent]) == Ordering::Less {
            incumbent = challenger;
        }
    }
    incumbent
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::{compare, select, sort};
    use crate::dsa::bitset::BitSet;
    use crate::dsa::path_list::PathList;
    use crate::genetic::chromosome::Individual;

    fn ranked(path:&[usize],labels:&[bool]) -> Individual {
        let mut individual = Individual::new(PathList::from(path),labels.len());
        individual.labels = labels.iter().copied().collect::<BitSet>();
        individual.free_count = individual.labels.count_ones();
        individual
    }

    #[test]
    fn test_more_free_wavelengths_win() {
        let a = ranked(&[0,1,3,4,9,12],&[false,true,true,false]);
        let b = ranked(&[0,5,10,12],&[true,false,false,false]);
        assert_eq!(compare(&a,&b),Ordering::Less);
        assert_eq!(compare(&b,&a),Ordering::Greater);
    }
    #[test]
    fn test_first_fit_breaks_ties() {
        let a = ranked(&[0,1,3,4,9,12],&[true,false,false,true]);
        let b = ranked(&[0,5,10,12],&[false,true,true,false]);
        assert_eq!(compare(&a,&b),Ordering::Less);
    }
    #[test]
    fn test_shorter_route_breaks_ties() {
        let a = ranked(&[0,1,3,4,9,12],&[true,false,true,false]);
        let b = ranked(&[0,5,10,12],&[true,false,true,false]);
        assert_eq!(compare(&a,&b),Ordering::Greater);
        let c = ranked(&[0,2,8,12],&[true,false,true,false]);
        assert_eq!(compare(&b,&c),Ordering::Equal);
    }
    #[test]
    fn test_sort_is_transitive_and_idempotent() {
        let mut rng = StdRng::seed_from_u64(2018);
        let mut population:Vec<Individual> = (0..60).map(|_| {
            let len = rng.random_range(2..7);
            let path:Vec<usize> = (0..len).collect();
            let labels:Vec<bool> = (0..4).map(|_| rng.random_bool(0.5)).collect();
            ranked(&path,&labels)
        }).collect();
        sort(&mut population);
        for pair in population.windows(2) {
            assert_ne!(compare(&pair[0],&pair[1]),Ordering::Greater);
        }
        for (i,a) in population.iter().enumerate() {
            for b in population[i..].iter() {
                assert_ne!(compare(a,b),Ordering::Greater);
            }
        }
        let once = population.clone();
        sort(&mut population);
        assert_eq!(once,population);
    }
    #[test]
    fn test_tournament_prefers_the_best() {
        let mut population = vec![ranked(&[0,1,2],&[true,true,true,true])];
        for _ in 0..9 {
            population.push(ranked(&[0,1,2],&[false,false,false,false]));
        }
        let mut rng = StdRng::seed_from_u64(4);
        let mut best_picks = 0;
        for _ in 0..200 {
            let (first,second) = select(&population,3,&mut rng);
            assert!(first < population.len() && second < population.len());
            best_picks += (first == 0) as usize + (second == 0) as usize;
        }
        // one in ten uniformly, roughly four in ten after 3 rounds
        assert!(best_picks > 80,"best individual won only {best_picks} of 400 slots");
    }
    #[test]
    fn test_tournament_keeps_incumbent_on_ties() {
        let population:Vec<Individual> = (0..5).map(|_| ranked(&[0,1,2],&[true,false])).collect();
        let mut rng = StdRng::seed_from_u64(9);
        // every draw is a tie, so the winners are simply the first random incumbents
        let (first,second) = select(&population,3,&mut rng);
        assert!(first < 5 && second < 5);
        assert_eq!(select(&population[..1],3,&mut rng),(0,0));
    }
}
