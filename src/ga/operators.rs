//! Selection, crossover and mutation operators on stop permutations.

use rand::seq::IndexedRandom;
use rand::Rng;

use super::Chromosome;

const SWAP_SHARE: f64 = 0.4;
const REVERSE_SHARE: f64 = 0.3;

/// k-way tournament: samples `k` distinct individuals and returns the one
/// with the highest fitness (the first sampled on ties).
///
/// Returns `None` only for an empty population.
pub fn tournament_select<'p, R: Rng>(
    population: &'p [Chromosome],
    k: usize,
    rng: &mut R,
) -> Option<&'p Chromosome> {
    population
        .choose_multiple(rng, k.max(1))
        .reduce(|best, c| if c.fitness() > best.fitness() { c } else { best })
}

/// Order crossover (OX).
///
/// Copies a random contiguous slice of `parent1` into the child at the
/// same positions, then fills the remaining positions, starting right after
/// the slice and wrapping around, with the stops of `parent2` in `parent2`
/// order, skipping those already present.
///
/// # Examples
///
/// ```
/// use fuel_routing::ga::operators::order_crossover;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut child = order_crossover(&[1, 2, 3, 4, 5], &[5, 3, 1, 4, 2], &mut rng);
/// child.sort();
/// assert_eq!(child, vec![1, 2, 3, 4, 5]);
/// ```
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    if n < 2 {
        return parent1.to_vec();
    }
    let start = rng.random_range(0..=n - 2);
    let end = rng.random_range(start + 1..=n);
    order_crossover_slice(parent1, parent2, start, end)
}

/// OX with an explicit slice `parent1[start..end]`.
///
/// # Panics
///
/// Panics if `start > end`, if `end > parent1.len()`, or if the parents
/// are not permutations of the same stops.
pub fn order_crossover_slice(parent1: &[usize], parent2: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = parent1.len();
    if n == 0 {
        return Vec::new();
    }
    let max_site = parent1.iter().chain(parent2).copied().max().unwrap_or(0);
    let mut present = vec![false; max_site + 1];
    let mut child: Vec<Option<usize>> = vec![None; n];
    for i in start..end {
        child[i] = Some(parent1[i]);
        present[parent1[i]] = true;
    }

    let mut pos = end % n;
    for &site in parent2 {
        if present[site] {
            continue;
        }
        while child[pos].is_some() {
            pos = (pos + 1) % n;
        }
        child[pos] = Some(site);
        present[site] = true;
    }
    child.into_iter().flatten().collect()
}

/// Swaps two distinct random positions.
pub fn swap_mutation<R: Rng>(stops: &mut [usize], rng: &mut R) {
    let n = stops.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    stops.swap(i, j);
}

/// Reverses a random segment of at least one stop.
pub fn reverse_mutation<R: Rng>(stops: &mut [usize], rng: &mut R) {
    let n = stops.len();
    if n < 2 {
        return;
    }
    let start = rng.random_range(0..=n - 2);
    let end = rng.random_range(start + 1..=n);
    stops[start..end].reverse();
}

/// Removes one random stop and reinserts it at a random position.
pub fn relocate_mutation<R: Rng>(stops: &mut Vec<usize>, rng: &mut R) {
    let n = stops.len();
    if n < 2 {
        return;
    }
    let site = stops.remove(rng.random_range(0..n));
    let pos = rng.random_range(0..n);
    stops.insert(pos, site);
}

/// With probability `rate`, applies one mutation: swap (40%), segment
/// reversal (30%) or relocation (30%).
pub fn mutate<R: Rng>(stops: &mut Vec<usize>, rate: f64, rng: &mut R) {
    if rng.random::<f64>() >= rate {
        return;
    }
    let draw = rng.random::<f64>();
    if draw < SWAP_SHARE {
        swap_mutation(stops, rng);
    } else if draw < SWAP_SHARE + REVERSE_SHARE {
        reverse_mutation(stops, rng);
    } else {
        relocate_mutation(stops, rng);
    }
}
