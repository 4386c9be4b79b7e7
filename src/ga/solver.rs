//! Elitist generational loop.

use rand::Rng;
use tracing::{debug, info, instrument, warn};

use super::operators::{mutate, order_crossover, tournament_select};
use super::seeding::seed_population;
use super::Chromosome;
use crate::constructive::nearest_feasible_neighbor;
use crate::error::ConfigError;
use crate::evaluation::TourEvaluator;
use crate::local_search::two_opt_pass;
use crate::models::{FuelNetwork, SolveOutcome, Tour};

/// Genetic algorithm parameters.
///
/// # Examples
///
/// ```
/// use fuel_routing::ga::GeneticConfig;
///
/// let config = GeneticConfig::default()
///     .with_population_size(30)
///     .with_generations(40);
/// assert_eq!(config.population_size, 30);
/// assert!(config.validate().is_ok());
///
/// let bad = GeneticConfig::default().with_mutation_rate(1.5);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    /// Individuals per generation.
    pub population_size: usize,
    /// Number of generations.
    pub generations: usize,
    /// Probability that an offspring is mutated.
    pub mutation_rate: f64,
    /// Fraction of the population copied unchanged into the next generation.
    pub elitism_rate: f64,
    /// Individuals sampled per tournament.
    pub tournament_size: usize,
    /// Probability that an offspring gets one 2-opt pass.
    pub local_search_rate: f64,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.1,
            elitism_rate: 0.2,
            tournament_size: 3,
            local_search_rate: 0.1,
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets the elitism rate.
    pub fn with_elitism_rate(mut self, elitism_rate: f64) -> Self {
        self.elitism_rate = elitism_rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, tournament_size: usize) -> Self {
        self.tournament_size = tournament_size;
        self
    }

    /// Sets the local search rate.
    pub fn with_local_search_rate(mut self, local_search_rate: f64) -> Self {
        self.local_search_rate = local_search_rate;
        self
    }

    /// Number of elites carried over each generation.
    pub fn elite_count(&self) -> usize {
        ((self.population_size as f64 * self.elitism_rate).floor() as usize).min(self.population_size)
    }

    /// Checks parameter ranges.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidGeneticParameter`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::InvalidGeneticParameter {
                name: "population_size",
                reason: "must be at least 2",
            });
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::InvalidGeneticParameter {
                name: "tournament_size",
                reason: "must be at least 1",
            });
        }
        let rates = [
            ("mutation_rate", self.mutation_rate),
            ("elitism_rate", self.elitism_rate),
            ("local_search_rate", self.local_search_rate),
        ];
        for (name, value) in rates {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidGeneticParameter {
                    name,
                    reason: "must be a probability in [0, 1]",
                });
            }
        }
        Ok(())
    }
}

/// Outcome of a genetic run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeneticResult {
    /// Best valid tour seen in any generation.
    pub best: SolveOutcome,
    /// Best cost so far at the start of each generation, `+∞` until a
    /// valid tour appears. Never increases.
    pub trace: Vec<f64>,
    /// Valid individuals in the initial population.
    pub initial_valid: usize,
}

/// Genetic algorithm over stop permutations.
///
/// Each generation the population is ranked by fitness, the global best is
/// updated from the leader, the elites are copied forward, and the rest is
/// refilled with tournament-selected parents recombined by order crossover,
/// then mutated and occasionally polished by a 2-opt pass.
///
/// # Examples
///
/// ```
/// use fuel_routing::distance::{CongestionMatrix, DistanceMatrix};
/// use fuel_routing::ga::{GeneticConfig, GeneticSolver};
/// use fuel_routing::models::{Site, Vehicle};
/// use fuel_routing::network::{DeliveryNetwork, NetworkConfig};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let sites = vec![
///     Site::depot(),
///     Site::new(1, 10.0, 0.0),
///     Site::new(2, 10.0, 10.0),
///     Site::new(3, 0.0, 10.0),
/// ];
/// let network = DeliveryNetwork::imported(
///     DistanceMatrix::from_sites(&sites),
///     CongestionMatrix::uniform(4),
///     Vehicle::new(3000.0, 1500.0, 100.0).unwrap(),
///     500.0,
///     &NetworkConfig::default(),
/// )
/// .unwrap();
///
/// let config = GeneticConfig::default()
///     .with_population_size(20)
///     .with_generations(30);
/// let mut rng = StdRng::seed_from_u64(42);
/// let result = GeneticSolver::run(&network, &config, &mut rng).unwrap();
///
/// assert!(result.best.is_feasible());
/// assert_eq!(result.trace.len(), 30);
/// ```
pub struct GeneticSolver;

impl GeneticSolver {
    /// Runs the genetic algorithm.
    ///
    /// `best` is the cheapest valid tour among every individual evaluated,
    /// the final generation's offspring included. The trace records the
    /// best at the start of each generation, so `best` may be cheaper than
    /// its last entry but never dearer.
    ///
    /// # Errors
    ///
    /// Returns the error from [`GeneticConfig::validate`].
    #[instrument(skip_all, fields(stops = network.num_stops()))]
    pub fn run<N: FuelNetwork + ?Sized, R: Rng>(
        network: &N,
        config: &GeneticConfig,
        rng: &mut R,
    ) -> Result<GeneticResult, ConfigError> {
        config.validate()?;
        let evaluator = TourEvaluator::new(network);
        let greedy = nearest_feasible_neighbor(network);

        let mut population: Vec<Chromosome> =
            seed_population(&evaluator, &greedy, config.population_size, rng)
                .into_iter()
                .map(|stops| Chromosome::evaluate(stops, &evaluator))
                .collect();
        let initial_valid = population.iter().filter(|c| c.is_valid()).count();
        info!(
            initial_valid,
            population = population.len(),
            greedy_feasible = greedy.is_feasible(),
            "initial population"
        );

        let elite_count = config.elite_count();
        let mut best: Option<Chromosome> = None;
        let mut trace = Vec::with_capacity(config.generations);

        for generation in 0..config.generations {
            population.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));

            if let Some(leader) = population.first().filter(|c| c.is_valid()) {
                if best.as_ref().map_or(true, |b| leader.cost() < b.cost()) {
                    debug!(generation, cost = leader.cost(), "new best tour");
                    best = Some(leader.clone());
                }
            }
            trace.push(best.as_ref().map_or(f64::INFINITY, Chromosome::cost));

            let mut next: Vec<Chromosome> = population[..elite_count].to_vec();
            while next.len() < config.population_size {
                let (Some(p1), Some(p2)) = (
                    tournament_select(&population, config.tournament_size, rng),
                    tournament_select(&population, config.tournament_size, rng),
                ) else {
                    break;
                };
                let mut child = order_crossover(p1.stops(), p2.stops(), rng);
                mutate(&mut child, config.mutation_rate, rng);
                if rng.random::<f64>() < config.local_search_rate {
                    child = two_opt_pass(&child, &evaluator).0;
                }
                next.push(Chromosome::evaluate(child, &evaluator));
            }
            population = next;
        }

        // The final offspring (or, with zero generations, the seeded
        // population) were never ranked inside the loop.
        let final_leader = population
            .iter()
            .filter(|c| c.is_valid())
            .min_by(|a, b| a.cost().total_cmp(&b.cost()));
        if let Some(leader) = final_leader {
            if best.as_ref().map_or(true, |b| leader.cost() < b.cost()) {
                debug!(cost = leader.cost(), "new best tour in final population");
                best = Some(leader.clone());
            }
        }

        let best = match best {
            Some(c) => SolveOutcome::feasible(c.tour(), c.cost()),
            None => {
                warn!(generations = config.generations, "no valid tour in any generation");
                SolveOutcome::infeasible()
            }
        };
        info!(
            feasible = best.is_feasible(),
            cost = best.cost_or_infinity(),
            generations = config.generations,
            "genetic search finished"
        );
        Ok(GeneticResult {
            best,
            trace,
            initial_valid,
        })
    }
}

impl GeneticResult {
    /// The best tour, if any valid one was found.
    pub fn best_tour(&self) -> Option<&Tour> {
        self.best.tour()
    }
}
