//! Hybrid Grey Wolf Optimizer / Genetic Algorithm in pure Rust using ndarray
//!
//! Population search for bounded placement problems: each generation the
//! population is split in half by fitness. The fitter half is moved by the
//! GWO position-update rule toward the three current leaders (alpha, beta,
//! delta); the weaker half is regenerated by GA arithmetic crossover of
//! alpha and beta with per-dimension uniform-reset mutation. Leaders are
//! re-selected from the fully re-evaluated population after every
//! generation.
//!
//! Supported features:
//! - Box constraint `[0, area_size]` on every coordinate (per-axis clamping)
//! - Linear decay of the exploration coefficient from 2.0 to 0.0
//! - Per-generation convergence history (leading fitness going into each
//!   generation)
//! - Optional parallel fitness evaluation with a sequential generation
//!   boundary
//! - Reproducible runs from a fixed seed

use std::fmt;

use ndarray::{Array1, Array2};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub mod clip_inplace;
pub mod generation;
pub mod init_random;
pub mod parallel_eval;
pub mod rank;
pub mod update_ga;
pub mod update_gwo;

pub use parallel_eval::ParallelConfig;
pub use rank::{Leaders, rank_ascending};

/// Configuration rejected before the optimization loop starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("wolf_count must be at least 3 to select alpha/beta/delta, got {0}")]
	WolfCountTooSmall(usize),
	#[error("cluster_count must be at least 1, got {0}")]
	NoClusters(usize),
	#[error("max_iterations must be at least 1, got {0}")]
	NoIterations(usize),
	#[error("area_size must be finite and strictly positive, got {0}")]
	BadAreaSize(f64),
	#[error("mutation_rate must lie in [0, 1], got {0}")]
	BadMutationRate(f64),
}

/// Configuration for the hybrid GWO-GA optimizer
#[derive(Debug, Clone)]
pub struct GwoGaConfig {
	/// Cluster heads encoded per candidate; the problem dimension is twice this
	pub cluster_count: usize,
	/// Population size, at least 3
	pub wolf_count: usize,
	/// Number of generations to run
	pub max_iterations: usize,
	/// Side length of the square deployment area; coordinates are clamped to `[0, area_size]`
	pub area_size: f64,
	/// Probability that a crossover gene is reset to a fresh uniform draw
	pub mutation_rate: f64,
	/// Seed for the random source; a fixed seed makes runs reproducible
	pub seed: Option<u64>,
	/// Print progress on stderr every 10 generations
	pub disp: bool,
	/// Parallel fitness evaluation
	pub parallel: ParallelConfig,
}

impl Default for GwoGaConfig {
	fn default() -> Self {
		Self {
			cluster_count: 5,
			wolf_count: 20,
			max_iterations: 50,
			area_size: 100.0,
			mutation_rate: 0.1,
			seed: None,
			disp: false,
			parallel: ParallelConfig::default(),
		}
	}
}

impl GwoGaConfig {
	/// Problem dimension: two coordinates per cluster head.
	pub fn dimension(&self) -> usize {
		2 * self.cluster_count
	}

	/// Reject malformed configurations before the loop starts; the ranking
	/// and dimensioning logic are undefined otherwise.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.wolf_count < 3 {
			return Err(ConfigError::WolfCountTooSmall(self.wolf_count));
		}
		if self.cluster_count == 0 {
			return Err(ConfigError::NoClusters(self.cluster_count));
		}
		if self.max_iterations == 0 {
			return Err(ConfigError::NoIterations(self.max_iterations));
		}
		if !self.area_size.is_finite() || self.area_size <= 0.0 {
			return Err(ConfigError::BadAreaSize(self.area_size));
		}
		if !(0.0..=1.0).contains(&self.mutation_rate) {
			return Err(ConfigError::BadMutationRate(self.mutation_rate));
		}
		Ok(())
	}
}

/// Fluent builder for `GwoGaConfig` for ergonomic configuration.
pub struct GwoGaConfigBuilder {
	cfg: GwoGaConfig,
}
impl GwoGaConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: GwoGaConfig::default() }
	}
	pub fn cluster_count(mut self, v: usize) -> Self {
		self.cfg.cluster_count = v;
		self
	}
	pub fn wolf_count(mut self, v: usize) -> Self {
		self.cfg.wolf_count = v;
		self
	}
	pub fn max_iterations(mut self, v: usize) -> Self {
		self.cfg.max_iterations = v;
		self
	}
	pub fn area_size(mut self, v: f64) -> Self {
		self.cfg.area_size = v;
		self
	}
	pub fn mutation_rate(mut self, v: f64) -> Self {
		self.cfg.mutation_rate = v;
		self
	}
	pub fn seed(mut self, v: u64) -> Self {
		self.cfg.seed = Some(v);
		self
	}
	pub fn disp(mut self, v: bool) -> Self {
		self.cfg.disp = v;
		self
	}
	pub fn parallel(mut self, parallel: ParallelConfig) -> Self {
		self.cfg.parallel = parallel;
		self
	}
	pub fn enable_parallel(mut self, enable: bool) -> Self {
		self.cfg.parallel.enabled = enable;
		self
	}
	pub fn build(self) -> GwoGaConfig {
		self.cfg
	}
}

/// Result/Report of a hybrid GWO-GA run
#[derive(Clone)]
pub struct GwoGaReport {
	/// Best candidate found (final alpha position)
	pub x: Array1<f64>,
	/// Fitness of the best candidate
	pub fun: f64,
	/// Number of generations executed
	pub nit: usize,
	/// Number of objective evaluations
	pub nfev: usize,
	/// Leading fitness going into each generation, one entry per generation
	pub convergence: Vec<f64>,
	/// Final population, one candidate per row
	pub population: Array2<f64>,
	/// Fitness of each final candidate
	pub population_fitness: Array1<f64>,
}

impl fmt::Debug for GwoGaReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("GwoGaReport")
			.field("x", &format!("len={}", self.x.len()))
			.field("fun", &self.fun)
			.field("nit", &self.nit)
			.field("nfev", &self.nfev)
			.field("convergence", &format!("len={}", self.convergence.len()))
			.field(
				"population",
				&format!("{}x{}", self.population.nrows(), self.population.ncols()),
			)
			.finish()
	}
}

/// Hybrid GWO-GA optimizer minimizing an objective `func`
pub struct HybridGwoGa<'a, F>
where
	F: Fn(&Array1<f64>) -> f64 + Sync,
{
	func: &'a F,
	config: GwoGaConfig,
}

impl<'a, F> HybridGwoGa<'a, F>
where
	F: Fn(&Array1<f64>) -> f64 + Sync,
{
	/// Create a new optimizer over `func` with the given configuration.
	pub fn new(func: &'a F, config: GwoGaConfig) -> Self {
		Self { func, config }
	}

	/// Mutable access to configuration
	pub fn config_mut(&mut self) -> &mut GwoGaConfig {
		&mut self.config
	}

	/// Run the optimization to completion and return a report.
	///
	/// Deterministic for a fixed seed; there is no early stopping and no
	/// failure path once the configuration has been accepted.
	pub fn solve(&mut self) -> Result<GwoGaReport, ConfigError> {
		self.config.validate()?;

		let n = self.config.dimension();
		let npop = self.config.wolf_count;

		let mut rng: StdRng = match self.config.seed {
			Some(s) => StdRng::seed_from_u64(s),
			None => {
				let mut thread_rng = rand::rng();
				StdRng::from_rng(&mut thread_rng)
			}
		};

		if self.config.disp {
			eprintln!(
				"GWO-GA init: {} dimensions ({} cluster heads), population={}, generations={}",
				n, self.config.cluster_count, npop, self.config.max_iterations
			);
		}

		// Init: uniform random positions over the deployment area
		let mut pop = init_random::init_random(npop, n, self.config.area_size, &mut rng);
		let mut fitness =
			parallel_eval::evaluate_population(&pop, self.func, &self.config.parallel);
		let mut nfev = npop;

		let mut order = rank::rank_ascending(&fitness);
		let mut leaders = rank::Leaders::select(&pop, &fitness, &order);

		let mut history = Vec::with_capacity(self.config.max_iterations);

		for t in 0..self.config.max_iterations {
			// Leading fitness going into generation t
			history.push(leaders.alpha_fitness);

			if self.config.disp && (t + 1) % 10 == 0 {
				eprintln!("GWO-GA gen {:4}  best_f={:.6e}", t + 1, leaders.alpha_fitness);
			}

			// Exploration coefficient, linear decay from 2.0 to 0.0
			let a = 2.0 - (t as f64) * (2.0 / self.config.max_iterations as f64);

			generation::advance_generation(
				&mut pop,
				&order,
				&leaders,
				a,
				self.config.area_size,
				self.config.mutation_rate,
				&mut rng,
			);

			fitness = parallel_eval::evaluate_population(&pop, self.func, &self.config.parallel);
			nfev += npop;

			order = rank::rank_ascending(&fitness);
			leaders = rank::Leaders::select(&pop, &fitness, &order);
		}

		if self.config.disp {
			eprintln!(
				"GWO-GA finished: best_f={:.6e} after {} generations",
				leaders.alpha_fitness, self.config.max_iterations
			);
		}

		Ok(GwoGaReport {
			x: leaders.alpha.clone(),
			fun: leaders.alpha_fitness,
			nit: self.config.max_iterations,
			nfev,
			convergence: history,
			population: pop,
			population_fitness: fitness,
		})
	}
}

/// Convenience function mirroring the struct API for one-shot callers:
/// - `func`: objective mapping a position vector to a fitness, minimized
/// - `config`: optimizer configuration
pub fn hybrid_gwo_ga<F>(func: &F, config: GwoGaConfig) -> Result<GwoGaReport, ConfigError>
where
	F: Fn(&Array1<f64>) -> f64 + Sync,
{
	HybridGwoGa::new(func, config).solve()
}

#[cfg(test)]
mod config_tests {
	use super::*;

	#[test]
	fn test_default_config_is_valid() {
		assert!(GwoGaConfig::default().validate().is_ok());
	}

	#[test]
	fn test_builder_sets_fields() {
		let cfg = GwoGaConfigBuilder::new()
			.cluster_count(3)
			.wolf_count(12)
			.max_iterations(80)
			.area_size(50.0)
			.mutation_rate(0.2)
			.seed(7)
			.build();
		assert_eq!(cfg.dimension(), 6);
		assert_eq!(cfg.wolf_count, 12);
		assert_eq!(cfg.max_iterations, 80);
		assert_eq!(cfg.area_size, 50.0);
		assert_eq!(cfg.mutation_rate, 0.2);
		assert_eq!(cfg.seed, Some(7));
	}
}
