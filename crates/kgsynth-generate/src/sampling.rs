//! Weighted, uniform and heavy-tailed sampling primitives.
//!
//! Every function takes the random source explicitly; nothing here holds
//! hidden state. Configuration-shaped failures (bad tables, bad shapes) map to
//! [`GenerationError::InvalidConfig`]; sampling from nothing maps to the
//! empty-pool variants.

use rand::Rng;
use rand::seq::index;
use rand_distr::{Distribution, Poisson, Zeta};

use crate::errors::GenerationError;

/// Slack allowed between the last cumulative value and 1.0.
pub const CUMULATIVE_TOLERANCE: f64 = 1e-6;

/// Validated cumulative-probability table for categorical selection.
#[derive(Debug, Clone)]
pub struct CumulativeTable {
    cumulative: Vec<f64>,
}

impl CumulativeTable {
    /// Normalize `weights` and accumulate them.
    pub fn from_weights(weights: &[f64]) -> Result<Self, GenerationError> {
        if weights.is_empty() {
            return Err(GenerationError::InvalidConfig(
                "distribution has no categories".to_string(),
            ));
        }
        if let Some(weight) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(GenerationError::InvalidConfig(format!(
                "distribution weight {weight} is not a finite non-negative number"
            )));
        }
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Err(GenerationError::InvalidConfig(
                "distribution weights sum to zero".to_string(),
            ));
        }

        let mut running = 0.0;
        let cumulative = weights
            .iter()
            .map(|weight| {
                running += weight / total;
                running
            })
            .collect();
        Self::new(cumulative)
    }

    /// Wrap an already-accumulated table after checking its shape.
    pub fn new(cumulative: Vec<f64>) -> Result<Self, GenerationError> {
        validate_cumulative(&cumulative)?;
        Ok(Self { cumulative })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.cumulative
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Index of the first entry whose cumulative value is `>= draw`.
    pub fn select_index(&self, draw: f64) -> usize {
        select_index(&self.cumulative, draw)
    }

    /// Draw one item; `items` must be index-aligned with the table.
    pub fn sample<'a, T, R: Rng + ?Sized>(
        &self,
        items: &'a [T],
        rng: &mut R,
    ) -> Result<&'a T, GenerationError> {
        categorical(&self.cumulative, items, rng)
    }
}

/// Pick `items[i]` for the smallest `i` with `cumulative[i] >= U[0,1)`.
pub fn categorical<'a, T, R: Rng + ?Sized>(
    cumulative: &[f64],
    items: &'a [T],
    rng: &mut R,
) -> Result<&'a T, GenerationError> {
    if items.is_empty() {
        return Err(GenerationError::EmptyPool {
            pool: "categories",
        });
    }
    if cumulative.len() != items.len() {
        return Err(GenerationError::InvalidConfig(format!(
            "cumulative table has {} entries for {} items",
            cumulative.len(),
            items.len()
        )));
    }
    validate_cumulative(cumulative)?;

    let draw: f64 = rng.random();
    Ok(&items[select_index(cumulative, draw)])
}

fn select_index(cumulative: &[f64], draw: f64) -> usize {
    cumulative
        .iter()
        .position(|value| *value >= draw)
        .unwrap_or(cumulative.len().saturating_sub(1))
}

fn validate_cumulative(cumulative: &[f64]) -> Result<(), GenerationError> {
    let Some(last) = cumulative.last() else {
        return Err(GenerationError::InvalidConfig(
            "cumulative table is empty".to_string(),
        ));
    };
    if cumulative.iter().any(|value| !value.is_finite()) {
        return Err(GenerationError::InvalidConfig(
            "cumulative table contains a non-finite value".to_string(),
        ));
    }
    if cumulative.windows(2).any(|pair| pair[1] < pair[0]) {
        return Err(GenerationError::InvalidConfig(
            "cumulative table is not non-decreasing".to_string(),
        ));
    }
    if (last - 1.0).abs() > CUMULATIVE_TOLERANCE {
        return Err(GenerationError::InvalidConfig(format!(
            "cumulative table ends at {last}, expected 1.0"
        )));
    }
    Ok(())
}

/// Sum of two independent zeta (discrete power-law) draws, clamped to a cap.
///
/// Models productivity: most draws are small, a few are very large.
#[derive(Debug, Clone)]
pub struct HeavyTailedCount {
    first: Zeta<f64>,
    second: Zeta<f64>,
}

impl HeavyTailedCount {
    pub fn new(shape_a: f64, shape_b: f64) -> Result<Self, GenerationError> {
        let build = |shape: f64| {
            Zeta::new(shape).map_err(|err| {
                GenerationError::InvalidConfig(format!("heavy-tail exponent {shape}: {err}"))
            })
        };
        Ok(Self {
            first: build(shape_a)?,
            second: build(shape_b)?,
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, cap: u32, rng: &mut R) -> u32 {
        let total = self.first.sample(rng) + self.second.sample(rng);
        total.min(f64::from(cap)) as u32
    }
}

pub fn bounded_heavy_tailed_count<R: Rng + ?Sized>(
    shape_a: f64,
    shape_b: f64,
    cap: u32,
    rng: &mut R,
) -> Result<u32, GenerationError> {
    Ok(HeavyTailedCount::new(shape_a, shape_b)?.sample(cap, rng))
}

/// Poisson-distributed count; a zero mean always yields zero.
#[derive(Debug, Clone)]
pub struct PoissonCount {
    distribution: Option<Poisson<f64>>,
}

impl PoissonCount {
    pub fn new(mean: f64) -> Result<Self, GenerationError> {
        if mean == 0.0 {
            return Ok(Self { distribution: None });
        }
        let distribution = Poisson::new(mean).map_err(|err| {
            GenerationError::InvalidConfig(format!("poisson mean {mean}: {err}"))
        })?;
        Ok(Self {
            distribution: Some(distribution),
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.distribution
            .as_ref()
            .map_or(0, |distribution| distribution.sample(rng) as usize)
    }
}

/// Uniform integer in `[low, high]`; an empty range collapses to `low`.
pub fn uniform_int<R: Rng + ?Sized>(low: u32, high: u32, rng: &mut R) -> u32 {
    if high <= low {
        low
    } else {
        rng.random_range(low..=high)
    }
}

/// Uniform pick of one element.
pub fn pick<'a, T, R: Rng + ?Sized>(
    pool: &'a [T],
    pool_name: &'static str,
    rng: &mut R,
) -> Result<&'a T, GenerationError> {
    if pool.is_empty() {
        return Err(GenerationError::EmptyPool { pool: pool_name });
    }
    Ok(&pool[rng.random_range(0..pool.len())])
}

/// `count` distinct positions of `pool`, clamped to the pool size.
pub fn subset<T: Clone, R: Rng + ?Sized>(
    pool: &[T],
    count: usize,
    pool_name: &'static str,
    rng: &mut R,
) -> Result<Vec<T>, GenerationError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if pool.is_empty() {
        return Err(GenerationError::EmptyPool { pool: pool_name });
    }

    let amount = count.min(pool.len());
    Ok(index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|idx| pool[idx].clone())
        .collect())
}

/// Like [`subset`], drawn from `pool` minus `exclude`.
///
/// The draw is made over the filtered population, so it always terminates.
/// Asking for a positive count when the exclusion removes every candidate
/// is an error.
pub fn subset_excluding<T: Clone + PartialEq, R: Rng + ?Sized>(
    pool: &[T],
    count: usize,
    exclude: &[T],
    pool_name: &'static str,
    rng: &mut R,
) -> Result<Vec<T>, GenerationError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if pool.is_empty() {
        return Err(GenerationError::EmptyPool { pool: pool_name });
    }

    let population: Vec<T> = pool
        .iter()
        .filter(|candidate| !exclude.contains(candidate))
        .cloned()
        .collect();
    if population.is_empty() {
        return Err(GenerationError::ExclusionCoversPool { pool: pool_name });
    }

    subset(&population, count, pool_name, rng)
}
