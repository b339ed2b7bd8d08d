//! Replication runner.
//!
//! Sequential runs draw every variate from the caller's generator in order.
//! Parallel runs draw one base seed from the caller's generator, then split
//! the replications into fixed-size chunks; chunk `c` draws from
//! `base.substream(c)` and the per-chunk statistics are merged in chunk
//! order, so the result for a given seed does not depend on the number of
//! rayon threads.

use pricer_core::math::SampleStatistics;
use rayon::prelude::*;
use tracing::trace;

use super::config::MonteCarloConfig;
use super::workspace::PathWorkspace;
use crate::rng::PricerRng;

/// Replications per parallel chunk.
pub const CHUNK_SIZE: usize = 4_096;

/// Runs `config.replications()` calls of `replicate` and collects their values.
///
/// `path_len` sizes the [`PathWorkspace`] handed to every call.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{run_replications, MonteCarloConfig};
/// use pricer_pricing::rng::PricerRng;
///
/// let config = MonteCarloConfig::builder()
///     .replications(10_000)
///     .steps(1)
///     .parallel(true)
///     .build()
///     .unwrap();
///
/// let mut rng = PricerRng::from_seed(42);
/// let stats = run_replications(&config, 0, &mut rng, |rng, _| rng.gen_normal());
/// assert_eq!(stats.count(), 10_000);
/// assert!(stats.mean().abs() < 0.05);
/// ```
pub fn run_replications<F>(
    config: &MonteCarloConfig,
    path_len: usize,
    rng: &mut PricerRng,
    replicate: F,
) -> SampleStatistics
where
    F: Fn(&mut PricerRng, &mut PathWorkspace) -> f64 + Sync,
{
    let replications = config.replications();

    if !config.parallel() {
        let mut workspace = PathWorkspace::new(path_len);
        let mut stats = SampleStatistics::new();
        for _ in 0..replications {
            stats.push(replicate(rng, &mut workspace));
        }
        return stats;
    }

    let n_chunks = replications.div_ceil(CHUNK_SIZE);
    trace!(replications, n_chunks, chunk_size = CHUNK_SIZE, "parallel fan-out");

    let base = PricerRng::from_seed(rng.next_seed());
    let per_chunk: Vec<SampleStatistics> = (0..n_chunks)
        .into_par_iter()
        .map(|chunk| {
            let len = CHUNK_SIZE.min(replications - chunk * CHUNK_SIZE);
            let mut chunk_rng = base.substream(chunk as u64);
            let mut workspace = PathWorkspace::new(path_len);
            (0..len)
                .map(|_| replicate(&mut chunk_rng, &mut workspace))
                .collect::<SampleStatistics>()
        })
        .collect();

    per_chunk
        .iter()
        .fold(SampleStatistics::new(), |mut acc, chunk| {
            acc.merge(chunk);
            acc
        })
}
