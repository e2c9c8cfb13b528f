//! Parallel evaluation over independent seeds.
//!
//! Each seed is a complete work unit: its 2000-round scan runs locally with
//! no shared state, and the per-seed outcome (final secret + first-occurrence
//! signal prices) is merged into the aggregate afterwards. The merge is an
//! additive combine, associative and commutative, so the result is identical
//! to the serial driver regardless of thread count or merge order.

use market_eval::{scan_seed, MarketReport, ProfitTable};
use rayon::prelude::*;

/// Evaluate all seeds on the rayon thread pool.
pub fn evaluate_parallel(seeds: &[u64], rounds: usize) -> MarketReport {
    let (final_secret_sum, table) = seeds
        .par_iter()
        .map(|&seed| scan_seed(seed, rounds))
        .fold(
            || (0u64, ProfitTable::new()),
            |(sum, mut table), outcome| {
                table.absorb(&outcome);
                (sum + outcome.final_secret, table)
            },
        )
        .reduce(
            || (0u64, ProfitTable::new()),
            |(left_sum, mut left), (right_sum, right)| {
                left.merge(right);
                (left_sum + right_sum, left)
            },
        );

    MarketReport {
        final_secret_sum,
        best_profit: table.best(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_eval::{evaluate, ROUNDS};

    #[test]
    fn test_parallel_matches_serial_examples() {
        for seeds in [&[1u64, 10, 100, 2024][..], &[1, 2, 3, 2024][..]] {
            assert_eq!(evaluate_parallel(seeds, ROUNDS), evaluate(seeds, ROUNDS));
        }
    }

    #[test]
    fn test_parallel_example_answers() {
        let report = evaluate_parallel(&[1, 10, 100, 2024], ROUNDS);
        assert_eq!(report.final_secret_sum, 37327623);

        let report = evaluate_parallel(&[1, 2, 3, 2024], ROUNDS);
        assert_eq!(report.best_profit, 23);
    }

    #[test]
    fn test_parallel_matches_serial_many_seeds() {
        // Enough seeds to exercise multiple rayon splits; fewer rounds to
        // keep the test quick.
        let seeds: Vec<u64> = (0..500).collect();
        assert_eq!(evaluate_parallel(&seeds, 250), evaluate(&seeds, 250));
    }

    #[test]
    fn test_parallel_empty_input() {
        let report = evaluate_parallel(&[], ROUNDS);
        assert_eq!(report.final_secret_sum, 0);
        assert_eq!(report.best_profit, 0);
    }
}
