//! Aggregation over seed runs: per-seed first-occurrence scans and the
//! global profit table.
//!
//! Each seed's 2000-round price series is scanned for 4-change trading
//! signals; a signal is credited with the price at its *first* occurrence
//! within that seed's run and never again for that seed. Per-seed maps are
//! summed into a global table, and the best achievable profit is the table's
//! maximum entry.
//!
//! Per-seed scans are independent of each other and contributions are
//! commutative sums, so outcomes can be merged in any order (the binary's
//! parallel driver relies on this).

use market_core::{Secret, Signal, SIGNAL_LEN};
use rustc_hash::FxHashMap;

/// Number of transformation rounds applied per seed.
pub const ROUNDS: usize = 2000;

/// Result of scanning a single seed's run.
#[derive(Debug, Clone)]
pub struct SeedOutcome {
    /// The secret value after the final round.
    pub final_secret: u64,
    /// Price at the first occurrence of each signal within this run.
    pub signal_prices: FxHashMap<Signal, i64>,
}

/// Price series for a seed: the seed's own price followed by the price
/// after each of `rounds` rounds.
pub fn seed_prices(seed: u64, rounds: usize) -> Vec<i8> {
    let secret = Secret::new(seed);
    let mut prices = Vec::with_capacity(rounds + 1);
    prices.push(secret.price());
    prices.extend(secret.sequence().take(rounds).map(Secret::price));
    prices
}

/// Scan a price series for the first occurrence of every 4-change signal.
///
/// `prices[0]` is the baseline; each subsequent element produces one change.
/// A signal needs 4 changes, so series shorter than 5 prices yield nothing.
pub fn scan_prices(prices: &[i8]) -> FxHashMap<Signal, i64> {
    let mut signal_prices = FxHashMap::default();
    let mut window = [0i8; SIGNAL_LEN];
    for (i, pair) in prices.windows(2).enumerate() {
        window.rotate_left(1);
        window[SIGNAL_LEN - 1] = pair[1] - pair[0];
        if i + 1 >= SIGNAL_LEN {
            signal_prices
                .entry(Signal::new(window))
                .or_insert(pair[1] as i64);
        }
    }
    signal_prices
}

/// Run one seed: evolve the secret for `rounds` rounds and scan the
/// resulting price series.
pub fn scan_seed(seed: u64, rounds: usize) -> SeedOutcome {
    let mut secret = Secret::new(seed);
    let mut prices = Vec::with_capacity(rounds + 1);
    prices.push(secret.price());
    for _ in 0..rounds {
        secret = secret.next_secret();
        prices.push(secret.price());
    }
    SeedOutcome {
        final_secret: secret.value(),
        signal_prices: scan_prices(&prices),
    }
}

/// Global signal → accumulated profit table, summed across seeds.
#[derive(Debug, Clone, Default)]
pub struct ProfitTable {
    totals: FxHashMap<Signal, i64>,
}

impl ProfitTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one seed's first-occurrence prices into the table.
    pub fn absorb(&mut self, outcome: &SeedOutcome) {
        for (&signal, &price) in &outcome.signal_prices {
            *self.totals.entry(signal).or_insert(0) += price;
        }
    }

    /// Merge another table into this one (additive, order-independent).
    pub fn merge(&mut self, other: ProfitTable) {
        for (signal, total) in other.totals {
            *self.totals.entry(signal).or_insert(0) += total;
        }
    }

    /// Accumulated profit for one signal (0 if never seen).
    pub fn profit(&self, signal: Signal) -> i64 {
        self.totals.get(&signal).copied().unwrap_or(0)
    }

    /// The best achievable total profit, 0 for an empty table.
    pub fn best(&self) -> i64 {
        self.totals.values().copied().max().unwrap_or(0)
    }

    /// The most profitable signal and its total, if any signal was seen.
    pub fn best_signal(&self) -> Option<(Signal, i64)> {
        self.totals
            .iter()
            .max_by_key(|&(_, &total)| total)
            .map(|(&signal, &total)| (signal, total))
    }
}

/// The two aggregate results of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketReport {
    /// Sum over all seeds of the secret after the final round.
    pub final_secret_sum: u64,
    /// Maximum total profit over all signals.
    pub best_profit: i64,
}

/// Serial driver: scan every seed and aggregate.
pub fn evaluate(seeds: &[u64], rounds: usize) -> MarketReport {
    let mut table = ProfitTable::new();
    let mut final_secret_sum = 0u64;
    for &seed in seeds {
        let outcome = scan_seed(seed, rounds);
        final_secret_sum += outcome.final_secret;
        table.absorb(&outcome);
    }
    MarketReport {
        final_secret_sum,
        best_profit: table.best(),
    }
}
