//! The deterministic secret-number generator.
//!
//! A secret is a 24-bit integer evolved by a fixed mix/prune round: three
//! XOR-mix steps (multiply by 64, floor-divide by 32, multiply by 2048),
//! each followed by a reduction mod 2^24. The round is a pure function of
//! its input, so sequences from equal seeds are identical.

/// Modulus applied after every mix step, keeping the secret in 24 bits.
pub const PRUNE_MODULUS: u64 = 1 << 24;

/// The evolving secret number for one seed.
///
/// Intermediate products stay below 2^36 (24 bits shifted left by at most
/// 11), so u64 arithmetic never overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Secret(u64);

impl Secret {
    /// Create a secret from an initial seed value.
    pub fn new(seed: u64) -> Self {
        Secret(seed)
    }

    /// The current secret value.
    #[inline]
    pub fn value(self) -> u64 {
        self.0
    }

    /// The price at this step: the last decimal digit of the secret.
    #[inline]
    pub fn price(self) -> i8 {
        (self.0 % 10) as i8
    }

    #[inline]
    fn mix(self, value: u64) -> Secret {
        Secret(self.0 ^ value)
    }

    #[inline]
    fn prune(self) -> Secret {
        Secret(self.0 % PRUNE_MODULUS)
    }

    /// Apply one full transformation round.
    #[inline]
    pub fn next_secret(self) -> Secret {
        let secret = self.mix(self.0 * 64).prune();
        let secret = secret.mix(secret.0 / 32).prune();
        secret.mix(secret.0 * 2048).prune()
    }

    /// Apply `rounds` transformation rounds.
    pub fn advance(self, rounds: usize) -> Secret {
        (0..rounds).fold(self, |secret, _| secret.next_secret())
    }

    /// Iterator over the secrets produced by successive rounds.
    ///
    /// The first item is the secret after one round; the initial value
    /// itself is not yielded. The iterator is infinite.
    pub fn sequence(self) -> SecretSequence {
        SecretSequence { secret: self }
    }
}

/// Infinite iterator over successive post-round secrets.
#[derive(Debug, Clone, Copy)]
pub struct SecretSequence {
    secret: Secret,
}

impl Iterator for SecretSequence {
    type Item = Secret;

    fn next(&mut self) -> Option<Secret> {
        self.secret = self.secret.next_secret();
        Some(self.secret)
    }
}
