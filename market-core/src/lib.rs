mod input;
mod secret;
mod signal;

pub use input::{parse_seeds, ParseSeedError};
pub use secret::{Secret, SecretSequence, PRUNE_MODULUS};
pub use signal::{Signal, SIGNAL_LEN};
