use std::fmt;

/// Number of consecutive price changes in a trading signal.
pub const SIGNAL_LEN: usize = 4;

/// A trading signal: four consecutive price changes.
///
/// Each change is in [-9, 9]. The whole signal is a small `Copy` value used
/// directly as a hash-map key in the profit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signal([i8; SIGNAL_LEN]);

impl Signal {
    /// Create a signal from four consecutive price changes.
    pub fn new(changes: [i8; SIGNAL_LEN]) -> Self {
        Signal(changes)
    }

    /// The four changes, oldest first.
    pub fn changes(&self) -> [i8; SIGNAL_LEN] {
        self.0
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{},{},{})", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}
