use std::fmt;

/// Error for a seed line that is not a non-negative integer.
///
/// Parsing is all-or-nothing: the first malformed line aborts the run, no
/// partial seed list is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeedError {
    /// 1-based line number of the offending line.
    pub line: usize,
    /// The offending text, trimmed.
    pub text: String,
}

impl fmt::Display for ParseSeedError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}: invalid seed {:?}", self.line, self.text)
    }
}

impl std::error::Error for ParseSeedError {}

/// Parse the seed file: one non-negative integer per line.
///
/// Leading/trailing whitespace on a line is tolerated; fully blank lines
/// are skipped.
pub fn parse_seeds(input: &str) -> Result<Vec<u64>, ParseSeedError> {
    let mut seeds = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let seed = text.parse::<u64>().map_err(|_| ParseSeedError {
            line: index + 1,
            text: text.to_string(),
        })?;
        seeds.push(seed);
    }
    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        assert_eq!(parse_seeds("1\n10\n100\n2024\n").unwrap(), [1, 10, 100, 2024]);
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_blank_lines() {
        assert_eq!(parse_seeds("  7 \n\n42\t\n\n").unwrap(), [7, 42]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_seeds("").unwrap(), Vec::<u64>::new());
    }

    #[test]
    fn test_parse_rejects_malformed_line() {
        let err = parse_seeds("1\n2a\n3\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.text, "2a");
    }

    #[test]
    fn test_parse_rejects_negative() {
        let err = parse_seeds("5\n-3\n").unwrap_err();
        assert_eq!(err.line, 2);
    }
}
