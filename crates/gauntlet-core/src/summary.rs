//! Rating summary extraction from engine output.

use crate::error::{GauntletError, Result};

/// Delimiter separating the rating estimate from its uncertainty.
pub const RATING_DELIMITER: &str = " +/- ";

/// Final rating pair reported by the tournament tool.
///
/// Both fields are kept as text tokens: the tool may report `inf` or `-inf`
/// and no numeric validation is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingSummary {
    /// The full summary line, verbatim.
    pub line: String,

    /// Rating estimate token.
    pub elo: String,

    /// Rating uncertainty token.
    pub error: String,
}

/// Extract the final rating summary from free-form engine output.
///
/// Scans lines from the end of the output and takes the last one containing
/// the ` +/- ` delimiter, splitting it into the estimate and uncertainty
/// tokens. Searching by delimiter replaces the fixed line offset the tool's
/// output format would otherwise impose on callers.
pub fn extract_summary(stdout: &str) -> Result<RatingSummary> {
    for line in stdout.lines().rev() {
        if let Some((elo, error)) = line.split_once(RATING_DELIMITER) {
            return Ok(RatingSummary {
                line: line.to_string(),
                elo: elo.to_string(),
                error: error.to_string(),
            });
        }
    }

    Err(GauntletError::SummaryNotFound {
        delimiter: RATING_DELIMITER,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_rating_pair() {
        let stdout = "tournament finished\n512.34 +/- 88.10\nsaved pgn\n";
        let summary = extract_summary(stdout).expect("summary expected");

        assert_eq!(summary.line, "512.34 +/- 88.10");
        assert_eq!(summary.elo, "512.34");
        assert_eq!(summary.error, "88.10");
    }

    #[test]
    fn test_last_matching_line_wins() {
        let stdout = "100.00 +/- 50.00\nmore games played\n490.71 +/- 102.58\ntrailing stats\n";
        let summary = extract_summary(stdout).expect("summary expected");

        assert_eq!(summary.elo, "490.71");
        assert_eq!(summary.error, "102.58");
    }

    #[test]
    fn test_infinite_tokens_pass_through() {
        let summary = extract_summary("inf +/- -inf\n").expect("summary expected");
        assert_eq!(summary.elo, "inf");
        assert_eq!(summary.error, "-inf");
    }

    #[test]
    fn test_negative_rating() {
        let summary = extract_summary("-42.50 +/- 13.37").expect("summary expected");
        assert_eq!(summary.elo, "-42.50");
        assert_eq!(summary.error, "13.37");
    }

    #[test]
    fn test_missing_delimiter_is_error() {
        let err = extract_summary("no rating here\njust noise\n").unwrap_err();
        assert!(matches!(err, GauntletError::SummaryNotFound { .. }));
    }

    #[test]
    fn test_empty_output_is_error() {
        assert!(extract_summary("").is_err());
    }
}
