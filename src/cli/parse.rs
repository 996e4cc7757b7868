//! Value parsers for clap arguments

use std::str::FromStr;

use dijtrace_core::format::OutputFormat;

/// Parse the --format flag value
pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format_valid() {
        assert_eq!(parse_format("records").unwrap(), OutputFormat::Records);
    }

    #[test]
    fn test_parse_format_unknown() {
        let err = parse_format("yaml").unwrap_err();
        assert!(err.contains("unknown format"));
    }
}
