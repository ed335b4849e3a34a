//! Decoding the arrays a page template embeds in element attributes

use aqua_core::{validate, Result};

/// Decode a JSON array of numbers, e.g. `data-profits="[1200.5, -300.0]"`
pub fn parse_samples(json: &str) -> Result<Vec<f64>> {
    let samples: Vec<f64> = serde_json::from_str(json)?;
    validate::ensure_finite(&samples, "parsed samples")?;
    Ok(samples)
}

/// Decode a JSON array of strings, e.g. variable or category names
pub fn parse_labels(json: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqua_core::Error;

    #[test]
    fn test_parse_samples() {
        assert_eq!(parse_samples("[1, 2.5, -3e2]").unwrap(), vec![1.0, 2.5, -300.0]);
        assert!(parse_samples("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_samples("[1, NaN]").unwrap_err(), Error::Parse(_)));
        assert!(matches!(parse_samples(r#"["a"]"#).unwrap_err(), Error::Parse(_)));
        assert!(matches!(parse_labels("[1]").unwrap_err(), Error::Parse(_)));
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(parse_labels(r#"["FCR", "Profit"]"#).unwrap(), vec!["FCR", "Profit"]);
    }
}
