//! Sample document loading.
//!
//! Parsing is a collaborator concern: the inferer only ever sees valid
//! JSON. Syntax errors are reported with the JSON path reached before the
//! failure (via `serde_path_to_error`).

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde_json::Value;

/// Read and parse one JSON sample file.
pub fn load_document(path: &Path) -> Result<Value> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read sample file {}", path.display()))?;
    parse_document(&source)
        .with_context(|| format!("failed to parse JSON sample {}", path.display()))
}

/// Parse a JSON document with path context in error messages.
pub fn parse_document(source: &str) -> Result<Value> {
    let mut de = serde_json::Deserializer::from_str(source);
    let value = serde_path_to_error::deserialize::<_, Value>(&mut de).map_err(|err| {
        let path = err.path().to_string();
        anyhow!("at JSON path {path}: {}", err.into_inner())
    })?;
    de.end().context("trailing characters after JSON document")?;
    Ok(value)
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_order_is_preserved() {
        let value = parse_document(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn syntax_errors_carry_the_json_path() {
        let err = parse_document(r#"{"a": {"b": [1, ]}}"#).unwrap_err();
        assert!(format!("{err:#}").contains("a.b"));
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        assert!(parse_document(r#"{"a": 1} {"b": 2}"#).is_err());
    }
}
