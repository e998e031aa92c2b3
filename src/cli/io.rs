//! CLI I/O helpers: document input and result output.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde_json::Value;

use crate::schema::ValidationErrors;

use super::errors::{CliError, CliResult};

/// Reads a JSON document from the given file, or from stdin when no file is
/// given.
pub fn read_document(file: Option<&Path>) -> CliResult<Value> {
    let content = match file {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            CliError::io_error(format!("failed to read '{}': {}", path.display(), e))
        })?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| CliError::io_error(format!("failed to read stdin: {}", e)))?;
            buffer
        }
    };

    serde_json::from_str(&content).map_err(|e| CliError::parse_error(format!("invalid JSON: {}", e)))
}

/// Writes a JSON value to stdout, pretty-printed.
pub fn write_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => eprintln!("failed to render output: {}", e),
    }
}

/// Writes every field failure to stderr, one per line, display-ready.
pub fn write_failures(errors: &ValidationErrors) {
    eprintln!("{}: {} insert rejected", errors.code(), errors.kind());
    for failure in errors.failures() {
        eprintln!("  {}", failure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_read_document_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("donation.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{ "amount": 500 }}"#).unwrap();

        let doc = read_document(Some(&path)).unwrap();
        assert_eq!(doc["amount"], 500);
    }

    #[test]
    fn test_read_document_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = read_document(Some(&tmp.path().join("absent.json"))).unwrap_err();
        assert_eq!(err.code().code(), "UPLIFT_CLI_IO_ERROR");
    }

    #[test]
    fn test_read_document_malformed_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_document(Some(&path)).unwrap_err();
        assert_eq!(err.code().code(), "UPLIFT_CLI_PARSE_ERROR");
    }
}
