//! The side-loaded allow-list of sheet names.

use crate::error::{ExtractError, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Allow-list of sheet names loaded from `originData/<env>/json_list.json`
///
/// The file is a flat JSON array of names. An absent file is not an error:
/// it loads as an empty list whose membership test is always false. The
/// list only gates extraction when a caller wires it in (the CLI's
/// `--apply-filter` flag).
#[derive(Debug, Default)]
pub struct FilterList {
    names: HashSet<String>,
}

impl FilterList {
    /// Load the list, treating a missing file as empty.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or is not a
    /// JSON array of strings.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(FilterList::default());
        }

        let reader = BufReader::new(File::open(path)?);
        let names: Vec<String> = serde_json::from_reader(reader)
            .map_err(|e| ExtractError::Parse(format!("Invalid filter list: {e}")))?;
        Ok(FilterList {
            names: names.into_iter().collect(),
        })
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// True when no names are listed (including the absent-file case).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of listed names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_loads_name_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("json_list.json");
        std::fs::write(&path, r#"["items", "skills"]"#).unwrap();

        let filter = FilterList::load(&path).unwrap();
        assert_eq!(filter.len(), 2);
        assert!(filter.contains("items"));
        assert!(filter.contains("skills"));
        assert!(!filter.contains("enemies"));
    }

    #[test]
    fn test_absent_file_filters_nothing() {
        let dir = tempdir().unwrap();
        let filter = FilterList::load(dir.path().join("missing.json")).unwrap();
        assert!(filter.is_empty());
        assert!(!filter.contains("items"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("json_list.json");
        std::fs::write(&path, r#"{"items": true}"#).unwrap();

        assert!(matches!(
            FilterList::load(&path),
            Err(ExtractError::Parse(_))
        ));
    }
}
