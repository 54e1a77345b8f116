//! Loads a dataset from a TOML file.
//!
//! ```toml
//! months = ["2024-10", "2024-11"]
//!
//! [[person]]
//! name = "Rhay Mark"
//! counts = [3, 2]
//!
//! [special]
//! name = "Michaelo Paler"
//! values = [2, 3, 1]
//! labels = ["2025-03", "2025-04", "2025-05"]
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::builtin::{PRIMARY_METRIC, SPECIAL_METRIC};
use super::{parse_months, Dataset, DatasetError, Person, SpecialSeries};
use crate::config::loader::toml_error_position;

/// On-disk shape of a dataset file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DatasetFile {
    #[serde(default = "default_primary_metric")]
    metric: String,
    months: Vec<String>,
    #[serde(default, rename = "person")]
    people: Vec<PersonEntry>,
    special: SpecialEntry,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PersonEntry {
    name: String,
    counts: Vec<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpecialEntry {
    name: String,
    #[serde(default = "default_special_metric")]
    metric: String,
    values: Vec<u32>,
    labels: Vec<String>,
}

fn default_primary_metric() -> String {
    PRIMARY_METRIC.to_string()
}

fn default_special_metric() -> String {
    SPECIAL_METRIC.to_string()
}

/// Stateless dataset loader.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load and validate a dataset from `path`.
    pub fn load_from_path(path: &Path) -> Result<Dataset, DatasetError> {
        let content = fs::read_to_string(path).map_err(|e| DatasetError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let dataset = Self::parse_toml(&content, path)?;
        tracing::debug!(
            "loaded dataset from {}: {} people, {} months",
            path.display(),
            dataset.roster().len(),
            dataset.months().len()
        );
        Ok(dataset)
    }

    /// Load the dataset at `path`, or the built-in one when `path` is `None`.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Dataset, DatasetError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => super::builtin::dataset(),
        }
    }

    fn parse_toml(content: &str, path: &Path) -> Result<Dataset, DatasetError> {
        let file: DatasetFile = toml::from_str(content).map_err(|e| {
            let (line, column) = toml_error_position(content, &e);
            DatasetError::ParseError {
                path: path.to_path_buf(),
                line,
                column,
                message: e.message().to_string(),
            }
        })?;

        let months = parse_months(&file.metric, &file.months)?;
        let people = file
            .people
            .into_iter()
            .map(|p| Person::new(p.name, p.counts))
            .collect();
        let labels = parse_months(&file.special.name, &file.special.labels)?;
        let special = SpecialSeries {
            name: file.special.name,
            metric: file.special.metric,
            counts: file.special.values,
            labels,
        };
        Dataset::new(file.metric, months, people, special)
    }
}
