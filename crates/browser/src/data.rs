//! Dataset loading (file or embedded sample).

use std::path::{Path, PathBuf};

use thiserror::Error;

use prodcat_catalog::Dataset;

/// Sample dataset compiled into the binary.
pub const SAMPLE_JSON: &str = include_str!("../data/sample.json");

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn sample() -> Result<Dataset, DatasetError> {
    Ok(Dataset::from_json_str(SAMPLE_JSON)?)
}

pub fn load(path: &Path) -> Result<Dataset, DatasetError> {
    let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Dataset::from_json_str(&json)?)
}

/// Loads `path` when given, otherwise the embedded sample.
pub fn load_configured(path: Option<&Path>) -> Result<Dataset, DatasetError> {
    let dataset = match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading dataset");
            load(path)?
        }
        None => {
            tracing::info!("PRODCAT_DATA not set; using embedded sample dataset");
            sample()?
        }
    };

    tracing::info!(
        users = dataset.users.len(),
        categories = dataset.categories.len(),
        products = dataset.products.len(),
        "dataset loaded"
    );
    Ok(dataset)
}
