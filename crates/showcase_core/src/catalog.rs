//! Catalog document loading.
//!
//! # Responsibility
//! - Read the project collection once at startup from a JSON document.
//! - Return typed errors the presentation layer can render inline.
//!
//! # Invariants
//! - Loading either yields the full collection or a `CatalogError`;
//!   there is no partial result.
//! - A failed load must short-circuit before any filter UI is built.

use crate::model::project::Project;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Inline message shown in place of the grid when the catalog fails to load.
pub const LOAD_ERROR_MESSAGE: &str =
    "Error: could not load project data. Ensure the catalog document exists and is valid.";

/// Result type for catalog loading.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Load failure for the catalog document.
#[derive(Debug)]
pub enum CatalogError {
    /// The document could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The document was read but is not a valid project array.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse catalog `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Loads the full project collection from a JSON document.
///
/// # Errors
/// - `CatalogError::Io` when the file cannot be read.
/// - `CatalogError::Parse` when the content is not a project array.
///
/// # Side effects
/// - Emits `catalog_load` events with duration and record count.
pub fn load_catalog(path: impl AsRef<Path>) -> CatalogResult<Vec<Project>> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=catalog_load module=catalog status=start path={}",
        path.display()
    );

    let raw = std::fs::read_to_string(path).map_err(|source| {
        let err = CatalogError::Io {
            path: path.to_path_buf(),
            source,
        };
        error!(
            "event=catalog_load module=catalog status=error duration_ms={} error_code=catalog_read_failed error={err}",
            started_at.elapsed().as_millis()
        );
        err
    })?;

    let projects = parse_catalog(&raw).map_err(|source| {
        let err = CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        };
        error!(
            "event=catalog_load module=catalog status=error duration_ms={} error_code=catalog_parse_failed error={err}",
            started_at.elapsed().as_millis()
        );
        err
    })?;

    info!(
        "event=catalog_load module=catalog status=ok duration_ms={} count={}",
        started_at.elapsed().as_millis(),
        projects.len()
    );
    Ok(projects)
}

/// Parses a catalog document from raw JSON text.
pub fn parse_catalog(raw: &str) -> Result<Vec<Project>, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::{load_catalog, parse_catalog, CatalogError};

    #[test]
    fn parse_accepts_minimal_records() {
        let projects = parse_catalog(
            r#"[{"title":"a","description":"d","url":"u"},
                {"title":"b","description":"d","url":"u","status":"hidden"}]"#,
        )
        .expect("minimal catalog should parse");
        assert_eq!(projects.len(), 2);
        assert!(projects[0].is_listed());
        assert!(!projects[1].is_listed());
    }

    #[test]
    fn parse_rejects_non_array_documents() {
        assert!(parse_catalog(r#"{"title":"not an array"}"#).is_err());
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let err = load_catalog("/nonexistent/projects.json")
            .expect_err("missing file should fail");
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("failed to read catalog"));
    }

    #[test]
    fn load_reports_invalid_json_as_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("projects.json");
        std::fs::write(&path, "not json").expect("write should succeed");

        let err = load_catalog(&path).expect_err("invalid json should fail");
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
