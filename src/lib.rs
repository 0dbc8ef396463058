pub mod catalog;
pub mod report;

pub use catalog::{
    CatalogSummary, CategoryView, DEFAULT_CATALOG_PATH, PackageView, PlatformView,
    REQUIRED_SECTIONS, Violation, load_catalog_from_path, validate_catalog,
};
pub use report::Outcome;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default catalog location resolved against `base` (usually the working directory).
pub fn default_catalog_path(base: &Path) -> PathBuf {
    base.join(DEFAULT_CATALOG_PATH)
}

/// Load the catalog at `path` and run every structural check over it.
///
/// A missing file is `Outcome::Absent`. Unreadable or malformed files are
/// errors; structural problems are never errors, they land in
/// `Outcome::Invalid`.
pub fn check_catalog(path: &Path) -> Result<Outcome> {
    let file_name = catalog_file_name(path);
    debug!(path = %path.display(), "loading catalog");

    let Some(document) = load_catalog_from_path(path)? else {
        info!(path = %path.display(), "catalog not present");
        return Ok(Outcome::Absent { file_name });
    };

    let violations = validate_catalog(&document);
    if !violations.is_empty() {
        info!(count = violations.len(), "catalog failed validation");
        return Ok(Outcome::Invalid { violations });
    }

    let summary = CatalogSummary::from_document(&document);
    debug!(
        categories = summary.categories,
        packages = summary.packages,
        platforms = summary.platforms,
        "catalog passed validation"
    );
    Ok(Outcome::Valid { file_name, summary })
}

fn catalog_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_path_points_into_package_catalog() {
        let base = Path::new("/repo");
        assert_eq!(
            default_catalog_path(base),
            PathBuf::from("/repo/package-catalog/catalog.json")
        );
    }

    #[test]
    fn check_reports_absent_catalog() {
        let temp = TempDir::new().unwrap();
        let outcome = check_catalog(&default_catalog_path(temp.path())).unwrap();
        assert_eq!(
            outcome,
            Outcome::Absent {
                file_name: "catalog.json".to_string()
            }
        );
    }

    #[test]
    fn check_propagates_parse_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.json");
        fs::write(&path, "not json").unwrap();
        let err = check_catalog(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing catalog"));
    }

    #[test]
    fn check_keeps_custom_file_name() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("staging.json");
        fs::write(
            &path,
            r#"{"categories":[],"platforms":{},"meta_packages":[],"pg_versions":[]}"#,
        )
        .unwrap();
        match check_catalog(&path).unwrap() {
            Outcome::Valid { file_name, summary } => {
                assert_eq!(file_name, "staging.json");
                assert_eq!(summary, CatalogSummary::default());
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }
}
