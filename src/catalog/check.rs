//! Structural checks over a parsed catalog.
//!
//! The pass never stops at the first problem: every violation is collected in
//! discovery order (top-level sections, then packages category by category,
//! then platforms) so authors can fix a catalog in one round.

use crate::catalog::model::{CategoryView, PlatformView};
use crate::catalog::{REQUIRED_SECTIONS, UNKNOWN_IDENTIFIER};
use serde_json::Value;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
/// A single structural problem found in the catalog.
pub enum Violation {
    #[error("missing {section}")]
    MissingSection { section: &'static str },
    #[error("package missing name in {category}")]
    PackageMissingName { category: String },
    #[error("{package} missing pg_versions")]
    PackageMissingVersions { package: String },
    #[error("{platform} missing install_pattern")]
    PlatformMissingInstallPattern { platform: String },
}

/// Walk the catalog and return every violation in discovery order.
pub fn validate_catalog(document: &Value) -> Vec<Violation> {
    let mut violations = Vec::new();

    for section in REQUIRED_SECTIONS {
        if document.get(section).is_none() {
            violations.push(Violation::MissingSection { section });
        }
    }

    for category in CategoryView::all(document) {
        for package in category.packages() {
            let name = package.name();
            if name.is_none() {
                violations.push(Violation::PackageMissingName {
                    category: category
                        .name()
                        .unwrap_or_else(|| UNKNOWN_IDENTIFIER.to_string()),
                });
            }
            if !package.has_pg_versions() {
                violations.push(Violation::PackageMissingVersions {
                    package: name.unwrap_or_else(|| UNKNOWN_IDENTIFIER.to_string()),
                });
            }
        }
    }

    for platform in PlatformView::all(document) {
        if !platform.has_install_pattern() {
            violations.push(Violation::PlatformMissingInstallPattern {
                platform: platform.key().to_string(),
            });
        }
    }

    violations
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Counts reported on a clean run.
pub struct CatalogSummary {
    pub categories: usize,
    pub packages: usize,
    pub platforms: usize,
}

impl CatalogSummary {
    pub fn from_document(document: &Value) -> Self {
        let mut summary = Self::default();
        for category in CategoryView::all(document) {
            summary.categories += 1;
            summary.packages += category.packages().count();
        }
        summary.platforms = PlatformView::all(document).count();
        summary
    }
}
