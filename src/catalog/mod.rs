//! Package catalog wiring.
//!
//! This module wraps the package catalog on disk (by default
//! `package-catalog/catalog.json`) so the validator can load the raw document,
//! walk it through lenient views, and collect every structural violation in
//! one pass. Nothing here mutates the catalog.

pub mod check;
pub mod model;

pub use check::{CatalogSummary, Violation, validate_catalog};
pub use model::{CategoryView, PackageView, PlatformView, load_catalog_from_path};

/// Default relative path to the package catalog.
pub const DEFAULT_CATALOG_PATH: &str = "package-catalog/catalog.json";

/// Top-level sections every catalog must declare, in reporting order.
pub const REQUIRED_SECTIONS: [&str; 4] = ["categories", "platforms", "meta_packages", "pg_versions"];

/// Identifier used when a category or package has no usable name.
pub const UNKNOWN_IDENTIFIER: &str = "?";
