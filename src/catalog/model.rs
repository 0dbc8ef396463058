//! Raw catalog loading and lenient read-only views.
//!
//! The catalog is kept as a `serde_json::Value` rather than deserialized into
//! strict structs: a missing or mistyped field is something to report, not a
//! reason to abort the whole pass. The views below expose only the fields the
//! checks look at and treat anything of the wrong shape as absent.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read and parse the catalog at `path`.
///
/// Returns `Ok(None)` when the file does not exist yet. Read failures and
/// malformed JSON are errors carrying the path as context.
pub fn load_catalog_from_path(path: &Path) -> Result<Option<Value>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("reading catalog {}", path.display()));
        }
    };
    let document = serde_json::from_str(&data)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    Ok(Some(document))
}

#[derive(Clone, Copy, Debug)]
/// One entry of the `categories` array.
pub struct CategoryView<'a> {
    raw: &'a Value,
}

impl<'a> CategoryView<'a> {
    /// Categories in declaration order; empty when `categories` is not an array.
    pub fn all(document: &'a Value) -> impl Iterator<Item = CategoryView<'a>> {
        array_field(document, "categories").map(|raw| CategoryView { raw })
    }

    pub fn name(self) -> Option<String> {
        identifier(self.raw.get("name"))
    }

    /// Packages in declaration order; empty when `packages` is not an array.
    pub fn packages(self) -> impl Iterator<Item = PackageView<'a>> {
        array_field(self.raw, "packages").map(|raw| PackageView { raw })
    }
}

#[derive(Clone, Copy, Debug)]
/// One entry of a category's `packages` array. Extra fields are ignored.
pub struct PackageView<'a> {
    raw: &'a Value,
}

impl<'a> PackageView<'a> {
    pub fn name(self) -> Option<String> {
        identifier(self.raw.get("name"))
    }

    pub fn has_pg_versions(self) -> bool {
        !is_blank(self.raw.get("pg_versions"))
    }
}

#[derive(Clone, Copy, Debug)]
/// One entry of the `platforms` mapping, keyed by platform id.
pub struct PlatformView<'a> {
    key: &'a str,
    raw: &'a Value,
}

impl<'a> PlatformView<'a> {
    /// Platforms in document order; empty when `platforms` is not an object.
    pub fn all(document: &'a Value) -> impl Iterator<Item = PlatformView<'a>> {
        document
            .get("platforms")
            .and_then(Value::as_object)
            .into_iter()
            .flatten()
            .map(|(key, raw)| PlatformView {
                key: key.as_str(),
                raw,
            })
    }

    pub fn key(self) -> &'a str {
        self.key
    }

    pub fn has_install_pattern(self) -> bool {
        !is_blank(self.raw.get("install_pattern"))
    }
}

fn array_field<'a>(value: &'a Value, field: &str) -> impl Iterator<Item = &'a Value> + use<'a> {
    value
        .get(field)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

/// JSON truthiness: missing, null, false, zero, and empty strings, arrays or
/// objects all count as blank.
pub(crate) fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(flag)) => !flag,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
    }
}

fn identifier(value: Option<&Value>) -> Option<String> {
    if is_blank(value) {
        return None;
    }
    match value? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
