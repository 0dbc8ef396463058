//! Final verdict of a catalog check and its plain-text rendering.

use crate::catalog::{CatalogSummary, Violation};
use std::io::{self, Write};

pub const EXIT_OK: i32 = 0;
pub const EXIT_INVALID: i32 = 1;

const ERROR_HEADER: &str = "Validation errors:";
const ERROR_INDENT: &str = "  - ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The catalog file does not exist yet; nothing to check.
    Absent { file_name: String },
    Valid {
        file_name: String,
        summary: CatalogSummary,
    },
    Invalid { violations: Vec<Violation> },
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Absent { .. } | Outcome::Valid { .. } => EXIT_OK,
            Outcome::Invalid { .. } => EXIT_INVALID,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code() == EXIT_OK
    }

    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            Outcome::Absent { file_name } => {
                writeln!(out, "{file_name} not yet created; skipping validation")
            }
            Outcome::Valid { file_name, summary } => writeln!(
                out,
                "✓ {file_name} valid: {} categories, {} packages, {} platforms",
                summary.categories, summary.packages, summary.platforms
            ),
            Outcome::Invalid { violations } => {
                writeln!(out, "{ERROR_HEADER}")?;
                for violation in violations {
                    writeln!(out, "{ERROR_INDENT}{violation}")?;
                }
                Ok(())
            }
        }
    }
}
