//! Export summary.

use std::fmt;
use std::path::PathBuf;

use serde::{Serialize, Serializer};

/// Why a route was not exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The in-process fetch returned a non-success status.
    Status(u16),
    /// Parameterized route with no value source.
    Dynamic,
    /// Concrete path would escape the output root.
    InvalidPath,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Status(code) => write!(f, "status:{code}"),
            SkipReason::Dynamic => f.write_str("dynamic"),
            SkipReason::InvalidPath => f.write_str("invalid-path"),
        }
    }
}

impl Serialize for SkipReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A route left out of the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRoute {
    pub route: String,
    pub reason: SkipReason,
}

/// Result of one export run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportReport {
    /// Written pages, including the output root.
    pub exported: Vec<PathBuf>,
    /// Files copied from the asset source directory.
    pub assets_copied: usize,
    pub skipped: Vec<SkippedRoute>,
}

impl ExportReport {
    pub fn skip(&mut self, route: impl Into<String>, reason: SkipReason) {
        self.skipped.push(SkippedRoute {
            route: route.into(),
            reason,
        });
    }
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Export complete.")?;
        writeln!(f, "Exported files:")?;
        for path in &self.exported {
            writeln!(f, "  - {}", path.display())?;
        }
        if self.assets_copied > 0 {
            writeln!(f, "Copied {} asset file(s).", self.assets_copied)?;
        }
        if !self.skipped.is_empty() {
            writeln!(f)?;
            writeln!(f, "Skipped routes:")?;
            for skipped in &self.skipped {
                writeln!(f, "  - {} ({})", skipped.route, skipped.reason)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::Status(404).to_string(), "status:404");
        assert_eq!(SkipReason::Dynamic.to_string(), "dynamic");
    }

    #[test]
    fn test_summary_lists_skips() {
        let mut report = ExportReport {
            exported: vec![PathBuf::from("out/index.html")],
            ..Default::default()
        };
        report.skip("/reviews/{id}", SkipReason::Dynamic);

        let text = report.to_string();
        assert!(text.contains("  - out/index.html"));
        assert!(text.contains("  - /reviews/{id} (dynamic)"));
    }

    #[test]
    fn test_json_uses_reason_strings() {
        let mut report = ExportReport::default();
        report.skip("/broken", SkipReason::Status(500));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["skipped"][0]["reason"], "status:500");
        assert_eq!(json["skipped"][0]["route"], "/broken");
    }
}
