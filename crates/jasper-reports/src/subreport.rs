//! Detection of subreports referenced by a template.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Matches a whole subreport expression element on one line.
static SUBREPORT_EXPRESSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<subreportExpression>.*</subreportExpression>")
        .expect("Invalid subreport expression regex pattern")
});

const TEMPLATE_EXTENSION: &str = ".jrxml";

/// A subreport template referenced from another template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubreportReference {
    /// Quoted file name inside the expression, e.g. `invoice_lines.jrxml`.
    pub file_name: String,
    /// File name without the `.jrxml` extension.
    pub report_name: String,
}

impl SubreportReference {
    /// Name under which the subreport is registered in `namespace`.
    pub fn qualified_name(&self, namespace: &str) -> String {
        format!("{}.{}", namespace, self.report_name)
    }
}

/// Scans template text for `<subreportExpression>` elements.
///
/// The file name is the text between the first pair of double quotes.
/// Expressions without a quoted name are ignored.
pub fn find_subreport_references(content: &str) -> Vec<SubreportReference> {
    SUBREPORT_EXPRESSION
        .find_iter(content)
        .filter_map(|m| m.as_str().split('"').nth(1))
        .map(|file_name| SubreportReference {
            file_name: file_name.to_string(),
            report_name: file_name
                .strip_suffix(TEMPLATE_EXTENSION)
                .unwrap_or(file_name)
                .to_string(),
        })
        .collect()
}

/// Registry of reports known to the host system.
pub trait ReportCatalog: Send + Sync {
    /// Whether a report named `report_name` is registered.
    fn contains(&self, report_name: &str) -> bool;
}

/// A fixed set of report names.
#[derive(Debug, Clone, Default)]
pub struct StaticReportCatalog {
    names: HashSet<String>,
}

impl StaticReportCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a report name.
    pub fn insert(&mut self, report_name: impl Into<String>) {
        self.names.insert(report_name.into());
    }
}

impl<S: Into<String>> FromIterator<S> for StaticReportCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl ReportCatalog for StaticReportCatalog {
    fn contains(&self, report_name: &str) -> bool {
        self.names.contains(report_name)
    }
}
