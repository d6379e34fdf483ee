//! JSON report writer.
//!
//! Rendering is pure serialization of the result, so identical inputs
//! produce byte-identical reports.

use std::path::Path;

use crate::domain::analysis::AnalysisResult;

use super::ReportError;

/// Renders the result as pretty-printed JSON with a trailing newline.
pub fn render(result: &AnalysisResult) -> Result<String, ReportError> {
    let mut out = serde_json::to_string_pretty(result)?;
    out.push('\n');
    Ok(out)
}

/// Writes the JSON report to the given path.
pub fn write(result: &AnalysisResult, path: &Path) -> Result<(), ReportError> {
    let rendered = render(result)?;
    std::fs::write(path, rendered).map_err(|source| ReportError::Io {
        path: path.display().to_string(),
        source,
    })
}
