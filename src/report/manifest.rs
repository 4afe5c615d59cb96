use crate::report::report_model::GenerationReport;

/// Pretty JSON manifest listing every identifier and its bounds.
pub fn to_manifest_json(report: &GenerationReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
