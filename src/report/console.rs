use crate::report::report_model::GenerationReport;

// ============================================================================
// Console summary
// ============================================================================

/// Format a generation report for the terminal.
///
/// ```text
/// === Bounds header: Page 1 ===
///   prefix: fbh  guard: FIGMABOUNDSHEADER
///   3 records, sha1 2f1c...
///   [WARN] fbh_A_B emitted 2 times
/// ```
pub fn format_console_summary(report: &GenerationReport) -> String {
    let mut out = String::new();

    let title = report.page.as_deref().unwrap_or("selection");
    out.push_str(&format!("=== Bounds header: {} ===\n", title));
    out.push_str(&format!(
        "  prefix: {}  guard: {}\n",
        report.prefix, report.guard
    ));
    out.push_str(&format!(
        "  {} records, sha1 {}\n",
        report.records.len(),
        report.digest
    ));

    for dup in &report.duplicates {
        out.push_str(&format!(
            "  [WARN] {} emitted {} times\n",
            dup.identifier, dup.count
        ));
    }

    out
}
