//! Status lines printed on stdout.

use kin_core::{ClearSummary, SeedReport, SEED_SUCCESS_MESSAGE};

/// One line per seeding step, then the closing success line.
///
/// Skipped steps are prefixed with `ERROR:`; the closing line is printed
/// regardless, since a skipped step does not fail the command.
pub fn seed_report_lines(report: &SeedReport) -> Vec<String> {
    report
        .outcomes
        .iter()
        .map(|outcome| {
            if outcome.is_skipped() {
                format!("ERROR: {}", outcome.message())
            } else {
                outcome.message()
            }
        })
        .chain(std::iter::once(SEED_SUCCESS_MESSAGE.to_string()))
        .collect()
}

pub fn clear_summary_line(summary: &ClearSummary) -> String {
    format!(
        "Deleted {} categories and {} priorities with their tasks.",
        summary.categories, summary.priorities
    )
}
