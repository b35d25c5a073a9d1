use crate::app::summary::{Report, SuiteCounts};

/// Prints the per-suite lines followed by a blank line and the grand total.
/// Goes straight to stdout, bypassing the logger, so the report stays
/// byte-identical between runs over the same log.
pub fn print(report: &Report) {
    for suite in &report.suites {
        println!("{}", format_line(&suite.name, &suite.counts));
    }
    println!();
    println!("{}", format_line("summary", &report.total()));
}

fn format_line(name: &str, counts: &SuiteCounts) -> String {
    format!(
        "{:<20} passed {:>3}, failed {:>3}, na {:>3}",
        name, counts.pass, counts.fail, counts.na
    )
}
