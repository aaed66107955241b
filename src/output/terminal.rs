//! Terminal output formatting with colors and fixed-width tables.

use colored::Colorize;

use crate::config::{Config, DefaultsNotice};
use crate::result::TrialResult;
use crate::types::Pattern;

/// Width of the label column.
pub const LABEL_WIDTH: usize = 20;

/// Width of the value column.
pub const VALUE_WIDTH: usize = 12;

/// Width of the horizontal rule between blocks.
const RULE_WIDTH: usize = 60;

/// Horizontal rule separating report blocks.
pub fn separator() -> String {
    "\u{2500}".repeat(RULE_WIDTH)
}

/// Report header printed once before the first trial.
pub fn format_header(config: &Config) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{}\n",
        format!(
            "Performance Test: {} Trials, {} Predictable Conditions, {} Iterations",
            config.trials,
            Pattern::ALL.len(),
            config.iterations
        )
        .bold()
    ));
    output.push_str(&separator());
    output.push('\n');
    output
}

/// Format the notice about applied command-line defaults.
///
/// Missing both flags is highlighted; a single missing flag is plain.
pub fn format_notice(notice: &DefaultsNotice) -> String {
    match notice {
        DefaultsNotice::Both { .. } => notice.to_string().yellow().to_string(),
        _ => notice.to_string(),
    }
}

/// Format one trial block: distribution, timings, and differences.
pub fn format_trial(result: &TrialResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", format!("Trial {}:", result.trial).bold()));
    output.push_str(&format!(
        "  Distribution: {:.2}% true, {:.2}% false\n",
        result.true_percentage,
        result.false_percentage
    ));

    output.push_str("  Execution Times:\n");
    output.push_str(&row("Unpredictable", result.unpredictable_us));
    output.push('\n');
    for timing in &result.predictable {
        output.push_str(&row(timing.pattern.label(), timing.elapsed_us));
        output.push('\n');
    }

    output.push_str("  Differences from Unpredictable:\n");
    for (pattern, diff) in result.differences() {
        let line = row(pattern.label(), diff);
        if diff < 0 {
            output.push_str(&line.red().to_string());
        } else {
            output.push_str(&line);
        }
        output.push('\n');
    }

    output.push_str(&separator());
    output.push('\n');
    output
}

/// One table row without its line break, so styling never spans lines.
fn row<T: std::fmt::Display>(label: &str, value: T) -> String {
    format!(
        "    {:<lw$} {:>vw$} us",
        label,
        value,
        lw = LABEL_WIDTH,
        vw = VALUE_WIDTH
    )
}
