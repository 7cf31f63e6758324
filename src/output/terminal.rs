// Colored terminal output for comparison reports.
//
// All terminal-specific formatting lives here: bold headers, the
// score-banded bar color, dimmed word listings. main.rs delegates here.

use colored::{ColoredString, Colorize};

use crate::pipeline::{ComparisonReport, ModeReport};

use super::render_bar;

/// Display both mode reports for a document pair.
pub fn display_report(report: &ComparisonReport, show_words: bool) {
    display_mode(
        "Without word weighting (unique vocabulary)",
        &report.unique,
        show_words,
    );
    display_mode(
        "With word weighting (every occurrence counts)",
        &report.weighted,
        false,
    );
    println!();
}

fn display_mode(header: &str, mode: &ModeReport, show_words: bool) {
    println!("\n{}", format!("=== {header} ===").bold());
    println!("Number of significant words matching: {}", mode.matches);
    println!(
        "Degree of conformity: {} {:.2}%",
        colorize_bar(render_bar(mode.conformity), mode.conformity),
        mode.conformity
    );

    if show_words {
        if let Some(words) = &mode.shared_words {
            if words.is_empty() {
                println!("Shared vocabulary: {}", "(none)".dimmed());
            } else {
                println!("Shared vocabulary: {}", words.join(", ").dimmed());
            }
        }
    }
}

/// Color the bar by score band.
fn colorize_bar(bar: String, conformity: f64) -> ColoredString {
    if conformity >= 75.0 {
        bar.bright_green()
    } else if conformity >= 40.0 {
        bar.bright_yellow()
    } else {
        bar.bright_blue()
    }
}
