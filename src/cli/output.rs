//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    tictactoe::{Board, LAYOUT, Outcome, OutcomeSummary},
    types::Position,
};

/// Create a progress bar for the enumeration run
pub fn create_enumeration_progress(total_games: u64) -> crate::Result<ProgressBar> {
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games")
        .map_err(|e| crate::Error::ProgressBarTemplate {
            message: e.to_string(),
        })?
        .progress_chars("=>-");
    Ok(ProgressBar::new(total_games).with_style(style))
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format one outcome's share of a summary as "count (pp.pp%)"
pub fn format_share(summary: &OutcomeSummary, outcome: Outcome) -> String {
    format!(
        "{} ({:.2}%)",
        format_number(summary.count(outcome)),
        summary.percentage(outcome)
    )
}

/// Print outcome counts for an Outcome Map
pub fn print_summary(summary: &OutcomeSummary) {
    print_kv("histories", &format_number(summary.total));
    print_kv("X won", &format_share(summary, Outcome::XWins));
    print_kv("O won", &format_share(summary, Outcome::OWins));
    print_kv("draw", &format_share(summary, Outcome::Draw));
}

/// Render a board framed for the terminal, blanks for empty cells
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("=======\n");
    for labels in LAYOUT {
        let row: Vec<String> = labels
            .iter()
            .map(|&label| match board.get(Position::from_label(label)).to_char() {
                '.' => " ".to_string(),
                c => c.to_string(),
            })
            .collect();
        out.push_str(&format!("|{}|\n", row.join(" ")));
    }
    out.push_str("=======\n");
    out
}
