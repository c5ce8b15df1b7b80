//! Display functions for command results

use super::formatters::{
    create_progress_bar, rejection_message, rejection_title, spaced_letters, word_with_length,
};
use crate::commands::{CheckResult, SolutionsResult};
use crate::game::{Session, Submission};
use colored::Colorize;
use std::io::{self, Write};

/// Print the outcome of one submission in line mode
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_submission<W: Write>(
    out: &mut W,
    outcome: &Submission,
    session: &Session,
) -> io::Result<()> {
    match outcome {
        Submission::Ignored => Ok(()),
        Submission::Accepted { word, points } => writeln!(
            out,
            "{} {} {} (score: {})\n",
            "✓".green().bold(),
            word.to_uppercase().bright_white().bold(),
            format!("+{points} points").green(),
            session.score()
        ),
        Submission::Rejected { reason, .. } => writeln!(
            out,
            "{} {}: {}\n",
            "✗".red().bold(),
            rejection_title(*reason).red().bold(),
            rejection_message(*reason, session.root())
        ),
    }
}

/// Print the result of checking a list of candidates
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root: {}",
        spaced_letters(&result.root).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = (i + 1).to_string().bright_black();
        match &step.outcome {
            Submission::Ignored => {
                println!("{turn}. {}", "(empty, ignored)".bright_black());
            }
            Submission::Accepted { word, points } => {
                println!(
                    "{turn}. {} {} {}",
                    "✓".green().bold(),
                    word.bright_white().bold(),
                    format!("+{points}").green()
                );
            }
            Submission::Rejected { word, reason } => {
                println!(
                    "{turn}. {} {} {}",
                    "✗".red().bold(),
                    word,
                    format!("({})", rejection_title(*reason)).red()
                );
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "Accepted {} of {} | Score: {}",
            result.accepted_count(),
            result.steps.len(),
            result.score
        )
        .bold()
    );
}

/// Print every solution for a root
pub fn print_solutions_result(result: &SolutionsResult, limit: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} words, {} points available",
        result.count().to_string().bright_yellow().bold(),
        result.max_score.to_string().bright_yellow().bold()
    );

    let distribution = result.length_distribution();
    if !distribution.is_empty() {
        let most = distribution.iter().map(|(_, n)| *n).max().unwrap_or(1);
        println!("\n📈 {}", "By length:".bright_cyan().bold());
        for (len, count) in &distribution {
            let bar = create_progress_bar(*count as f64, most as f64, 30);
            println!("   {len:>2}: {} {count:4}", bar.green());
        }
    }

    println!();
    for word in result.words.iter().take(limit.unwrap_or(result.words.len())) {
        println!("  • {}", word_with_length(word));
    }
    if let Some(limit) = limit
        && result.words.len() > limit
    {
        println!(
            "  {}",
            format!("... and {} more", result.words.len() - limit).bright_black()
        );
    }
}
