//! Survey command - solution counts for every root word
//!
//! Runs the solutions search over the whole root list and reports which roots
//! give the richest and poorest games.

use super::solutions::find_solutions;
use crate::dictionary::WordListDictionary;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Solutions found for one root
#[derive(Debug, Clone)]
pub struct RootSurvey {
    pub root: String,
    pub solutions: usize,
    pub max_score: usize,
}

/// Statistics across all surveyed roots
#[derive(Debug)]
pub struct SurveyStatistics {
    pub roots_surveyed: usize,
    pub total_solutions: usize,
    pub average_solutions: f64,
    pub richest: Option<RootSurvey>,
    pub poorest: Vec<RootSurvey>,
    pub unplayable: Vec<String>,
    pub total_time: Duration,
}

/// Survey every root (or the first `limit` of them)
pub fn run_survey(
    roots: &[String],
    dictionary: &WordListDictionary,
    locale: &str,
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots: Vec<&String> = roots.iter().take(limit.unwrap_or(roots.len())).collect();

    println!("🔎 Surveying {} root words...", roots.len());

    let pb = ProgressBar::new(roots.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut results: Vec<RootSurvey> = Vec::with_capacity(roots.len());

    for root in roots {
        let found = find_solutions(root, dictionary, locale);
        tracing::debug!(root = %found.root, solutions = found.count(), "surveyed root");
        pb.set_message(format!("{}: {}", found.root, found.count()));
        results.push(RootSurvey {
            root: found.root.clone(),
            solutions: found.count(),
            max_score: found.max_score,
        });
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    summarize(results, start.elapsed())
}

fn summarize(mut results: Vec<RootSurvey>, total_time: Duration) -> SurveyStatistics {
    let roots_surveyed = results.len();
    let total_solutions: usize = results.iter().map(|r| r.solutions).sum();
    let average_solutions = if roots_surveyed > 0 {
        total_solutions as f64 / roots_surveyed as f64
    } else {
        0.0
    };

    let unplayable = results
        .iter()
        .filter(|r| r.solutions == 0)
        .map(|r| r.root.clone())
        .collect();

    results.sort_by(|a, b| {
        b.solutions
            .cmp(&a.solutions)
            .then_with(|| a.root.cmp(&b.root))
    });
    let richest = results.first().cloned();
    let poorest = results.iter().rev().take(5).cloned().collect();

    SurveyStatistics {
        roots_surveyed,
        total_solutions,
        average_solutions,
        richest,
        poorest,
        unplayable,
        total_time,
    }
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Roots surveyed:    {}", stats.roots_surveyed);
    println!("   Total solutions:   {}", stats.total_solutions);
    println!(
        "   Average per root:  {}",
        format!("{:.1}", stats.average_solutions).bright_yellow().bold()
    );
    println!("   Time taken:        {:.2}s", stats.total_time.as_secs_f64());

    if let Some(best) = &stats.richest {
        println!(
            "\n🏆 Richest root: {} ({} words, {} points)",
            best.root.to_uppercase().green().bold(),
            best.solutions,
            best.max_score
        );
    }

    if !stats.poorest.is_empty() {
        println!("\n📉 {}", "Poorest roots:".bright_cyan().bold());
        for entry in &stats.poorest {
            println!(
                "   {:<10} {:>4} words {:>5} points",
                entry.root.to_uppercase(),
                entry.solutions,
                entry.max_score
            );
        }
    }

    if !stats.unplayable.is_empty() {
        println!(
            "\n{} {}",
            "⚠ No solutions for:".red().bold(),
            stats.unplayable.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn survey(root: &str, solutions: usize) -> RootSurvey {
        RootSurvey {
            root: root.to_string(),
            solutions,
            max_score: solutions * 4,
        }
    }

    #[test]
    fn summarize_orders_roots() {
        let stats = summarize(
            vec![survey("alphabet", 3), survey("birthday", 10), survey("calendar", 0)],
            Duration::ZERO,
        );

        assert_eq!(stats.roots_surveyed, 3);
        assert_eq!(stats.total_solutions, 13);
        assert!((stats.average_solutions - 13.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.richest.unwrap().root, "birthday");
        assert_eq!(stats.poorest[0].root, "calendar");
        assert_eq!(stats.unplayable, vec!["calendar"]);
    }

    #[test]
    fn summarize_empty() {
        let stats = summarize(Vec::new(), Duration::ZERO);
        assert_eq!(stats.roots_surveyed, 0);
        assert!(stats.richest.is_none());
        assert!(stats.poorest.is_empty());
        assert!(stats.average_solutions.abs() < f64::EPSILON);
    }

    #[test]
    fn survey_respects_limit() {
        let dict = WordListDictionary::from_words("en", ["silk", "worm", "able"]);
        let roots = vec!["silkworm".to_string(), "table".to_string()];

        let stats = run_survey(&roots, &dict, "en", Some(1));

        assert_eq!(stats.roots_surveyed, 1);
        assert_eq!(stats.total_solutions, 2);
    }
}
