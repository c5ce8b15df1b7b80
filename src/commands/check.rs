//! Check command
//!
//! Plays a fixed list of candidates against a given root, in order, as one session.

use crate::dictionary::DictionaryOracle;
use crate::game::{Session, Submission};
use crate::validator::WordValidator;

/// Result of checking a list of candidates
pub struct CheckResult {
    pub root: String,
    pub steps: Vec<CheckStep>,
    pub score: usize,
    pub used_words: Vec<String>,
}

/// One candidate and what happened to it
pub struct CheckStep {
    pub input: String,
    pub outcome: Submission,
}

impl CheckResult {
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step.outcome, Submission::Accepted { .. }))
            .count()
    }

    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step.outcome, Submission::Rejected { .. }))
            .count()
    }
}

/// Submit each candidate in turn against `root`
pub fn run_check<D, S>(
    root: &str,
    candidates: &[S],
    validator: &WordValidator<'_, D>,
) -> CheckResult
where
    D: DictionaryOracle + ?Sized,
    S: AsRef<str>,
{
    let mut session = Session::new(root);

    let steps = candidates
        .iter()
        .map(|candidate| {
            let input = candidate.as_ref().to_string();
            let outcome = session.submit(&input, validator);
            CheckStep { input, outcome }
        })
        .collect();

    CheckResult {
        root: session.root().to_string(),
        steps,
        score: session.score(),
        used_words: session.used_words().to_vec(),
    }
}
