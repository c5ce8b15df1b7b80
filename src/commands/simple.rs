//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Words are typed one per line; commands
//! start with ':' so they can never collide with a word.

use crate::dictionary::DictionaryOracle;
use crate::game::Session;
use crate::output::formatters::word_with_length;
use crate::output::print_submission;
use crate::validator::WordValidator;
use crate::wordlists::RootWords;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Play on stdin/stdout until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<D, R>(
    validator: &WordValidator<'_, D>,
    roots: &RootWords,
    rng: &mut R,
) -> io::Result<()>
where
    D: DictionaryOracle + ?Sized,
    R: Rng + ?Sized,
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(&mut stdin.lock(), &mut stdout.lock(), validator, roots, rng)
}

/// Game loop over arbitrary input and output
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play<I, O, D, R>(
    input: &mut I,
    out: &mut O,
    validator: &WordValidator<'_, D>,
    roots: &RootWords,
    rng: &mut R,
) -> io::Result<()>
where
    I: BufRead,
    O: Write,
    D: DictionaryOracle + ?Sized,
    R: Rng + ?Sized,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Make words from the letters of the root word.")?;
    writeln!(out, "Each accepted word scores one point per letter.\n")?;
    writeln!(
        out,
        "Commands: ':new' for a new root, ':words' to list your words, ':quit' to exit\n"
    )?;

    let mut session = Session::new(roots.pick(rng));
    print_root(out, &session)?;

    let mut line = String::new();
    loop {
        write!(out, "Your word: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out, "\n👋 Final score: {}\n", session.score())?;
            return Ok(());
        }

        match line.trim().to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => {
                writeln!(out, "\n👋 Thanks for playing! Final score: {}\n", session.score())?;
                return Ok(());
            }
            ":new" | ":n" => {
                session.restart(roots.pick(rng));
                writeln!(out, "\n🔄 New game started!\n")?;
                print_root(out, &session)?;
            }
            ":words" | ":w" => {
                if session.used_words().is_empty() {
                    writeln!(out, "No words yet.\n")?;
                } else {
                    for word in session.used_words() {
                        writeln!(out, "  • {}", word_with_length(word))?;
                    }
                    writeln!(out)?;
                }
            }
            _ => {
                let outcome = session.submit(&line, validator);
                print_submission(out, &outcome, &session)?;
            }
        }
    }
}

fn print_root<O: Write>(out: &mut O, session: &Session) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Root word: {}",
        session.root().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())
}
