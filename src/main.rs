//! Word Scramble - CLI
//!
//! Word game with TUI and line modes: spell words from a random root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use word_scramble::{
    commands::{find_solutions, print_survey_statistics, run_check, run_simple, run_survey},
    config::GameConfig,
    dictionary::{DEFAULT_LOCALE, WordListDictionary},
    logging,
    output::{print_check_result, print_solutions_result},
    validator::WordValidator,
    wordlists::RootWords,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list (one word per line); defaults to the embedded list
    #[arg(long, global = true, env = "WORD_SCRAMBLE_START_WORDS")]
    start_words: Option<PathBuf>,

    /// Dictionary word list (one word per line); defaults to the embedded English list
    #[arg(short, long, global = true, env = "WORD_SCRAMBLE_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Locale words are checked in
    #[arg(short, long, global = true, env = "WORD_SCRAMBLE_LOCALE", default_value = DEFAULT_LOCALE)]
    locale: String,

    /// Seed for reproducible root word selection
    #[arg(long, global = true, env = "WORD_SCRAMBLE_SEED")]
    seed: Option<u64>,

    /// Log level filter (overridden by `RUST_LOG`)
    #[arg(long, global = true, env = "WORD_SCRAMBLE_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, env = "WORD_SCRAMBLE_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Submit a list of words against a root, in order, as one game
    Check {
        /// The root word
        root: String,

        /// Candidate words to submit
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List every word that would be accepted for a root
    Solutions {
        /// The root word
        root: String,

        /// Show at most this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Count solutions for every root word in the list
    Survey {
        /// Limit number of roots to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            start_words: self.start_words.clone(),
            dictionary: self.dictionary.clone(),
            locale: self.locale.clone(),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let interactive = matches!(command, Commands::Play);
    logging::init(&cli.log_level, cli.log_file.as_deref(), interactive)?;

    let dictionary = config
        .load_dictionary()
        .context("failed to load dictionary")?;
    tracing::info!(
        words = dictionary.len(),
        language = dictionary.language(),
        locale = %config.locale,
        "dictionary ready"
    );

    match command {
        Commands::Play => run_play_command(&config, &dictionary),
        Commands::Simple => run_simple_command(&config, &dictionary),
        Commands::Check { root, words } => {
            run_check_command(&config, &dictionary, &root, &words);
            Ok(())
        }
        Commands::Solutions { root, limit } => {
            let result = find_solutions(&root, &dictionary, &config.locale);
            print_solutions_result(&result, limit);
            Ok(())
        }
        Commands::Survey { limit } => run_survey_command(&config, &dictionary, limit),
    }
}

fn load_roots(config: &GameConfig) -> Result<RootWords> {
    let roots = config
        .load_root_words()
        .context("failed to load root words")?;
    tracing::info!(roots = roots.len(), "root words ready");
    Ok(roots)
}

fn run_play_command(config: &GameConfig, dictionary: &WordListDictionary) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let roots = load_roots(config)?;
    let app = App::new(dictionary, &config.locale, &roots, config.rng());
    run_tui(app)
}

fn run_simple_command(config: &GameConfig, dictionary: &WordListDictionary) -> Result<()> {
    let roots = load_roots(config)?;
    let validator = WordValidator::with_locale(dictionary, config.locale.as_str());
    let mut rng = config.rng();
    run_simple(&validator, &roots, &mut rng).context("line mode I/O failed")
}

fn run_check_command(
    config: &GameConfig,
    dictionary: &WordListDictionary,
    root: &str,
    words: &[String],
) {
    let validator = WordValidator::with_locale(dictionary, config.locale.as_str());
    let result = run_check(root, words, &validator);
    print_check_result(&result);
}

fn run_survey_command(
    config: &GameConfig,
    dictionary: &WordListDictionary,
    limit: Option<usize>,
) -> Result<()> {
    let roots = load_roots(config)?;

    println!("\n{}", "═".repeat(60));
    println!(" Word Scramble Root Survey ");
    println!("{}", "═".repeat(60));
    println!("\nDictionary: {} words", dictionary.len());
    println!("Locale: {}\n", config.locale);

    let stats = run_survey(roots.words(), dictionary, &config.locale, limit);
    print_survey_statistics(&stats);
    Ok(())
}
