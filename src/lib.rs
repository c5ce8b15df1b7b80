//! Word Scramble
//!
//! A word game: you are given a random root word and score points for every
//! real word you can spell from its letters.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::game::{Session, Submission};
//! use word_scramble::validator::WordValidator;
//!
//! let dictionary = WordListDictionary::embedded();
//! let validator = WordValidator::new(&dictionary);
//! let mut session = Session::new("silkworm");
//!
//! let outcome = session.submit("silk", &validator);
//! assert!(matches!(outcome, Submission::Accepted { points: 4, .. }));
//! assert_eq!(session.score(), 4);
//! ```

// Core domain types
pub mod core;

// Dictionary lookup
pub mod dictionary;

// Candidate validation gates
pub mod validator;

// Session state
pub mod game;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
