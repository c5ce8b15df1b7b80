//! Game session state
//!
//! The session owns everything that changes during play; validation stays pure.

mod session;

pub use session::{Session, Submission};
