//! Self-play harness for the perfect-play tic-tac-toe agent.
//!
//! Loads a [`MatchConfig`], pits two alpha-beta agents against each other,
//! and reports results through `tracing`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod runner;

pub use config::{ConfigError, MatchConfig};
pub use runner::{OpeningReport, run_selfplay, solve_openings};
