//! Perft harness for castellan: suite runs, divide cross-checks and an
//! interactive move stepper.

pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod stepper;
pub mod suite;

pub use config::SuiteConfig;
pub use error::HarnessError;
pub use report::DepthResult;
pub use runner::{SuiteSummary, debug_perft, run_perft_tests, run_suite};
pub use stepper::step_through;
pub use suite::{PerftCase, load_suite, parse_suite};
