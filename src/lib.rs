//! Force composition engine for Alpha Strike collections: given a catalog of
//! owned minis and a settings snapshot, an anytime best-first local search
//! assembles the best-scoring force within an iteration budget. The search is
//! cancellable and progress-reporting; it never fails, it only stops early.

pub mod catalog;
pub mod chooser;
pub mod cli;
pub mod model;
pub mod rng;
pub mod runner;
pub mod score;
