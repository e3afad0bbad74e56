//! # qtrim - Boolean Search-Query Optimizer
//!
//! qtrim trims redundant terms out of a boolean search query (`AND`/`OR`
//! plus parentheses) by re-measuring the query against an external
//! result-count oracle: a term whose removal leaves the result count
//! unchanged contributes nothing and is dropped.
//!
//! ## Architecture
//!
//! - [`query`] - Query analysis: tokenizer, tree parser, minimal operator
//!   groups, flattening, reconstruction, OR-keyword tagging
//! - [`optimize`] - Greedy redundancy elimination against the oracle
//! - [`oracle`] - The result-count oracle trait and its PubMed HTTP
//!   implementation
//! - [`output`] - Report rendering
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use qtrim::oracle::PubmedOracle;
//! use qtrim::{analyze, optimize};
//!
//! let (query, keywords) = analyze("(cat OR feline) AND (diabetes)");
//! let oracle = PubmedOracle::new(Duration::from_secs(30), 2).unwrap();
//! let report = optimize(&oracle, &query, &keywords).unwrap();
//! println!("{} -> {}", report.baseline_count, report.final_query);
//! ```
//!
//! The pipeline runs strictly sequentially: every oracle call blocks and
//! each candidate removal depends on the outcome of the previous one.

pub mod optimize;
pub mod oracle;
pub mod output;
pub mod query;

pub use optimize::{optimize, OptimizeReport};
pub use oracle::{OracleError, ResultCountOracle};
pub use query::analyze;
