//! Greedy redundancy elimination: measure a baseline result count, then try
//! removing each tagged keyword from the query and keep every removal that
//! leaves the count unchanged.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::Serialize;

use crate::oracle::ResultCountOracle;
use crate::query::OrKeyword;

/// Outcome of one optimization run.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizeReport {
    /// Result count of the query before any removal
    pub baseline_count: u64,
    /// The query after all kept removals
    pub final_query: String,
    /// Keywords whose removal left the count unchanged, in removal order
    pub excluded_terms: Vec<String>,
}

/// Run the elimination pass over `query` with its tagged keywords.
///
/// A single left-to-right greedy pass, not a minimal-query search: once a
/// keyword is kept, later removals are attempted against the query as
/// already reduced, so the result is only locally minimal and order matters.
/// Every oracle failure is fatal; a failed measurement is never recorded as
/// "not redundant".
pub fn optimize(
    oracle: &impl ResultCountOracle,
    query: &str,
    keywords: &[OrKeyword],
) -> Result<OptimizeReport> {
    let baseline_count = oracle
        .count(query)
        .with_context(|| format!("measuring baseline result count for query {query:?}"))?;
    info!("baseline: {baseline_count} results for {query:?}");

    let mut current_query = query.to_string();
    let mut excluded_terms = Vec::new();

    for keyword in keywords {
        let removal = keyword.removal_text();
        let candidate = match current_query.find(&removal) {
            Some(at) => {
                let mut candidate = current_query.clone();
                candidate.replace_range(at..at + removal.len(), "");
                candidate
            }
            None => {
                // Keeps the source's replace semantics, but observable.
                warn!("removal text {removal:?} not found in current query, no-op");
                current_query.clone()
            }
        };

        let count = oracle
            .count(&candidate)
            .with_context(|| format!("measuring result count for candidate {candidate:?}"))?;
        if count == baseline_count {
            info!("excluding {:?} (count unchanged at {count})", keyword.term);
            excluded_terms.push(keyword.term.clone());
            current_query = candidate;
        } else {
            debug!(
                "keeping {:?} (count {count} != baseline {baseline_count})",
                keyword.term
            );
        }
    }

    Ok(OptimizeReport {
        baseline_count,
        final_query: current_query,
        excluded_terms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::OracleError;
    use crate::query::{OrKeyword, Position};
    use std::cell::RefCell;

    /// Oracle driven by a plain function of the query, recording every
    /// query it was asked to measure.
    struct ScriptedOracle<F: Fn(&str) -> Result<u64, OracleError>> {
        script: F,
        calls: RefCell<Vec<String>>,
    }

    impl<F: Fn(&str) -> Result<u64, OracleError>> ScriptedOracle<F> {
        fn new(script: F) -> Self {
            Self {
                script,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl<F: Fn(&str) -> Result<u64, OracleError>> ResultCountOracle for ScriptedOracle<F> {
        fn count(&self, query: &str) -> Result<u64, OracleError> {
            self.calls.borrow_mut().push(query.to_string());
            (self.script)(query)
        }
    }

    fn kw(term: &str, hint: Option<Position>) -> OrKeyword {
        OrKeyword {
            term: term.to_string(),
            hint,
        }
    }

    #[test]
    fn test_redundant_synonym_is_removed() {
        // All results come from "cat": removing it drops the count to 0, so
        // it is kept; removing "feline" changes nothing, so it goes.
        let oracle =
            ScriptedOracle::new(|q| Ok(if q.contains("cat") { 100 } else { 0 }));
        let keywords = [
            kw("cat", Some(Position::After)),
            kw("feline", Some(Position::Before)),
        ];

        let report = optimize(&oracle, "(cat) OR (feline)", &keywords).unwrap();
        assert_eq!(report.baseline_count, 100);
        assert_eq!(report.excluded_terms, vec!["feline"]);
        assert_eq!(report.final_query, "(cat)");
        assert_eq!(
            *oracle.calls.borrow(),
            vec!["(cat) OR (feline)", "(feline)", "(cat)"]
        );
    }

    #[test]
    fn test_nothing_redundant_keeps_query() {
        // Every removal changes the count: the query survives untouched.
        let counts = move |q: &str| {
            Ok(match (q.contains("cat"), q.contains("dog")) {
                (true, true) => 250,
                (true, false) | (false, true) => 150,
                (false, false) => 0,
            })
        };
        let oracle = ScriptedOracle::new(counts);
        let keywords = [
            kw("cat", Some(Position::After)),
            kw("dog", Some(Position::Before)),
        ];

        let report = optimize(&oracle, "(cat) OR (dog)", &keywords).unwrap();
        assert_eq!(report.excluded_terms, Vec::<String>::new());
        assert_eq!(report.final_query, "(cat) OR (dog)");
    }

    #[test]
    fn test_missing_removal_text_is_a_noop_exclusion() {
        // The snippet never occurs, the candidate equals the current query,
        // and the unchanged count marks the keyword excluded without
        // touching the query. Accepted source behavior.
        let oracle = ScriptedOracle::new(|_| Ok(42));
        let keywords = [kw("absent", Some(Position::Before))];

        let report = optimize(&oracle, "(cat)", &keywords).unwrap();
        assert_eq!(report.excluded_terms, vec!["absent"]);
        assert_eq!(report.final_query, "(cat)");
        assert_eq!(*oracle.calls.borrow(), vec!["(cat)", "(cat)"]);
    }

    #[test]
    fn test_only_first_occurrence_is_removed() {
        let oracle = ScriptedOracle::new(|_| Ok(7));
        let keywords = [kw("x", Some(Position::Before))];

        let report = optimize(&oracle, "(a) OR (x) OR (x)", &keywords).unwrap();
        assert_eq!(report.final_query, "(a) OR (x)");
        assert_eq!(report.excluded_terms, vec!["x"]);
    }

    #[test]
    fn test_baseline_failure_is_fatal() {
        let oracle = ScriptedOracle::new(|_| Err(OracleError::MissingCount("down")));
        let err = optimize(&oracle, "(cat)", &[]).unwrap_err();
        assert!(err.to_string().contains("baseline"));
        assert!(err.to_string().contains("(cat)"));
    }

    #[test]
    fn test_candidate_failure_is_fatal_and_attributed() {
        // The first measurement succeeds, the candidate one fails; the
        // error must name the candidate query being measured.
        let oracle = ScriptedOracle::new(|q| {
            if q.contains("cat") {
                Ok(100)
            } else {
                Err(OracleError::MissingCount("flaky page"))
            }
        });
        let keywords = [kw("cat", Some(Position::After))];

        let err = optimize(&oracle, "(cat) OR (feline)", &keywords).unwrap_err();
        assert!(err.to_string().contains("candidate"));
        assert!(err.to_string().contains("(feline)"));
    }
}
