//! Result-count oracle: the external search service the optimizer measures
//! queries against.

pub mod pubmed;

pub use pubmed::PubmedOracle;

/// Failure while measuring a result count.
#[derive(Debug)]
pub enum OracleError {
    Http(reqwest::Error),
    Status(reqwest::StatusCode),
    /// The response rendered but no result count could be located in it
    MissingCount(&'static str),
}

impl From<reqwest::Error> for OracleError {
    fn from(e: reqwest::Error) -> Self {
        OracleError::Http(e)
    }
}

impl std::fmt::Display for OracleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OracleError::Http(e) => write!(f, "HttpError: {e}"),
            OracleError::Status(code) => write!(f, "UnexpectedStatus: {code}"),
            OracleError::MissingCount(e) => write!(f, "MissingCount: {e}"),
        }
    }
}

impl std::error::Error for OracleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OracleError::Http(e) => Some(e),
            _ => None,
        }
    }
}

/// A service that reports how many results a query matches.
///
/// One logical call per query: any retry or backoff against the live
/// service belongs to the implementation, not the caller. Calls block, and
/// the optimizer never issues two concurrently.
pub trait ResultCountOracle {
    fn count(&self, query: &str) -> Result<u64, OracleError>;
}
