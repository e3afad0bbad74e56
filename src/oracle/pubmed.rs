use std::thread;
use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use scraper::{Html, Selector};

use super::{OracleError, ResultCountOracle};

const PUBMED_URL: &str = "https://pubmed.ncbi.nlm.nih.gov/";
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Result-count oracle backed by the PubMed search results page.
///
/// Issues a blocking GET with the query as the `term` parameter and scrapes
/// the result count out of the returned HTML. Transport failures are retried
/// a configurable number of times with a short fixed delay; the caller sees
/// one logical measurement per query.
pub struct PubmedOracle {
    client: Client,
    base_url: String,
    retries: u32,
}

impl PubmedOracle {
    pub fn new(timeout: Duration, retries: u32) -> Result<Self, OracleError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("qtrim/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: PUBMED_URL.to_string(),
            retries,
        })
    }

    /// Point the oracle at a different results endpoint (tests, mirrors).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    fn fetch_page(&self, query: &str) -> Result<String, OracleError> {
        let rep = self
            .client
            .get(&self.base_url)
            .query(&[("term", query)])
            .send()?;
        let status = rep.status();
        if !status.is_success() {
            return Err(OracleError::Status(status));
        }
        Ok(rep.text()?)
    }
}

impl ResultCountOracle for PubmedOracle {
    fn count(&self, query: &str) -> Result<u64, OracleError> {
        debug!("measuring result count for {query:?}");
        let mut attempt = 0;
        let html = loop {
            match self.fetch_page(query) {
                Ok(html) => break html,
                Err(e) if attempt < self.retries => {
                    attempt += 1;
                    warn!("oracle request failed ({e}), retry {attempt}/{}", self.retries);
                    thread::sleep(RETRY_DELAY);
                }
                Err(e) => return Err(e),
            }
        };
        let count = parse_result_count(&html)?;
        debug!("result count: {count}");
        Ok(count)
    }
}

/// Locate the result count in a PubMed results page.
///
/// The list page carries it in `div.results-amount span.value` (with comma
/// separators). A query matching exactly one article renders the article
/// page instead, which only exposes the count through the
/// `log_resultcount` meta tag, and a query matching nothing renders an
/// empty-results banner with no amount element at all.
fn parse_result_count(html: &str) -> Result<u64, OracleError> {
    let document = Html::parse_document(html);

    let amount_selector = Selector::parse("div.results-amount span.value").unwrap();
    if let Some(el) = document.select(&amount_selector).next() {
        let text = el.text().collect::<String>();
        let digits = text.trim().replace(',', "");
        return digits
            .parse()
            .map_err(|_| OracleError::MissingCount("results-amount value is not a number"));
    }

    let meta_selector = Selector::parse("meta[name=log_resultcount]").unwrap();
    if let Some(el) = document.select(&meta_selector).next() {
        if let Some(content) = el.value().attr("content") {
            return content
                .trim()
                .parse()
                .map_err(|_| OracleError::MissingCount("log_resultcount is not a number"));
        }
    }

    let empty_selector = Selector::parse("em.altered-search-explanation, section.no-results").unwrap();
    if document.select(&empty_selector).next().is_some() {
        return Ok(0);
    }

    Err(OracleError::MissingCount("no result count in response"))
}
