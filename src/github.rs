use std::io::Read;

use rand::Rng;
use serde::Deserialize;

use crate::error::Result;

const SEARCH_URL: &str = "https://api.github.com/search/code";
const SEARCH_QUERY: &str = "example+language:awk";
const USER_AGENT: &str = concat!("awk-corpus/", env!("CARGO_PKG_VERSION"));

/// One file descriptor returned by the code-search endpoint
///
/// Unknown response fields are ignored; only the name and the canonical web
/// location are needed downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub name: String,
    pub html_url: String,
}

impl SearchItem {
    /// Check if the result names an AWK source file (case-sensitive suffix)
    pub fn is_awk(&self) -> bool {
        self.name.ends_with(".awk")
    }

    /// The URL serving this file's raw content
    pub fn raw_url(&self) -> String {
        format!("{}?raw=true", self.html_url)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResults {
    items: Vec<SearchItem>,
}

/// GitHub code-search client
///
/// Owns the HTTP agent and the access token for one run; page and page size
/// are per-request parameters.
pub struct Client {
    agent: ureq::Agent,
    token: String,
}

impl Client {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            agent: ureq::agent(),
            token: token.into(),
        }
    }

    /// Search one result page of candidate AWK files
    pub fn search(&self, page: u32, per_page: u32) -> Result<Vec<SearchItem>> {
        let url = format!("{SEARCH_URL}?q={SEARCH_QUERY}&per_page={per_page}&page={page}");
        log::debug!("GET {url}");
        let body = self.get(&url)?.into_string()?;
        let results: SearchResults = serde_json::from_str(&body)?;
        Ok(results.items)
    }

    /// Download the raw content of one search result
    ///
    /// The body must be valid UTF-8; anything else fails the run rather
    /// than producing a corrupt fixture.
    pub fn fetch_raw(&self, item: &SearchItem) -> Result<String> {
        let url = item.raw_url();
        log::debug!("GET {url}");
        let mut body = Vec::new();
        self.get(&url)?.into_reader().read_to_end(&mut body)?;
        Ok(String::from_utf8(body)?)
    }

    fn get(&self, url: &str) -> Result<ureq::Response> {
        Ok(self
            .agent
            .get(url)
            .set("Authorization", &format!("token {}", self.token))
            .set("User-Agent", USER_AGENT)
            .call()?)
    }
}

/// Picks the result page for this run, uniformly from `1..=bound`
///
/// The randomness source is injected so callers control determinism; a
/// bound below 1 is treated as 1.
pub fn pick_page<R: Rng>(rng: &mut R, bound: u32) -> u32 {
    rng.gen_range(1..=bound.max(1))
}
