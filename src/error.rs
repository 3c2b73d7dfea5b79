use thiserror::Error;

/// Fatal crawl conditions. Anything here aborts the run; degraded cases
/// (missing detail fields) never surface as errors.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// An element the crawl cannot proceed without never appeared within
    /// the wait bound (login inputs, submit button, list-item marker).
    #[error("element `{selector}` not found on {url} within the wait bound")]
    ElementNotFound { selector: String, url: String },
}

impl CrawlError {
    pub fn element_not_found(selector: &str, url: &str) -> Self {
        Self::ElementNotFound {
            selector: selector.to_string(),
            url: url.to_string(),
        }
    }
}
