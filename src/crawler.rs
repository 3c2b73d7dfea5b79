use std::collections::HashSet;

use log::{info, warn};

use crate::config::CrawlConfig;
use crate::detail_page::extract_vacancy;
use crate::list_page::{parse_list_page, LIST_ITEM_SELECTOR};
use crate::models::Vacancy;

/// Returns rendered markup for a URL, optionally blocking until `wait_for`
/// matches something on the page. [`crate::AuthenticatedSession`] is the
/// live implementation; tests drive the crawl from fixture markup.
pub trait PageFetcher {
    fn fetch(&mut self, url: &str, wait_for: Option<&str>) -> anyhow::Result<String>;
}

/// Walks the paginated listing and accumulates one Vacancy per detail page
/// visited, in listing order.
pub struct VacancyCrawler {
    config: CrawlConfig,
}

impl VacancyCrawler {
    pub fn new(config: CrawlConfig) -> Self {
        Self { config }
    }

    /// Crawls from the configured entry listing until the pagination
    /// control offers no next page, or offers a page already visited.
    ///
    /// A list page whose item marker never appears is fatal. A detail page
    /// that fails to fetch is logged and skipped; its record is dropped.
    pub fn crawl(&self, fetcher: &mut impl PageFetcher) -> anyhow::Result<Vec<Vacancy>> {
        let mut vacancies = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut next_url = Some(self.config.job_url.clone());

        while let Some(url) = next_url {
            if !visited.insert(url.clone()) {
                warn!("Pagination loops back to already-visited {url}, stopping crawl");
                break;
            }

            info!("Fetching list page {url}");
            let html = fetcher.fetch(&url, Some(LIST_ITEM_SELECTOR))?;
            let page = parse_list_page(&html, &self.config.base_url);
            info!("Found {} postings on {url}", page.detail_urls.len());

            for detail_url in &page.detail_urls {
                match fetcher.fetch(detail_url, None) {
                    Ok(detail_html) => {
                        vacancies.push(extract_vacancy(&detail_html, &self.config.technologies));
                    }
                    Err(e) => {
                        warn!("Skipping detail page {detail_url}: {e:#}");
                    }
                }
            }

            next_url = page.next_page_url;
        }

        info!("Crawl finished with {} vacancies", vacancies.len());
        Ok(vacancies)
    }
}
