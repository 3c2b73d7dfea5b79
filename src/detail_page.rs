use std::collections::HashSet;

use scraper::{Html, Selector};

use crate::matcher::{match_technologies, render_technologies};
use crate::models::Vacancy;

pub const NO_TITLE: &str = "No title found";
pub const NO_COMPANY_NAME: &str = "No company name found";

const TITLE_SELECTOR: &str = "h1";
const COMPANY_SELECTOR: &str = ".job-details--title";
const DESCRIPTION_SELECTOR: &str = ".mb-4.job-post-description";

/// Builds a Vacancy from rendered detail-page markup. Missing fields fall
/// back to sentinel values so one malformed page never aborts the crawl.
pub fn extract_vacancy(html: &str, vocabulary: &HashSet<String>) -> Vacancy {
    let document = Html::parse_document(html);

    let title = select_text(&document, TITLE_SELECTOR)
        .map(|text| first_line(&text))
        .unwrap_or_else(|| NO_TITLE.to_string());

    let company_name = select_text(&document, COMPANY_SELECTOR)
        .unwrap_or_else(|| NO_COMPANY_NAME.to_string());

    let description = select_text(&document, DESCRIPTION_SELECTOR).unwrap_or_default();
    let technologies = render_technologies(&match_technologies(&description, vocabulary));

    Vacancy::new(title, company_name, technologies)
}

fn select_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).expect("detail selector is valid");
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

// Headings on detail pages carry trailing badge lines; only the first
// line is the title proper.
fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or("").trim().to_string()
}
