use scraper::{Html, Selector};

/// Structural marker for one posting on a list page. Also used by the
/// session as the fetch-time readiness marker.
pub const LIST_ITEM_SELECTOR: &str = ".list-jobs__item.job-list__item";

const DETAIL_LINK_SELECTOR: &str = "a.job-list-item__link";

// The link immediately after the active pagination item, skipped when the
// site marks it disabled on the last page.
const NEXT_PAGE_SELECTOR: &str = "ul.pagination.pagination_with_numbers \
     li.page-item.active + li.page-item:not(.disabled) a.page-link";

/// What one rendered list page yields: the detail links it shows, in
/// document order and without deduplication, plus the page after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage {
    pub detail_urls: Vec<String>,
    pub next_page_url: Option<String>,
}

pub fn parse_list_page(html: &str, base_url: &str) -> ListPage {
    let document = Html::parse_document(html);
    let item_selector = Selector::parse(LIST_ITEM_SELECTOR).expect("list item selector is valid");
    let link_selector = Selector::parse(DETAIL_LINK_SELECTOR).expect("detail link selector is valid");
    let next_selector = Selector::parse(NEXT_PAGE_SELECTOR).expect("next page selector is valid");

    let detail_urls = document
        .select(&item_selector)
        .filter_map(|item| item.select(&link_selector).next())
        .filter_map(|link| link.value().attr("href"))
        .map(|href| format!("{base_url}{href}"))
        .collect();

    let next_page_url = document
        .select(&next_selector)
        .next()
        .and_then(|link| link.value().attr("href"))
        .map(|href| format!("{base_url}/jobs/{href}"));

    ListPage {
        detail_urls,
        next_page_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://jobs.example.com";

    fn list_html(items: &str, pagination: &str) -> String {
        format!(
            "<html><body><ul>{items}</ul>\
             <ul class=\"pagination pagination_with_numbers\">{pagination}</ul>\
             </body></html>"
        )
    }

    fn item(href: &str) -> String {
        format!(
            "<li class=\"list-jobs__item job-list__item\">\
             <a class=\"job-list-item__link\" href=\"{href}\">job</a></li>"
        )
    }

    #[test]
    fn detail_urls_are_absolute_and_in_document_order() {
        let items = [item("/jobs/1"), item("/jobs/2"), item("/jobs/3")].join("");
        let page = parse_list_page(&list_html(&items, ""), BASE);
        assert_eq!(
            page.detail_urls,
            vec![
                format!("{BASE}/jobs/1"),
                format!("{BASE}/jobs/2"),
                format!("{BASE}/jobs/3"),
            ]
        );
    }

    #[test]
    fn repeated_listings_are_not_deduplicated() {
        let items = [item("/jobs/1"), item("/jobs/1")].join("");
        let page = parse_list_page(&list_html(&items, ""), BASE);
        assert_eq!(page.detail_urls.len(), 2);
    }

    #[test]
    fn items_without_a_link_are_skipped() {
        let items = format!(
            "{}<li class=\"list-jobs__item job-list__item\">no link</li>",
            item("/jobs/1")
        );
        let page = parse_list_page(&list_html(&items, ""), BASE);
        assert_eq!(page.detail_urls.len(), 1);
    }

    #[test]
    fn next_page_url_comes_from_the_sibling_after_the_active_item() {
        let pagination = "<li class=\"page-item active\"><a class=\"page-link\" href=\"?page=1\">1</a></li>\
             <li class=\"page-item\"><a class=\"page-link\" href=\"?page=2\">2</a></li>";
        let page = parse_list_page(&list_html("", pagination), BASE);
        assert_eq!(
            page.next_page_url,
            Some(format!("{BASE}/jobs/?page=2"))
        );
    }

    #[test]
    fn disabled_next_sibling_ends_pagination() {
        let pagination = "<li class=\"page-item active\"><a class=\"page-link\" href=\"?page=1\">1</a></li>\
             <li class=\"page-item disabled\"><a class=\"page-link\" href=\"?page=2\">2</a></li>";
        let page = parse_list_page(&list_html("", pagination), BASE);
        assert_eq!(page.next_page_url, None);
    }

    #[test]
    fn missing_pagination_ends_pagination() {
        let page = parse_list_page(&list_html(&item("/jobs/1"), ""), BASE);
        assert_eq!(page.next_page_url, None);
    }
}
