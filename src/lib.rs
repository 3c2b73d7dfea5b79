pub mod config;
pub mod crawler;
pub mod detail_page;
pub mod error;
pub mod list_page;
pub mod matcher;
pub mod models;
pub mod session;
pub mod writer;

pub use config::CrawlConfig;
pub use crawler::{PageFetcher, VacancyCrawler};
pub use error::CrawlError;
pub use models::Vacancy;
pub use session::AuthenticatedSession;
pub use writer::save_to_csv;
