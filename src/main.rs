use std::path::Path;

use log::{error, info, LevelFilter};

use vacancy_crawler::{save_to_csv, AuthenticatedSession, CrawlConfig, VacancyCrawler};

const OUTPUT_DIR: &str = "scraped_data";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = CrawlConfig::from_env()?;

    let mut session = AuthenticatedSession::open(&config)?;
    let vacancies = VacancyCrawler::new(config).crawl(&mut session)?;
    drop(session);

    match save_to_csv(&vacancies, Path::new(OUTPUT_DIR)) {
        Ok(path) => info!("Wrote {} vacancies to {}", vacancies.len(), path.display()),
        // Write failure is reported but does not fail the run; the data
        // is not persisted anywhere else.
        Err(e) => error!("Failed to write CSV: {e:#}"),
    }

    Ok(())
}
