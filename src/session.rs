use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;

use headless_chrome::{Browser, LaunchOptions, Tab};
use log::{debug, info};

use crate::config::CrawlConfig;
use crate::crawler::PageFetcher;
use crate::error::CrawlError;

/// Single bound shared by every element wait in the run.
pub const WAIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fixed pause after submitting the login form, letting the redirect and
/// re-render finish before the first list page is fetched.
const SETTLE_DELAY: Duration = Duration::from_secs(3);

const EMAIL_INPUT: &str = "input[name='email']";
const PASSWORD_INPUT: &str = "input[name='password']";
const SUBMIT_BUTTON: &str = "button[type='submit']";

/// One logged-in headless browser. The handle is exclusive for the run and
/// the browser process is torn down when this is dropped, on every exit
/// path.
pub struct AuthenticatedSession {
    #[allow(dead_code)] // owns the browser process backing `tab`
    browser: Browser,
    tab: Arc<Tab>,
}

impl AuthenticatedSession {
    /// Launches the browser and performs the login sequence. A login
    /// element that never appears within [`WAIT_TIMEOUT`] is fatal.
    pub fn open(config: &CrawlConfig) -> anyhow::Result<Self> {
        let browser = Browser::new(LaunchOptions {
            headless: true,
            sandbox: false,
            args: vec![OsStr::new("--disable-gpu")],
            ..Default::default()
        })?;
        let tab = browser.new_tab()?;

        let session = Self { browser, tab };
        session.login(config)?;
        Ok(session)
    }

    fn login(&self, config: &CrawlConfig) -> anyhow::Result<()> {
        info!("Logging in at {}", config.login_url);
        self.tab.navigate_to(&config.login_url)?;

        self.tab
            .wait_for_element_with_custom_timeout(EMAIL_INPUT, WAIT_TIMEOUT)
            .map_err(|_| CrawlError::element_not_found(EMAIL_INPUT, &config.login_url))?
            .type_into(&config.username)?;

        self.tab
            .find_element(PASSWORD_INPUT)
            .map_err(|_| CrawlError::element_not_found(PASSWORD_INPUT, &config.login_url))?
            .type_into(&config.password)?;

        self.tab
            .wait_for_element_with_custom_timeout(SUBMIT_BUTTON, WAIT_TIMEOUT)
            .map_err(|_| CrawlError::element_not_found(SUBMIT_BUTTON, &config.login_url))?
            .click()?;

        std::thread::sleep(SETTLE_DELAY);
        debug!("Login sequence completed");
        Ok(())
    }
}

impl PageFetcher for AuthenticatedSession {
    fn fetch(&mut self, url: &str, wait_for: Option<&str>) -> anyhow::Result<String> {
        debug!("Navigating to {url}");
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;

        if let Some(selector) = wait_for {
            self.tab
                .wait_for_element_with_custom_timeout(selector, WAIT_TIMEOUT)
                .map_err(|_| CrawlError::element_not_found(selector, url))?;
        }

        Ok(self.tab.get_content()?)
    }
}
