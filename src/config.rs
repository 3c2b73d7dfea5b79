use std::collections::HashSet;
use std::env;

use anyhow::Context;

/// Vocabulary used when the TECHNOLOGIES env var is not set. Matching is
/// whole-token and case-sensitive, so entries are spelled the way they
/// appear in posting text.
const DEFAULT_TECHNOLOGIES: &[&str] = &[
    "Python",
    "Django",
    "Flask",
    "FastAPI",
    "Celery",
    "Docker",
    "Kubernetes",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "AWS",
    "Git",
    "Linux",
    "SQL",
    "JavaScript",
    "React",
];

/// Everything one crawl run needs, resolved up front. The crawler never
/// reads the environment after this is built.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub base_url: String,
    pub job_url: String,
    pub login_url: String,
    pub technologies: HashSet<String>,
    pub username: String,
    pub password: String,
}

impl CrawlConfig {
    /// Loads the config from the environment. `.env` is honoured if present
    /// but not required.
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenv::dotenv();

        let base_url = required_var("BASE_URL")?;
        let job_url = required_var("JOB_URL")?;
        let login_url = required_var("LOGIN_URL")?;
        let username = required_var("EMAIL")?;
        let password = required_var("PASSWORD")?;

        let technologies = match env::var("TECHNOLOGIES") {
            Ok(raw) => raw
                .split(',')
                .map(|tech| tech.trim().to_string())
                .filter(|tech| !tech.is_empty())
                .collect(),
            Err(_) => DEFAULT_TECHNOLOGIES
                .iter()
                .map(|tech| tech.to_string())
                .collect(),
        };

        Ok(Self {
            base_url,
            job_url,
            login_url,
            technologies,
            username,
            password,
        })
    }
}

fn required_var(name: &str) -> anyhow::Result<String> {
    env::var(name).with_context(|| format!("missing required env var {name}"))
}
