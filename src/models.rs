use serde::Serialize;

/// One extracted job posting. Field order matches the CSV column order:
/// `title, company_name, technologies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vacancy {
    pub title: String,
    pub company_name: String,
    pub technologies: String,
}

impl Vacancy {
    pub fn new(title: String, company_name: String, technologies: String) -> Self {
        Self {
            title,
            company_name,
            technologies,
        }
    }
}
