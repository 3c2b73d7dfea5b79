use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;

use crate::models::Vacancy;

/// Writes the run's vacancies to `<dir>/<YYYY-MM-DD>.csv`, one row per
/// record under a `title, company_name, technologies` header, and returns
/// the path written. The directory is created if missing.
pub fn save_to_csv(vacancies: &[Vacancy], dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;

    let file_path = dir.join(format!("{}.csv", Local::now().format("%Y-%m-%d")));
    let file = File::create(&file_path)
        .with_context(|| format!("creating {}", file_path.display()))?;
    let mut writer = csv::Writer::from_writer(file);

    for vacancy in vacancies {
        writer.serialize(vacancy)?;
    }

    writer.flush()?;
    Ok(file_path)
}
