use super::Catalog;
use anyhow::Result;
use tracing::{info, warn};

pub fn load_catalog<P: AsRef<std::path::Path>>(path: P) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    let report = catalog.load_csv(path)?;

    if !report.problems.is_empty() {
        warn!("Skipped {} malformed rows:", report.problems.len());
        for problem in report.problems.iter() {
            warn!("- {:?}", problem);
        }
    }

    if report.problems.is_empty() {
        info!("Songs loaded, no issues found.");
    } else {
        info!(
            "Songs were loaded, but check the {} skipped rows above.",
            report.problems.len()
        );
    }
    info!(
        "Catalog has {} songs ({} rows inserted).",
        catalog.get_songs_count(),
        report.inserted
    );

    Ok(catalog)
}
