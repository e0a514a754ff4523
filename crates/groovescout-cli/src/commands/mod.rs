pub mod browse;
pub mod search;
pub mod show;
pub mod status;

use std::path::Path;

use anyhow::{Context, Result};

use groovescout_core::model::CanonicalRelease;
use groovescout_core::store::MemoryStore;

/// Load the in-memory store from the configured catalog dump.
pub(crate) fn load_store(path: &Path) -> Result<MemoryStore> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog dump at {}", path.display()))?;
    MemoryStore::from_json(&json)
        .with_context(|| format!("Failed to parse catalog dump at {}", path.display()))
}

/// Print one reconciled release in the list format shared by the
/// search and browse commands.
pub(crate) fn print_release(release: &CanonicalRelease) {
    println!("[{}] {} - {}", release.id, release.title, release.artist);

    let mut details = Vec::new();
    if let Some(price) = release.price {
        details.push(format!("{:.2} {}", price, release.currency));
    }
    if let Some(genre) = &release.genre {
        details.push(genre.clone());
    }
    if let Some(year) = release.release_year {
        details.push(year.to_string());
    }
    if !details.is_empty() {
        println!("      {}", details.join(" · "));
    }

    match &release.external_url {
        Some(url) => println!("      {url}"),
        None => println!("      (no listing available)"),
    }
}
