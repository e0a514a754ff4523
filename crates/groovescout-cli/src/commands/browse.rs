use anyhow::Result;

use groovescout_search::SearchService;

use crate::commands::{load_store, print_release};
use crate::config::Config;

pub async fn run(config: &Config, genre: Option<&str>, limit: usize) -> Result<()> {
    let store = load_store(&config.catalog_path)?;
    let service = SearchService::new(store);

    let results = service.browse(limit, genre).await?;

    if results.is_empty() {
        match genre {
            Some(g) => println!("No releases in genre \"{g}\""),
            None => println!("Catalog is empty"),
        }
        return Ok(());
    }

    for release in &results {
        print_release(release);
    }

    Ok(())
}
