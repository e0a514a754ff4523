use anyhow::Result;

use groovescout_search::SearchService;

use crate::commands::{load_store, print_release};
use crate::config::Config;

pub async fn run(config: &Config, query: &str, limit: usize) -> Result<()> {
    let store = load_store(&config.catalog_path)?;
    let service = SearchService::new(store);

    let results = service.search(query, limit).await?;

    if results.is_empty() {
        println!("No results for \"{query}\"");
        return Ok(());
    }

    println!("{} result(s) for \"{query}\"\n", results.len());
    for release in &results {
        print_release(release);
    }

    Ok(())
}
