use anyhow::Result;

use groovescout_search::SearchService;

use crate::commands::load_store;
use crate::config::Config;

pub async fn run(config: &Config, id: i64) -> Result<()> {
    let store = load_store(&config.catalog_path)?;
    let service = SearchService::new(store);

    match service.get_by_id(id).await {
        Ok(release) => {
            println!("{} - {}", release.title, release.artist);
            println!("  id:        {}", release.id);
            match release.price {
                Some(price) => println!("  price:     {:.2} {}", price, release.currency),
                None => println!("  price:     unknown"),
            }
            if let Some(genre) = &release.genre {
                println!("  genre:     {genre}");
            }
            if let Some(year) = release.release_year {
                println!("  year:      {year}");
            }
            if let Some(label) = &release.record_label {
                println!("  label:     {label}");
            }
            if let Some(format) = &release.format {
                println!("  format:    {format}");
            }
            println!("  available: {}", release.is_available);
            println!("  for sale:  {}", release.quantity);
            match &release.external_url {
                Some(url) => println!("  link:      {url}"),
                None => println!("  link:      (no listing available)"),
            }
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            println!("Release {id} not found (or has no discogs listing)");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
