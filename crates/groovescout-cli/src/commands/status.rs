use anyhow::Result;

use crate::commands::load_store;
use crate::config::Config;

pub fn run(config: &Config) -> Result<()> {
    let store = load_store(&config.catalog_path)?;

    println!("catalog:       {}", config.catalog_path.display());
    println!("releases:      {}", store.catalog_len());
    println!("user listings: {}", store.user_listing_len());

    Ok(())
}
