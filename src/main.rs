use dotenv::dotenv;
use statsguru::{RequestClient, ScrapeConfig, Scraper, Store};

extern crate env_logger;
extern crate log;

use log::LevelFilter;

use log::info;

async fn run_scrape_job(config: &ScrapeConfig) -> anyhow::Result<u64> {
    let store = Store::connect(config.database_path()).await?;
    let client = RequestClient::new(config.listing())?;
    let scraper = Scraper::new(client, config.listing());
    let outcome = scraper.scrape_pages(&store).await;
    store.close().await;
    outcome
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();
    let config = ScrapeConfig::new()?;
    info!(
        "Scraping the {} listing into {}",
        config.listing(),
        config.database_path()
    );
    let total_rows = run_scrape_job(&config).await?;
    info!("Done, {total_rows} rows written");
    Ok(())
}
