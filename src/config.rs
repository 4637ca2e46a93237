use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

use crate::listing::Listing;

const DEFAULT_DATABASE_PATH: &str = "statsguru.db";

/// The env vars needed for scraping. All optional; the defaults reproduce
/// the standard setup (match results into statsguru.db).
#[derive(Debug, Deserialize)]
pub struct ScrapeEnv {
    listing: Option<String>,
    database_path: Option<String>,
}

pub struct ScrapeConfig {
    listing: Listing,
    database_path: String,
}

impl ScrapeConfig {
    pub fn new() -> anyhow::Result<Self> {
        let scrape_env = ScrapeEnv::load_from_env()?;
        let listing = match scrape_env.listing {
            Some(raw) => raw
                .parse::<Listing>()
                .context("failed to parse LISTING env variable")?,
            None => Listing::MatchResults,
        };
        let database_path = scrape_env
            .database_path
            .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());
        Ok(Self {
            listing,
            database_path,
        })
    }

    pub fn listing(&self) -> Listing {
        self.listing
    }

    pub fn database_path(&self) -> &str {
        &self.database_path
    }
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config =
            envy::from_env::<Self>().context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}
