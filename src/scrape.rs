use async_trait::async_trait;
use log::info;

use crate::listing::Listing;
use crate::page_parser::PageParser;
use crate::store::Store;

/// Anything that can turn a 1-based page index into page markup. The real
/// implementation is the throttled HTTP client; tests feed canned pages.
#[async_trait]
pub trait PageSource {
    async fn fetch_page(&self, page: u32) -> anyhow::Result<String>;
}

pub struct Scraper<S: PageSource> {
    source: S,
    parser: PageParser,
    listing: Listing,
}

impl<S: PageSource> Scraper<S> {
    pub fn new(source: S, listing: Listing) -> Self {
        Self {
            source,
            parser: PageParser::new(listing),
            listing,
        }
    }

    /// Loops through all the pages and writes their rows to the store.
    /// Pages are fetched one at a time, starting at 1, until a page reports
    /// no further records. Returns the number of rows written.
    pub async fn scrape_pages(&self, store: &Store) -> anyhow::Result<u64> {
        store.ensure_table(self.listing).await?;

        let mut page = 1;
        let mut total_rows: u64 = 0;
        loop {
            info!("Scraping page {page}");
            let html = self.source.fetch_page(page).await?;
            let parsed = self.parser.parse(&html)?;
            if !parsed.has_more {
                break;
            }
            for row in &parsed.rows {
                store.insert_row(self.listing, row).await?;
                total_rows += 1;
            }
            page += 1;
        }

        info!(
            "Finished scraping {} after {page} pages, {total_rows} rows written",
            self.listing
        );
        Ok(total_rows)
    }
}
