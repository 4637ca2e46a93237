mod config;
mod listing;
mod page_parser;
mod ratelimit;
mod requests;
mod scrape;
mod store;
mod text_manipulators;

pub use config::ScrapeConfig;
pub use listing::Listing;
pub use page_parser::{NO_RECORDS_SENTINEL, PageParser, ParsedPage};
pub use ratelimit::Throttle;
pub use requests::RequestClient;
pub use scrape::{PageSource, Scraper};
pub use store::Store;
