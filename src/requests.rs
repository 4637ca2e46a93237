use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response};

use crate::listing::Listing;
use crate::ratelimit::Throttle;
use crate::scrape::PageSource;

pub struct RequestClient {
    client: Client,
    throttle: Throttle,
    listing: Listing,
}

impl RequestClient {
    pub fn new(listing: Listing) -> anyhow::Result<Self> {
        let client = ClientBuilder::new().build()?;
        let throttle = Throttle::new();
        Ok(Self {
            client,
            throttle,
            listing,
        })
    }

    pub async fn fetch_url_response(&self, url: &str) -> anyhow::Result<Response> {
        // Wait (non-blocking) until we're allowed to make a request according
        // to our self-imposed rate-limiting policy.
        self.throttle.wait_until_ready().await;

        let response = self.client.get(url).send().await?;
        Ok(response)
    }

    pub async fn fetch_url_body(&self, url: &str) -> anyhow::Result<String> {
        let response = self.fetch_url_response(url).await?;
        let body = response.text().await?;
        Ok(body)
    }
}

#[async_trait]
impl PageSource for RequestClient {
    async fn fetch_page(&self, page: u32) -> anyhow::Result<String> {
        self.fetch_url_body(&self.listing.page_url(page)).await
    }
}
