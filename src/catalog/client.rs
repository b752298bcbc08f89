//! CMS page client.
//!
//! `TourSource` is the seam between the fetch loop and the network: the
//! production implementation talks GraphQL over HTTP, tests substitute
//! in-memory sources.

use super::types::{GraphqlRequest, GraphqlResponse, Tour, TourPageVariables};
use anyhow::Result;
use std::future::Future;

const TOURS_QUERY: &str = "\
query Tours($locale: String!, $limit: Int!, $start: Int!) {
  tours(locale: $locale, limit: $limit, start: $start) {
    id
    title
    slug
    description
    destination { name country }
    places { name title slug }
    states { name title slug }
    coaches { displayName }
    tags
    categories
  }
}";

/// One page of up to `limit` tours starting at offset `start`.
pub trait TourSource: Send + Sync {
    fn fetch_page(
        &self,
        start: usize,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Tour>>> + Send;
}

pub struct GraphqlCatalogClient {
    http_client: reqwest::Client,
    endpoint: String,
    locale: String,
}

impl GraphqlCatalogClient {
    pub fn new(endpoint: String, locale: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint,
            locale,
        }
    }
}

impl TourSource for GraphqlCatalogClient {
    async fn fetch_page(&self, start: usize, limit: usize) -> Result<Vec<Tour>> {
        let payload = GraphqlRequest {
            query: TOURS_QUERY,
            variables: TourPageVariables {
                locale: self.locale.clone(),
                limit,
                start,
            },
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Catalog request failed: {}",
                response.status()
            ));
        }

        let body: GraphqlResponse = response.json().await?;

        if let Some(error) = body.errors.first() {
            return Err(anyhow::anyhow!("Catalog query rejected: {}", error.message));
        }

        let data = body
            .data
            .ok_or_else(|| anyhow::anyhow!("Catalog response missing data"))?;

        Ok(data.tours)
    }
}
