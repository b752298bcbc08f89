//! Paged corpus fetch.

use super::client::TourSource;
use super::types::Tour;
use anyhow::Result;
use futures::future::try_join_all;

pub const PAGE_SIZE: usize = 200;
pub const FETCH_CONCURRENCY: usize = 3;

/// Fetches the complete tour corpus by paging through the catalog endpoint.
///
/// Each round issues `FETCH_CONCURRENCY` page requests in parallel at evenly
/// spaced offsets and appends every returned page. A page shorter than
/// `PAGE_SIZE` is the upstream's end-of-corpus signal: the round it appears in
/// is still drained in full, then the loop stops. Any page failure aborts the
/// whole fetch with the first error.
pub async fn fetch_all_tours<S: TourSource>(source: &S) -> Result<Vec<Tour>> {
    let mut tours = Vec::new();
    let mut cursor = 0usize;

    loop {
        let batch = (0..FETCH_CONCURRENCY)
            .map(|slot| source.fetch_page(cursor + slot * PAGE_SIZE, PAGE_SIZE));
        let pages = try_join_all(batch).await?;

        let exhausted = pages.iter().any(|page| page.len() < PAGE_SIZE);
        for page in pages {
            tours.extend(page);
        }

        if exhausted {
            tracing::debug!("Catalog fetch complete: {} tours", tours.len());
            return Ok(tours);
        }

        cursor += FETCH_CONCURRENCY * PAGE_SIZE;
    }
}
