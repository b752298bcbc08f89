//! Catalog Module Tests
//!
//! Validates the paged fetch loop and the GraphQL wire types.
//!
//! ## Test Scopes
//! - **Fetch loop**: Batch concurrency, short-page stop condition, error propagation.
//! - **Wire types**: Deserialization of the GraphQL envelope and tour records.

#[cfg(test)]
mod tests {
    use crate::catalog::client::TourSource;
    use crate::catalog::fetcher::{FETCH_CONCURRENCY, PAGE_SIZE, fetch_all_tours};
    use crate::catalog::types::{GraphqlResponse, Tour};
    use anyhow::Result;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn make_tour(title: &str) -> Tour {
        Tour {
            title: title.to_string(),
            ..Tour::default()
        }
    }

    /// Serves a corpus of `corpus_size` synthetic tours, slicing pages the way
    /// the CMS does, and counts every page request.
    struct FixedCorpusSource {
        corpus_size: usize,
        page_calls: AtomicUsize,
    }

    impl FixedCorpusSource {
        fn new(corpus_size: usize) -> Self {
            Self {
                corpus_size,
                page_calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.page_calls.load(Ordering::SeqCst)
        }
    }

    impl TourSource for FixedCorpusSource {
        async fn fetch_page(&self, start: usize, limit: usize) -> Result<Vec<Tour>> {
            self.page_calls.fetch_add(1, Ordering::SeqCst);
            let end = (start + limit).min(self.corpus_size);
            let len = end.saturating_sub(start);
            Ok((0..len)
                .map(|i| make_tour(&format!("Tour {}", start + i)))
                .collect())
        }
    }

    struct FailingSource;

    impl TourSource for FailingSource {
        async fn fetch_page(&self, _start: usize, _limit: usize) -> Result<Vec<Tour>> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    // ============================================================
    // FETCH LOOP - short-page stop condition
    // ============================================================

    #[tokio::test]
    async fn test_fetch_small_corpus_single_batch() {
        // ARRANGE: Corpus fits in the first page
        let source = FixedCorpusSource::new(50);

        // ACT
        let tours = fetch_all_tours(&source).await.unwrap();

        // ASSERT: One batch of concurrent page requests, all items kept
        assert_eq!(tours.len(), 50);
        assert_eq!(source.calls(), FETCH_CONCURRENCY);
    }

    #[tokio::test]
    async fn test_fetch_empty_corpus() {
        let source = FixedCorpusSource::new(0);

        let tours = fetch_all_tours(&source).await.unwrap();

        assert!(tours.is_empty());
        assert_eq!(source.calls(), FETCH_CONCURRENCY);
    }

    #[tokio::test]
    async fn test_fetch_keeps_all_pages_of_final_batch() {
        // ARRANGE: 450 items: pages at 0 and 200 are full, the page at 400 is
        // short, so the first batch is also the last
        let source = FixedCorpusSource::new(450);

        // ACT
        let tours = fetch_all_tours(&source).await.unwrap();

        // ASSERT: Nothing from the stopping batch is discarded
        assert_eq!(tours.len(), 450);
        assert_eq!(source.calls(), FETCH_CONCURRENCY);
    }

    #[tokio::test]
    async fn test_fetch_continues_past_full_batch() {
        // ARRANGE: 700 items need two batches (600 per batch)
        let source = FixedCorpusSource::new(700);

        // ACT
        let tours = fetch_all_tours(&source).await.unwrap();

        // ASSERT
        assert_eq!(tours.len(), 700);
        assert_eq!(source.calls(), FETCH_CONCURRENCY * 2);
    }

    #[tokio::test]
    async fn test_fetch_exact_batch_boundary_needs_one_more_round() {
        // ARRANGE: Exactly one full batch of items; only the empty pages of
        // the second round reveal the corpus is exhausted
        let source = FixedCorpusSource::new(FETCH_CONCURRENCY * PAGE_SIZE);

        // ACT
        let tours = fetch_all_tours(&source).await.unwrap();

        // ASSERT
        assert_eq!(tours.len(), FETCH_CONCURRENCY * PAGE_SIZE);
        assert_eq!(source.calls(), FETCH_CONCURRENCY * 2);
    }

    #[tokio::test]
    async fn test_fetch_preserves_batch_order() {
        let source = FixedCorpusSource::new(450);

        let tours = fetch_all_tours(&source).await.unwrap();

        // Pages are appended at their offset positions within the batch
        assert_eq!(tours[0].title, "Tour 0");
        assert_eq!(tours[200].title, "Tour 200");
        assert_eq!(tours[400].title, "Tour 400");
        assert_eq!(tours[449].title, "Tour 449");
    }

    // ============================================================
    // FETCH LOOP - error propagation
    // ============================================================

    #[tokio::test]
    async fn test_fetch_error_aborts_whole_fetch() {
        // ARRANGE
        let source = FailingSource;

        // ACT
        let result = fetch_all_tours(&source).await;

        // ASSERT: No partial result, the upstream error surfaces as-is
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("connection refused")
        );
    }

    // ============================================================
    // WIRE TYPES - GraphQL envelope
    // ============================================================

    #[test]
    fn test_graphql_response_deserialization() {
        let raw = r#"{
            "data": {
                "tours": [
                    {
                        "id": "t-1",
                        "title": "Aurora Boreale in Islanda",
                        "slug": "aurora-boreale-islanda",
                        "description": "Un viaggio fotografico.",
                        "destination": { "name": "Islanda", "country": "Iceland" },
                        "places": [{ "name": "Vik", "title": "", "slug": "vik" }],
                        "states": [],
                        "coaches": [{ "displayName": "Luca Rossi" }],
                        "tags": ["aurora", "inverno"],
                        "categories": ["viaggi"]
                    }
                ]
            }
        }"#;

        let response: GraphqlResponse = serde_json::from_str(raw).expect("Deserialization failed");

        assert!(response.errors.is_empty());
        let tours = response.data.expect("data missing").tours;
        assert_eq!(tours.len(), 1);
        assert_eq!(tours[0].title, "Aurora Boreale in Islanda");
        assert_eq!(tours[0].coaches[0].display_name, "Luca Rossi");
        assert_eq!(tours[0].destination.as_ref().unwrap().country, "Iceland");
    }

    #[test]
    fn test_graphql_response_with_errors() {
        let raw = r#"{ "data": null, "errors": [{ "message": "locale unknown" }] }"#;

        let response: GraphqlResponse = serde_json::from_str(raw).unwrap();

        assert!(response.data.is_none());
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "locale unknown");
    }

    #[test]
    fn test_tour_tolerates_missing_fields() {
        // A bare record still deserializes; absent fields become empty
        let raw = r#"{ "title": "Minimal" }"#;

        let tour: Tour = serde_json::from_str(raw).unwrap();

        assert_eq!(tour.title, "Minimal");
        assert!(tour.slug.is_empty());
        assert!(tour.destination.is_none());
        assert!(tour.places.is_empty());
        assert!(tour.tags.is_empty());
    }

    #[test]
    fn test_tour_serialization_round_trip() {
        let tour = make_tour("Dolomiti in Autunno");

        let json = serde_json::to_string(&tour).expect("Serialization failed");
        let restored: Tour = serde_json::from_str(&json).expect("Deserialization failed");

        assert_eq!(restored.title, "Dolomiti in Autunno");
    }
}
