use super::index::IndexEntry;
use crate::catalog::types::Tour;

pub const DEFAULT_LIMIT: usize = 6;
pub const MAX_LIMIT: usize = 50;

#[derive(Debug)]
pub struct QueryOutcome {
    pub tours: Vec<Tour>,
    pub has_more: bool,
    pub total: usize,
}

/// Missing or unparseable values fall back to the default; out-of-range
/// values are clamped, never rejected.
pub fn parse_limit(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_LIMIT as i64)
        .clamp(1, MAX_LIMIT as i64) as usize
}

pub fn parse_offset(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(0)
        .max(0) as usize
}

/// Scans the index for entries whose token set contains any of the expansion
/// terms. Matching is exact token equality, never substring containment, so a
/// term that is not a single token cannot match. Index order is preserved
/// through pagination.
pub fn run_query(
    entries: &[IndexEntry],
    terms: &[String],
    limit: usize,
    offset: usize,
) -> QueryOutcome {
    let matches: Vec<&IndexEntry> = entries
        .iter()
        .filter(|entry| terms.iter().any(|term| entry.tokens.contains(term)))
        .collect();

    let total = matches.len();
    let tours: Vec<Tour> = matches
        .into_iter()
        .skip(offset)
        .take(limit)
        .map(|entry| entry.tour.clone())
        .collect();
    let has_more = offset + tours.len() < total;

    QueryOutcome {
        tours,
        has_more,
        total,
    }
}
