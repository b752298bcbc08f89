use super::tokenizer::tokenize;
use crate::catalog::types::Tour;
use std::collections::HashSet;

/// A tour paired with the token set derived from its searchable fields.
/// Built once per index rebuild, never mutated, discarded wholesale.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub tour: Tour,
    pub tokens: HashSet<String>,
}

/// Joins the searchable projection of a tour into one haystack string.
///
/// The projection is fixed: title, slug, destination name and country, place
/// and state names/titles/slugs, coach display names, tags, categories.
/// Description text is excluded; prose matches almost any common word and
/// floods the results with false positives.
pub fn haystack(tour: &Tour) -> String {
    let mut parts: Vec<&str> = Vec::new();

    parts.push(&tour.title);
    parts.push(&tour.slug);
    if let Some(destination) = &tour.destination {
        parts.push(&destination.name);
        parts.push(&destination.country);
    }
    for place in tour.places.iter().chain(tour.states.iter()) {
        parts.push(&place.name);
        parts.push(&place.title);
        parts.push(&place.slug);
    }
    for coach in &tour.coaches {
        parts.push(&coach.display_name);
    }
    for tag in &tour.tags {
        parts.push(tag);
    }
    for category in &tour.categories {
        parts.push(category);
    }

    parts.retain(|part| !part.is_empty());
    parts.join(" ")
}

/// Maps each tour to an `IndexEntry`, preserving input order.
pub fn build_index(tours: Vec<Tour>) -> Vec<IndexEntry> {
    tours
        .into_iter()
        .map(|tour| {
            let tokens = tokenize(&haystack(&tour)).into_iter().collect();
            IndexEntry { tour, tokens }
        })
        .collect()
}
