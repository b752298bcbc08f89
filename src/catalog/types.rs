//! Catalog Data Types
//!
//! Defines the tour record as returned by the CMS and the GraphQL wire envelope
//! used to fetch it. Tours are treated as opaque values by the rest of the
//! service: the search index extracts a fixed projection of text fields and the
//! HTTP layer returns the records to clients as they were fetched.

use serde::{Deserialize, Serialize};

/// A tour record from the CMS catalog, the unit of search.
///
/// Every field tolerates absence so that schema drift upstream degrades into
/// missing text rather than a failed fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub destination: Option<Destination>,
    #[serde(default)]
    pub places: Vec<Place>,
    #[serde(default)]
    pub states: Vec<Place>,
    #[serde(default)]
    pub coaches: Vec<Coach>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Destination {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
}

/// A place or state associated with a tour. The CMS exposes both `name` and
/// `title` depending on the content type, so the index projects all three
/// text fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coach {
    #[serde(default)]
    pub display_name: String,
}

/// Request body for the CMS GraphQL endpoint.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    pub variables: TourPageVariables,
}

#[derive(Debug, Serialize)]
pub struct TourPageVariables {
    pub locale: String,
    pub limit: usize,
    pub start: usize,
}

/// GraphQL response envelope. A populated `errors` array takes precedence over
/// any partial `data` the upstream may have included.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<ToursData>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub struct ToursData {
    #[serde(default)]
    pub tours: Vec<Tour>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    #[serde(default)]
    pub message: String,
}
