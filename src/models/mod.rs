//! Document shapes returned by the content backend's query API.

use serde::Deserialize;

pub mod category;
pub mod product;

/// Slugs are stored as `{ "current": "..." }` objects but projections may
/// already flatten them into plain strings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Slug {
    Plain(String),
    Object { current: String },
}

impl Slug {
    pub fn into_string(self) -> String {
        match self {
            Slug::Plain(value) => value,
            Slug::Object { current } => current,
        }
    }
}

/// Top-level body of every query response.
#[derive(Debug, Deserialize)]
pub struct QueryResponse<T> {
    pub result: Option<T>,
}
