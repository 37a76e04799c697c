use serde::Deserialize;

use super::Slug;
use crate::domain::category::Category as DomainCategory;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl From<Category> for DomainCategory {
    fn from(value: Category) -> Self {
        Self {
            id: value.id,
            title: value.title.unwrap_or_default(),
            slug: value.slug.map(Slug::into_string).unwrap_or_default(),
            description: value.description.unwrap_or_default(),
            image_url: value.image_url,
        }
    }
}
