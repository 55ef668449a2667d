use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub published_date: DateTime<Utc>,
    pub is_published: bool,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn new(title: String, content: String, author: String, tags: Vec<String>) -> Self {
        // BSON datetimes carry millisecond precision; truncate up front so
        // the representation returned from create matches what the store
        // hands back on later reads.
        let now = mongodb::bson::DateTime::now().to_chrono();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.trim().to_string(),
            content,
            author: author.trim().to_string(),
            tags: normalize_tags(tags),
            published_date: now,
            is_published: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Tags are stored trimmed and lowercased; query filters normalize the
/// same way so set-intersection matches hold.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_lowercase())
        .collect()
}
