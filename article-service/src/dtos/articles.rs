use crate::models::Article;
use serde::{Deserialize, Serialize};
use validator::Validate;

// Required fields use serde defaults so an absent field fails validation
// with a per-field message instead of a body-deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateArticleRequest {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 10, message = "Content must be at least 10 characters long"))]
    pub content: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Author name is required"))]
    pub author: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// Full-replace update: omitted `tags` resets to empty, omitted
/// `isPublished` resets to true. Never a partial merge.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 10, message = "Content must be at least 10 characters long"))]
    pub content: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Author name is required"))]
    pub author: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default = "default_is_published")]
    pub is_published: bool,
}

fn default_is_published() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub published_date: String,
    pub is_published: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            content: article.content,
            author: article.author,
            tags: article.tags,
            published_date: article.published_date.to_rfc3339(),
            is_published: article.is_published,
            created_at: article.created_at.to_rfc3339(),
            updated_at: article.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    pub tags: Option<String>,
    pub author: Option<String>,
    // Raw strings so malformed values become a 400 instead of an axum
    // query rejection outside the response envelope.
    pub limit: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_articles: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub success: bool,
    pub data: Vec<ArticleResponse>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
pub struct ArticleEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: ArticleResponse,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedArticle {
    pub deleted_id: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteArticleResponse {
    pub success: bool,
    pub message: String,
    pub data: DeletedArticle,
}
