use crate::dtos::{
    ArticleEnvelope, ArticleListParams, ArticleListResponse, ArticleResponse,
    CreateArticleRequest, DeleteArticleResponse, DeletedArticle, Pagination,
    UpdateArticleRequest,
};
use crate::models::{normalize_tags, Article};
use crate::startup::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument};
use service_core::error::AppError;
use uuid::Uuid;
use validator::Validate;

const DEFAULT_PAGE_LIMIT: u64 = 10;
const MAX_PAGE_LIMIT: u64 = 100;

/// Ids are UUID strings. Parsed input is canonicalized to hyphenated form
/// before lookup so the simple form of the same UUID still matches.
fn parse_article_id(raw: &str) -> Result<String, AppError> {
    let id = Uuid::parse_str(raw)
        .map_err(|_| AppError::InvalidId("Invalid article ID format".to_string()))?;
    Ok(id.to_string())
}

fn parse_paging_param(value: Option<&str>, name: &str, default: u64) -> Result<u64, AppError> {
    match value {
        None => Ok(default),
        Some(raw) => match raw.parse::<u64>() {
            Ok(parsed) if parsed >= 1 => Ok(parsed),
            _ => Err(AppError::ValidationError(vec![format!(
                "{} must be a positive integer",
                name
            )])),
        },
    }
}

pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ArticleListParams>,
) -> Result<impl IntoResponse, AppError> {
    let limit =
        parse_paging_param(params.limit.as_deref(), "limit", DEFAULT_PAGE_LIMIT)?.min(MAX_PAGE_LIMIT);
    let page = parse_paging_param(params.page.as_deref(), "page", 1)?;
    let skip = (page - 1) * limit;

    let mut filter = doc! { "is_published": true };

    if let Some(tags) = params.tags.as_deref().filter(|t| !t.is_empty()) {
        // Comma-separated; any overlap with the stored tag set matches.
        let requested = normalize_tags(tags.split(',').map(str::to_string).collect());
        filter.insert("tags", doc! { "$in": requested });
    }

    if let Some(author) = params.author.as_deref().filter(|a| !a.is_empty()) {
        filter.insert("author", doc! { "$regex": author, "$options": "i" });
    }

    // Count total matches independently of pagination
    let total = state
        .db
        .articles()
        .count_documents(filter.clone(), None)
        .await
        .map_err(AppError::from)?;

    let find_options = FindOptions::builder()
        .sort(doc! { "published_date": -1 }) // newest first
        .skip(skip)
        .limit(limit as i64)
        .build();

    let mut cursor = state
        .db
        .articles()
        .find(filter, find_options)
        .await
        .map_err(AppError::from)?;

    let mut articles = Vec::new();
    while let Some(article) = cursor.try_next().await.map_err(AppError::from)? {
        articles.push(ArticleResponse::from(article));
    }

    let total_pages = (total as f64 / limit as f64).ceil() as u64;

    Ok(Json(ArticleListResponse {
        success: true,
        data: articles,
        pagination: Pagination {
            current_page: page,
            total_pages,
            total_articles: total,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        },
    }))
}

pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_article_id(&id)?;

    let article = state
        .db
        .articles()
        .find_one(doc! { "_id": &id }, None)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Article not found".to_string()))?;

    Ok(Json(ArticleEnvelope {
        success: true,
        message: None,
        data: ArticleResponse::from(article),
    }))
}

pub async fn create_article(
    State(state): State<AppState>,
    Json(req): Json<CreateArticleRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let article = Article::new(req.title, req.content, req.author, req.tags);

    state
        .db
        .articles()
        .insert_one(&article, None)
        .await
        .map_err(|e| {
            tracing::error!(article_id = %article.id, "Failed to insert article: {}", e);
            AppError::from(e)
        })?;

    tracing::info!(article_id = %article.id, title = %article.title, "Article created");

    Ok((
        StatusCode::CREATED,
        Json(ArticleEnvelope {
            success: true,
            message: Some("Article created successfully".to_string()),
            data: ArticleResponse::from(article),
        }),
    ))
}

pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateArticleRequest>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_article_id(&id)?;
    req.validate()?;

    // Full replace of the writable fields; published_date and created_at
    // are never touched by an update.
    let update = doc! {
        "$set": {
            "title": req.title.trim(),
            "content": &req.content,
            "author": req.author.trim(),
            "tags": normalize_tags(req.tags),
            "is_published": req.is_published,
            "updated_at": mongodb::bson::DateTime::now(),
        }
    };

    let options = FindOneAndUpdateOptions::builder()
        .return_document(ReturnDocument::After)
        .build();

    let updated = state
        .db
        .articles()
        .find_one_and_update(doc! { "_id": &id }, update, options)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Article not found".to_string()))?;

    tracing::info!(article_id = %id, "Article updated");

    Ok(Json(ArticleEnvelope {
        success: true,
        message: Some("Article updated successfully".to_string()),
        data: ArticleResponse::from(updated),
    }))
}

pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_article_id(&id)?;

    let deleted = state
        .db
        .articles()
        .find_one_and_delete(doc! { "_id": &id }, None)
        .await
        .map_err(AppError::from)?;

    if deleted.is_none() {
        return Err(AppError::NotFound("Article not found".to_string()));
    }

    tracing::info!(article_id = %id, "Article deleted");

    Ok(Json(DeleteArticleResponse {
        success: true,
        message: "Article deleted successfully".to_string(),
        data: DeletedArticle { deleted_id: id },
    }))
}
