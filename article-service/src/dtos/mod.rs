pub mod articles;

pub use articles::{
    ArticleEnvelope, ArticleListParams, ArticleListResponse, ArticleResponse,
    CreateArticleRequest, DeleteArticleResponse, DeletedArticle, Pagination,
    UpdateArticleRequest,
};
