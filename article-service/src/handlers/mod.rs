pub mod articles;
pub mod health;

pub use articles::{create_article, delete_article, get_article, list_articles, update_article};
pub use health::{health_check, readiness_check};
