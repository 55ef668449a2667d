pub mod article;

pub use article::{normalize_tags, Article};
