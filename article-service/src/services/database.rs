use crate::models::Article;
use mongodb::{
    bson::doc, options::IndexOptions, Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for article-service");

        let articles = self.articles();

        let title_index = IndexModel::builder()
            .keys(doc! { "title": 1 })
            .options(IndexOptions::builder().name("title_lookup".to_string()).build())
            .build();

        articles.create_index(title_index, None).await.map_err(|e| {
            tracing::error!("Failed to create title index on articles collection: {}", e);
            AppError::from(e)
        })?;
        tracing::info!("Created index on articles.title");

        // List sorts by published_date descending
        let published_date_index = IndexModel::builder()
            .keys(doc! { "published_date": -1 })
            .options(
                IndexOptions::builder()
                    .name("published_date_sort".to_string())
                    .build(),
            )
            .build();

        articles
            .create_index(published_date_index, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to create published_date index on articles collection: {}",
                    e
                );
                AppError::from(e)
            })?;
        tracing::info!("Created index on articles.published_date");

        let tags_index = IndexModel::builder()
            .keys(doc! { "tags": 1 })
            .options(IndexOptions::builder().name("tags_lookup".to_string()).build())
            .build();

        articles.create_index(tags_index, None).await.map_err(|e| {
            tracing::error!("Failed to create tags index on articles collection: {}", e);
            AppError::from(e)
        })?;
        tracing::info!("Created index on articles.tags");

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn articles(&self) -> Collection<Article> {
        self.db.collection("articles")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
