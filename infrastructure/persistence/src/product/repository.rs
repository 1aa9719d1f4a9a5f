use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::{ActiveProductFilter, ProductRepository};

use crate::db::{DatabaseError, LazyPool};

use super::entity::ProductEntity;

const SELECT_COLUMNS: &str =
    "id, name, description, price, category, image_url, stock, is_active, created_at, updated_at";

pub struct ProductRepositoryPostgres {
    pool: Arc<LazyPool>,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: Arc<LazyPool>) -> Self {
        Self { pool }
    }

    async fn pool(&self) -> Result<&sqlx::PgPool, RepositoryError> {
        self.pool.get().await.map_err(|err| match err {
            DatabaseError::MissingConnectionString => RepositoryError::Configuration,
            _ => RepositoryError::Database,
        })
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_active(
        &self,
        filter: &ActiveProductFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Product>, RepositoryError> {
        let pool = self.pool().await?;

        let entities = match &filter.category {
            Some(category) => {
                sqlx::query_as::<_, ProductEntity>(&format!(
                    "SELECT {} FROM products WHERE is_active = TRUE AND category = $1 \
                     ORDER BY created_at DESC LIMIT $2 OFFSET $3",
                    SELECT_COLUMNS
                ))
                .bind(category)
                .bind(limit)
                .bind(offset)
                .fetch_all(pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ProductEntity>(&format!(
                    "SELECT {} FROM products WHERE is_active = TRUE \
                     ORDER BY created_at DESC LIMIT $1 OFFSET $2",
                    SELECT_COLUMNS
                ))
                .bind(limit)
                .bind(offset)
                .fetch_all(pool)
                .await
            }
        }
        .map_err(|err| {
            tracing::error!("Product query failed: {}", err);
            RepositoryError::Database
        })?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn count_active(&self, filter: &ActiveProductFilter) -> Result<u64, RepositoryError> {
        let pool = self.pool().await?;

        let count: i64 = match &filter.category {
            Some(category) => {
                sqlx::query_scalar(
                    "SELECT COUNT(*) FROM products WHERE is_active = TRUE AND category = $1",
                )
                .bind(category)
                .fetch_one(pool)
                .await
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE is_active = TRUE")
                    .fetch_one(pool)
                    .await
            }
        }
        .map_err(|err| {
            tracing::error!("Product count failed: {}", err);
            RepositoryError::Database
        })?;

        Ok(count.max(0) as u64)
    }

    async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        let pool = self.pool().await?;

        sqlx::query(
            r#"INSERT INTO products (id, name, description, price, category, image_url, stock, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.category.to_string())
        .bind(&product.image_url)
        .bind(product.stock)
        .bind(product.is_active)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(pool)
        .await
        .map_err(|err| {
            tracing::error!("Product insert failed: {}", err);
            RepositoryError::Database
        })?;

        Ok(())
    }
}
