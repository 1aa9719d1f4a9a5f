use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Listing filter shared by the find and count queries so both always see
/// the same predicate. The category is kept as a raw string: an unknown
/// value matches no rows rather than erroring.
#[derive(Debug, Clone, Default)]
pub struct ActiveProductFilter {
    pub category: Option<String>,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Active products matching the filter, newest first, one page.
    async fn find_active(
        &self,
        filter: &ActiveProductFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Product>, RepositoryError>;

    /// Count of active products matching the filter, ignoring pagination.
    async fn count_active(&self, filter: &ActiveProductFilter) -> Result<u64, RepositoryError>;

    async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
}
