use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct ListProductsParams {
    pub category: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// One window of the active-product listing plus the pagination metadata
/// the API returns alongside it.
#[derive(Debug)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u64,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<ProductPage, ProductError>;
}
