use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::{ActiveProductFilter, ProductRepository};
use crate::domain::product::use_cases::list::{
    ListProductsParams, ListProductsUseCase, ProductPage,
};

pub const DEFAULT_PAGE_LIMIT: u32 = 10;
/// Upper bound on the page size so a single request cannot pull the whole
/// table. Within this cap the pagination behaves exactly like offset/limit.
pub const MAX_PAGE_LIMIT: u32 = 100;

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

/// Normalized (page, limit) pair: page floored at 1, limit defaulted and
/// clamped to 1..=MAX_PAGE_LIMIT.
fn normalize(page: Option<u32>, limit: Option<u32>) -> (u32, u32) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT);
    (page, limit)
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<ProductPage, ProductError> {
        let (page, limit) = normalize(params.page, params.limit);
        let offset = i64::from(page - 1) * i64::from(limit);
        let filter = ActiveProductFilter {
            category: params.category.filter(|c| !c.is_empty()),
        };

        let items = self
            .repository
            .find_active(&filter, offset, i64::from(limit))
            .await?;
        let total = self.repository.count_active(&filter).await?;
        let pages = total.div_ceil(u64::from(limit));

        self.logger.debug(&format!(
            "Listed {} of {} active products (page {})",
            items.len(),
            total,
            page
        ));

        Ok(ProductPage {
            items,
            page,
            limit,
            total,
            pages,
        })
    }
}
