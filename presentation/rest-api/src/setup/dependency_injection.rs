use std::sync::Arc;

use logger::TracingLogger;
use persistence::db::LazyPool;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: LazyPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters: the pool handle is shared, not connected
        let product_repository = Arc::new(ProductRepositoryPostgres::new(Arc::new(pool)));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let list_use_case = Arc::new(ListProductsUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api =
            crate::api::product::routes::ProductApi::new(create_use_case, list_use_case);

        Self {
            health_api,
            product_api,
        }
    }
}
