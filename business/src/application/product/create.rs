use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductDraft};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let product = Product::new(ProductDraft {
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            image_url: params.image_url,
            stock: params.stock,
        })
        .inspect_err(|err| {
            if let ProductError::Invalid(violations) = err {
                for violation in violations {
                    self.logger
                        .warn(&format!("Product validation failed: {}", violation));
                }
            }
        })?;

        self.repository.insert(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::repository::ActiveProductFilter;
    use crate::domain::product::value_objects::ProductCategory;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn find_active(
                &self,
                filter: &ActiveProductFilter,
                offset: i64,
                limit: i64,
            ) -> Result<Vec<Product>, RepositoryError>;
            async fn count_active(&self, filter: &ActiveProductFilter) -> Result<u64, RepositoryError>;
            async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn valid_params() -> CreateProductParams {
        CreateProductParams {
            name: Some("Widget".to_string()),
            description: Some("A widget".to_string()),
            price: Some(9.99),
            category: Some("electronics".to_string()),
            image_url: Some("http://x/img.png".to_string()),
            stock: None,
        }
    }

    #[tokio::test]
    async fn should_create_product_with_defaults_when_stock_omitted() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().times(1).returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case.execute(valid_params()).await.unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.stock, 0);
        assert!(product.is_active);
        assert_eq!(product.category, ProductCategory::Electronics);
    }

    #[tokio::test]
    async fn should_keep_supplied_stock() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(CreateProductParams {
                stock: Some(7),
                ..valid_params()
            })
            .await
            .unwrap();
        assert_eq!(product.stock, 7);
    }

    #[tokio::test]
    async fn should_not_touch_repository_when_required_field_missing() {
        // No expectations registered: any insert call would panic the test.
        let mock_repo = MockProductRepo::new();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: Some("Widget".to_string()),
                description: None,
                price: None,
                category: None,
                image_url: None,
                stock: None,
            })
            .await;

        assert!(matches!(result, Err(ProductError::MissingFields)));
    }

    #[tokio::test]
    async fn should_not_touch_repository_when_category_unknown() {
        let mock_repo = MockProductRepo::new();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                category: Some("furniture".to_string()),
                ..valid_params()
            })
            .await;

        assert!(matches!(result, Err(ProductError::Invalid(_))));
    }

    #[tokio::test]
    async fn should_surface_repository_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::Database));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params()).await;
        assert!(matches!(
            result,
            Err(ProductError::Repository(RepositoryError::Database))
        ));
    }
}
