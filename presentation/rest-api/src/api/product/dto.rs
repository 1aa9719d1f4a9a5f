use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::product::use_cases::list::ProductPage;
use business::domain::product::value_objects::ProductCategory;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum ProductCategoryDto {
    #[oai(rename = "electronics")]
    Electronics,
    #[oai(rename = "clothing")]
    Clothing,
    #[oai(rename = "books")]
    Books,
    #[oai(rename = "home")]
    Home,
    #[oai(rename = "sports")]
    Sports,
}

impl From<ProductCategory> for ProductCategoryDto {
    fn from(category: ProductCategory) -> Self {
        match category {
            ProductCategory::Electronics => ProductCategoryDto::Electronics,
            ProductCategory::Clothing => ProductCategoryDto::Clothing,
            ProductCategory::Books => ProductCategoryDto::Books,
            ProductCategory::Home => ProductCategoryDto::Home,
            ProductCategory::Sports => ProductCategoryDto::Sports,
        }
    }
}

/// Create request. Every field is optional on the wire: presence of the
/// required ones is checked by the domain, which answers a single
/// "provide all required fields" error, not a per-field schema error.
/// The category travels as a plain string for the same reason.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Product name (max 100 characters)
    pub name: Option<String>,
    /// Product description (max 500 characters)
    pub description: Option<String>,
    /// Price, non-negative
    pub price: Option<f64>,
    /// Category: electronics, clothing, books, home or sports
    pub category: Option<String>,
    /// Image URL
    pub image_url: Option<String>,
    /// Stock quantity, defaults to 0
    pub stock: Option<i32>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Price
    pub price: f64,
    /// Category
    pub category: ProductCategoryDto,
    /// Image URL
    pub image_url: String,
    /// Stock quantity
    pub stock: i32,
    /// Whether the product is listed
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category.into(),
            image_url: product.image_url,
            stock: product.stock,
            is_active: product.is_active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Pagination metadata returned alongside every listing.
#[derive(Debug, Clone, Object)]
pub struct PaginationDto {
    /// Requested page, 1-based
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Total matching products, ignoring pagination
    pub total: u64,
    /// Total page count: ceil(total / limit)
    pub pages: u64,
}

#[derive(Debug, Clone, Object)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
    pub pagination: PaginationDto,
}

impl From<ProductPage> for ProductListResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            products: page.items.into_iter().map(|p| p.into()).collect(),
            pagination: PaginationDto {
                page: page.page,
                limit: page.limit,
                total: page.total,
                pages: page.pages,
            },
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductCreatedResponse {
    pub message: String,
    pub product: ProductResponse,
}
