use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Electronics,
    Clothing,
    Books,
    Home,
    Sports,
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::Electronics => write!(f, "electronics"),
            ProductCategory::Clothing => write!(f, "clothing"),
            ProductCategory::Books => write!(f, "books"),
            ProductCategory::Home => write!(f, "home"),
            ProductCategory::Sports => write!(f, "sports"),
        }
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electronics" => Ok(ProductCategory::Electronics),
            "clothing" => Ok(ProductCategory::Clothing),
            "books" => Ok(ProductCategory::Books),
            "home" => Ok(ProductCategory::Home),
            "sports" => Ok(ProductCategory::Sports),
            _ => Err(format!("Invalid product category: {}", s)),
        }
    }
}
