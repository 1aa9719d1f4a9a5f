use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::{FieldViolation, ProductError};
use super::value_objects::ProductCategory;

pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: ProductCategory,
    pub image_url: String,
    pub stock: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Unvalidated create input. Required fields are `Option` because the wire
/// contract answers a missing field with a single "provide all required
/// fields" response rather than a deserialization error.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub stock: Option<i32>,
}

impl Product {
    /// Validates a draft and constructs a new product.
    ///
    /// Presence is checked first: a required field that is absent, an empty
    /// string, or a zero price fails the whole draft with `MissingFields`.
    /// Constraint checks then run over every field at once so the violation
    /// list names all offending fields, not just the first.
    pub fn new(draft: ProductDraft) -> Result<Self, ProductError> {
        let (Some(name), Some(description), Some(price), Some(category), Some(image_url)) = (
            draft.name.filter(|v| !v.is_empty()),
            draft.description.filter(|v| !v.is_empty()),
            draft.price.filter(|v| *v != 0.0),
            draft.category.filter(|v| !v.is_empty()),
            draft.image_url.filter(|v| !v.is_empty()),
        ) else {
            return Err(ProductError::MissingFields);
        };

        let stock = draft.stock.unwrap_or(0);

        let mut violations = Vec::new();
        if name.chars().count() > NAME_MAX_CHARS {
            violations.push(FieldViolation::new(
                "name",
                format!("cannot be more than {} characters", NAME_MAX_CHARS),
            ));
        }
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            violations.push(FieldViolation::new(
                "description",
                format!("cannot be more than {} characters", DESCRIPTION_MAX_CHARS),
            ));
        }
        if price < 0.0 {
            violations.push(FieldViolation::new("price", "cannot be negative"));
        }
        if stock < 0 {
            violations.push(FieldViolation::new("stock", "cannot be negative"));
        }
        match category.parse::<ProductCategory>() {
            Ok(category) if violations.is_empty() => {
                let now = Utc::now();
                Ok(Self {
                    id: Uuid::new_v4(),
                    name,
                    description,
                    price,
                    category,
                    image_url,
                    stock,
                    is_active: true,
                    created_at: now,
                    updated_at: now,
                })
            }
            Ok(_) => Err(ProductError::Invalid(violations)),
            Err(message) => {
                violations.push(FieldViolation::new("category", message));
                Err(ProductError::Invalid(violations))
            }
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        price: f64,
        category: ProductCategory,
        image_url: String,
        stock: i32,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            category,
            image_url,
            stock,
            is_active,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            name: Some("Widget".to_string()),
            description: Some("A widget".to_string()),
            price: Some(9.99),
            category: Some("electronics".to_string()),
            image_url: Some("http://x/img.png".to_string()),
            stock: None,
        }
    }

    #[test]
    fn should_default_stock_to_zero_and_mark_active() {
        let product = Product::new(valid_draft()).unwrap();
        assert_eq!(product.stock, 0);
        assert!(product.is_active);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn should_keep_supplied_stock() {
        let draft = ProductDraft {
            stock: Some(25),
            ..valid_draft()
        };
        assert_eq!(Product::new(draft).unwrap().stock, 25);
    }

    #[test]
    fn should_reject_missing_required_fields() {
        let draft = ProductDraft {
            name: Some("Widget".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            Product::new(draft),
            Err(ProductError::MissingFields)
        ));
    }

    #[test]
    fn should_treat_empty_string_and_zero_price_as_missing() {
        let draft = ProductDraft {
            description: Some("".to_string()),
            ..valid_draft()
        };
        assert!(matches!(
            Product::new(draft),
            Err(ProductError::MissingFields)
        ));

        let draft = ProductDraft {
            price: Some(0.0),
            ..valid_draft()
        };
        assert!(matches!(
            Product::new(draft),
            Err(ProductError::MissingFields)
        ));
    }

    #[test]
    fn should_collect_violation_for_unknown_category() {
        let draft = ProductDraft {
            category: Some("furniture".to_string()),
            ..valid_draft()
        };
        match Product::new(draft) {
            Err(ProductError::Invalid(violations)) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "category");
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn should_collect_every_violation_at_once() {
        let draft = ProductDraft {
            name: Some("x".repeat(101)),
            description: Some("y".repeat(501)),
            price: Some(-1.0),
            stock: Some(-3),
            ..valid_draft()
        };
        match Product::new(draft) {
            Err(ProductError::Invalid(violations)) => {
                let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
                assert_eq!(fields, vec!["name", "description", "price", "stock"]);
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn should_report_unknown_category_alongside_other_violations() {
        let draft = ProductDraft {
            name: Some("x".repeat(101)),
            category: Some("furniture".to_string()),
            ..valid_draft()
        };
        match Product::new(draft) {
            Err(ProductError::Invalid(violations)) => {
                let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
                assert_eq!(fields, vec!["name", "category"]);
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn should_accept_name_and_description_at_their_bounds() {
        let draft = ProductDraft {
            name: Some("x".repeat(100)),
            description: Some("y".repeat(500)),
            ..valid_draft()
        };
        assert!(Product::new(draft).is_ok());
    }
}
