//! Category Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;

/// Category ID type
pub type CategoryId = RecordId;

/// Storefront browsing category (restaurants, cafes, desserts, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<CategoryId>,
    pub name: String,
    /// Icon identifier rendered by the client (e.g. "fas fa-utensils")
    pub icon: String,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub icon: String,
    pub is_active: Option<bool>,
}

/// Update category payload (all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Category {
    /// Build a record from a create payload, applying defaults
    pub fn from_create(data: CategoryCreate) -> Self {
        Self {
            id: None,
            name: data.name,
            icon: data.icon,
            is_active: data.is_active.unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults_is_active_true() {
        let cat = Category::from_create(CategoryCreate {
            name: "Cafes".into(),
            icon: "cup".into(),
            is_active: None,
        });
        assert!(cat.is_active);
        assert!(cat.id.is_none());
    }

    #[test]
    fn wire_format_is_camel_case() {
        let cat = Category::from_create(CategoryCreate {
            name: "Cafes".into(),
            icon: "cup".into(),
            is_active: Some(false),
        });
        let json = serde_json::to_value(&cat).unwrap();
        assert_eq!(json["isActive"], serde_json::json!(false));
        assert!(json.get("is_active").is_none());
    }
}
