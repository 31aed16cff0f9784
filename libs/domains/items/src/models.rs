use axum_helpers::non_null;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

/// Fields exposed in the Item representation, in serialization order.
pub const ITEM_FIELDS: [&str; 5] = ["id", "name", "description", "completed", "created_at"];

/// A to-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Server-assigned identifier
    pub id: i64,
    pub name: String,
    pub description: String,
    pub completed: bool,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Apply the present fields of an update. `id` and `created_at` never change.
    pub fn apply_update(&mut self, update: UpdateItem) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
    }
}

/// Payload for `POST /api/Item/`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(max = 255))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// Payload for `PUT /api/Item/{id}/`
///
/// `name` is required; omitted fields keep their stored value. No field may be `null`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ReplaceItem {
    #[validate(length(max = 255))]
    pub name: String,
    #[serde(default, deserialize_with = "non_null")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub completed: Option<bool>,
}

impl From<ReplaceItem> for UpdateItem {
    fn from(input: ReplaceItem) -> Self {
        Self {
            name: Some(input.name),
            description: input.description,
            completed: input.completed,
        }
    }
}

/// Payload for `PATCH /api/Item/{id}/`
///
/// Absent fields are left alone; a field sent as `null` is rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[validate(length(max = 255))]
    #[serde(default, deserialize_with = "non_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub completed: Option<bool>,
}

impl UpdateItem {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ItemSortKey {
    #[default]
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    #[strum(serialize = "asc")]
    Ascending,
    #[default]
    #[strum(serialize = "desc")]
    Descending,
}

/// Listing order. Rows with equal keys fall back to `id` in the same direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemOrdering {
    pub key: ItemSortKey,
    pub direction: SortDirection,
}

impl ItemOrdering {
    /// Most recently created first
    pub const NEWEST_FIRST: Self = Self {
        key: ItemSortKey::CreatedAt,
        direction: SortDirection::Descending,
    };

    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        let ascending = match self.key {
            ItemSortKey::CreatedAt => a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)),
        };
        match self.direction {
            SortDirection::Ascending => ascending,
            SortDirection::Descending => ascending.reverse(),
        }
    }
}
