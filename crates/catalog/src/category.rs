use serde::{Deserialize, Serialize};

use prodcat_core::{CategoryId, Entity, UserId};

/// A product category, owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,
    pub owner_id: UserId,
}

impl Category {
    pub fn new(
        id: impl Into<CategoryId>,
        title: impl Into<String>,
        icon: impl Into<String>,
        owner_id: impl Into<UserId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
            owner_id: owner_id.into(),
        }
    }

    /// Display label used by the product table: `"{icon} - {title}"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
