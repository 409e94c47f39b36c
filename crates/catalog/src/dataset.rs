//! The external data shape: three ordered source collections.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::product::Product;
use crate::user::User;

/// Source collections as supplied by the data provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Dataset {
    /// Parses a JSON document of the form `{"users": [..], "categories": [..], "products": [..]}`.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
