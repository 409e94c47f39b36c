//! Owner and search filtering over enriched products.

use serde::{Deserialize, Serialize};

use prodcat_core::ValueObject;

use crate::catalog::EnrichedProduct;

/// Selected owner, or the `"All"` sentinel.
///
/// The sentinel is compared as a literal string, so a user actually named
/// `"All"` cannot be selected on their own: picking them shows every product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerFilter(String);

impl OwnerFilter {
    pub const ALL: &'static str = "All";

    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }

    /// Exact, case-sensitive match on the owner's name. Products without a
    /// resolved owner only pass the `"All"` filter.
    pub fn matches(&self, product: &EnrichedProduct) -> bool {
        self.is_all() || product.owner_name() == Some(self.0.as_str())
    }
}

impl Default for OwnerFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl ValueObject for OwnerFilter {}

/// Free-text search on product names, kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The raw text, untrimmed.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Trimmed, lower-cased needle used for matching.
    pub fn normalized(&self) -> String {
        self.0.trim().to_lowercase()
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl ValueObject for SearchQuery {}

fn name_contains(product: &EnrichedProduct, needle: &str) -> bool {
    needle.is_empty() || product.name().to_lowercase().contains(needle)
}

/// Products passing both filters, lazily, in input order. The query is
/// normalized once up front.
fn matching<'a>(
    products: &'a [EnrichedProduct],
    owner: &str,
    query: &str,
) -> impl Iterator<Item = &'a EnrichedProduct> {
    let owner = OwnerFilter::new(owner);
    let needle = SearchQuery::new(query).normalized();

    products
        .iter()
        .filter(move |p| owner.matches(p) && name_contains(p, &needle))
}

/// Applies the owner filter, then the search query, preserving input order.
///
/// Returns references into `products`; an empty result means nothing matched.
pub fn filter_products<'a>(
    products: &'a [EnrichedProduct],
    owner: &str,
    query: &str,
) -> Vec<&'a EnrichedProduct> {
    matching(products, owner, query).collect()
}

/// Whether [`filter_products`] would return anything, without collecting.
pub fn any_product_matches(products: &[EnrichedProduct], owner: &str, query: &str) -> bool {
    matching(products, owner, query).next().is_some()
}
