//! Join/derivation: products enriched with their category and owner.
//!
//! The join runs exactly once, in [`Catalog::new`]. Afterwards the enriched
//! list is only ever handed out as a shared slice.

use std::sync::Arc;

use serde::Serialize;

use prodcat_core::{CategoryId, DomainError, DomainResult, ProductId, UserId, find_by_id};

use crate::category::Category;
use crate::dataset::Dataset;
use crate::product::Product;
use crate::user::User;

/// A product with its category and owner resolved inline.
///
/// Either reference may be absent: an unknown `categoryId` leaves both `None`,
/// an unknown `ownerId` leaves only `user` as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedProduct {
    #[serde(flatten)]
    product: Product,
    category: Option<Category>,
    user: Option<User>,
}

impl EnrichedProduct {
    /// Resolves `product` against the given source collections.
    ///
    /// The owner lookup is only attempted once a category has been found.
    pub fn resolve(product: &Product, users: &[User], categories: &[Category]) -> Self {
        let category = find_by_id(categories, &product.category_id).cloned();
        let user = category
            .as_ref()
            .and_then(|c| find_by_id(users, &c.owner_id))
            .cloned();

        Self {
            product: product.clone(),
            category,
            user,
        }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn category_id(&self) -> CategoryId {
        self.product.category_id
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn category_label(&self) -> Option<String> {
        self.category.as_ref().map(Category::label)
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}

/// Enriches every product, preserving input order.
pub fn enrich(
    users: &[User],
    categories: &[Category],
    products: &[Product],
) -> Vec<EnrichedProduct> {
    products
        .iter()
        .map(|p| EnrichedProduct::resolve(p, users, categories))
        .collect()
}

/// A reference in the source data that points at nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DanglingReference {
    MissingCategory {
        product_id: ProductId,
        category_id: CategoryId,
    },
    MissingOwner {
        category_id: CategoryId,
        owner_id: UserId,
    },
}

impl core::fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DanglingReference::MissingCategory {
                product_id,
                category_id,
            } => write!(f, "product {product_id} references unknown category {category_id}"),
            DanglingReference::MissingOwner {
                category_id,
                owner_id,
            } => write!(f, "category {category_id} references unknown owner {owner_id}"),
        }
    }
}

fn dangling_references(
    users: &[User],
    categories: &[Category],
    products: &[Product],
) -> Vec<DanglingReference> {
    let missing_categories = products
        .iter()
        .filter(|p| find_by_id(categories, &p.category_id).is_none())
        .map(|p| DanglingReference::MissingCategory {
            product_id: p.id,
            category_id: p.category_id,
        });

    let missing_owners = categories
        .iter()
        .filter(|c| find_by_id(users, &c.owner_id).is_none())
        .map(|c| DanglingReference::MissingOwner {
            category_id: c.id,
            owner_id: c.owner_id,
        });

    missing_categories.chain(missing_owners).collect()
}

#[derive(Debug)]
struct CatalogInner {
    users: Vec<User>,
    products: Vec<EnrichedProduct>,
    dangling: Vec<DanglingReference>,
}

/// Immutable, shareable result of the join.
///
/// Cloning a `Catalog` is cheap; all clones see the same enriched list.
#[derive(Debug, Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

impl Catalog {
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        let enriched = enrich(&users, &categories, &products);
        let dangling = dangling_references(&users, &categories, &products);

        for reference in &dangling {
            tracing::warn!(%reference, "dangling reference in catalog data");
        }
        tracing::debug!(
            users = users.len(),
            categories = categories.len(),
            products = enriched.len(),
            "catalog built"
        );

        Self {
            inner: Arc::new(CatalogInner {
                users,
                products: enriched,
                dangling,
            }),
        }
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        Self::new(dataset.users, dataset.categories, dataset.products)
    }

    /// Enriched products in source order.
    pub fn products(&self) -> &[EnrichedProduct] {
        &self.inner.products
    }

    /// Looks up one enriched product by id (first match).
    pub fn product(&self, id: ProductId) -> DomainResult<&EnrichedProduct> {
        self.inner
            .products
            .iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))
    }

    /// Users in source order (drives the owner-selection control).
    pub fn users(&self) -> &[User] {
        &self.inner.users
    }

    /// References that failed to resolve during the join.
    pub fn dangling_references(&self) -> &[DanglingReference] {
        &self.inner.dangling
    }

    pub fn len(&self) -> usize {
        self.inner.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.products.is_empty()
    }
}
