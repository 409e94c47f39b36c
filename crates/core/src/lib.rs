//! `prodcat-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog and its
//! front ends (no IO, no logging setup).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::{Entity, find_by_id};
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, ProductId, UserId};
pub use value_object::ValueObject;
