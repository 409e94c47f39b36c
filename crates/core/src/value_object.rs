//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two instances holding the same values are
/// the same value. In this workspace they wrap user-entered filter state
/// (owner selection, search text), which is replaced wholesale rather than
/// edited in place.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
