//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Items, listings,
/// sales and reviews are all value objects: once constructed they never
/// change, and a sale stores a copy of the item rather than a live reference.
///
/// The trait requires:
/// - **Clone**: values are copied, not shared
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: useful for logging and tests
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
