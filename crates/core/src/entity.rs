//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// In this domain only users carry identity; listings, sales and reviews are
/// values that happen to have an id for reference.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
