//! Catalog vocabulary and store shapes.
//!
//! Closed enumerations describing second-hand items, the `Item` value itself,
//! store listings and the store header. Pure data; the registry that mutates
//! these lives in `upcycle-marketplace`.

pub mod item;
pub mod listing;
pub mod store;
pub mod vocabulary;

pub use item::Item;
pub use listing::{Listing, ListingFilter};
pub use store::{DEFAULT_STORE_DESCRIPTION, DEFAULT_STORE_NAME, DEFAULT_STORE_WEBSITE, Store};
pub use vocabulary::{Colour, Currency, ItemCondition, Size};
