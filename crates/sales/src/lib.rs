//! Completed sales and buyer reviews.
//!
//! Both are immutable records. A `Sale` snapshots the item it was for; a
//! `Review` is returned to the caller and not attached to any collection.

pub mod review;
pub mod sale;

pub use review::Review;
pub use sale::Sale;
