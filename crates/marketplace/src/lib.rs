//! Marketplace registry: the single owner of store listings and users.
//!
//! `Marketplace` is an explicit context object. Callers construct it once
//! (see `upcycle-infra` for config-driven wiring) and pass it to whatever
//! needs it; there is no global instance.

pub mod command;
pub mod rates;
pub mod registry;

pub use command::{AddReview, CreateListing, RecordSale, RegisterUser};
pub use rates::RateProvider;
pub use registry::{Marketplace, SalePolicy};
