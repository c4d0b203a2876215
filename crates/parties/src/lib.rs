//! Marketplace participants.
//!
//! A `User` is the one entity with identity and a mutable lifecycle: its sale
//! history grows as sales are recorded against it.

pub mod user;

pub use user::User;
