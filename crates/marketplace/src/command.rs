//! Commands accepted by the registry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use upcycle_catalog::Item;
use upcycle_core::Username;

/// Command: RegisterUser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUser {
    pub username: Username,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Command: CreateListing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateListing {
    pub item: Item,
    pub image_url: Option<String>,
    pub seller_username: Username,
    pub seller_location: Option<String>,
    pub seller_rating: Option<f64>,
}

impl CreateListing {
    /// A listing with no optional metadata.
    pub fn new(item: Item, seller_username: Username) -> Self {
        Self {
            item,
            image_url: None,
            seller_username,
            seller_location: None,
            seller_rating: None,
        }
    }
}

/// Command: RecordSale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSale {
    pub item: Item,
    pub buyer_username: Username,
    pub seller_username: Username,
    pub sale_price: f64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: AddReview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddReview {
    pub buyer_username: Username,
    pub seller_username: Username,
    pub rating: f64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}
