use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use upcycle_core::{ReviewId, Username, ValueObject};

/// A buyer's review of a seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    id: ReviewId,
    buyer_username: Username,
    seller_username: Username,
    /// Not range-checked.
    rating: f64,
    comment: String,
    created_at: DateTime<Utc>,
}

impl ValueObject for Review {}

impl Review {
    pub fn new(
        buyer_username: Username,
        seller_username: Username,
        rating: f64,
        comment: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ReviewId::new(),
            buyer_username,
            seller_username,
            rating,
            comment: comment.into(),
            created_at,
        }
    }

    pub fn id(&self) -> ReviewId {
        self.id
    }

    pub fn buyer_username(&self) -> &Username {
        &self.buyer_username
    }

    pub fn seller_username(&self) -> &Username {
        &self.seller_username
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
