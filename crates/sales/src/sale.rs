use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use upcycle_catalog::Item;
use upcycle_core::{SaleId, Username, ValueObject};

/// A completed transaction between a buyer and a seller.
///
/// `item` is a copy taken at sale time, not a live reference to a listing.
/// `sale_price` is a plain amount; no currency arithmetic is applied to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    id: SaleId,
    item: Item,
    buyer_username: Username,
    seller_username: Username,
    sale_price: f64,
    occurred_at: DateTime<Utc>,
}

impl ValueObject for Sale {}

impl Sale {
    pub fn new(
        item: Item,
        buyer_username: Username,
        seller_username: Username,
        sale_price: f64,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: SaleId::new(),
            item,
            buyer_username,
            seller_username,
            sale_price,
            occurred_at,
        }
    }

    pub fn id(&self) -> SaleId {
        self.id
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn buyer_username(&self) -> &Username {
        &self.buyer_username
    }

    pub fn seller_username(&self) -> &Username {
        &self.seller_username
    }

    pub fn sale_price(&self) -> f64 {
        self.sale_price
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    /// Whether `username` is on either side of this sale.
    pub fn involves(&self, username: &Username) -> bool {
        &self.buyer_username == username || &self.seller_username == username
    }
}
