use serde::{Deserialize, Serialize};

use upcycle_core::{ListingId, Username, ValueObject};

use crate::item::Item;
use crate::vocabulary::{Colour, ItemCondition, Size};

/// An item offered for sale by a seller.
///
/// `seller_username` is a loose reference: nothing checks that a user with
/// that name has been registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    id: ListingId,
    item: Item,
    image_url: Option<String>,
    seller_username: Username,
    seller_location: Option<String>,
    /// Conventionally 0..=5, not validated.
    seller_rating: Option<f64>,
}

impl ValueObject for Listing {}

impl Listing {
    pub fn new(item: Item, seller_username: Username) -> Self {
        Self {
            id: ListingId::new(),
            item,
            image_url: None,
            seller_username,
            seller_location: None,
            seller_rating: None,
        }
    }

    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    pub fn with_seller_location(mut self, seller_location: Option<String>) -> Self {
        self.seller_location = seller_location;
        self
    }

    pub fn with_seller_rating(mut self, seller_rating: Option<f64>) -> Self {
        self.seller_rating = seller_rating;
        self
    }

    pub fn id(&self) -> ListingId {
        self.id
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn seller_username(&self) -> &Username {
        &self.seller_username
    }

    pub fn seller_location(&self) -> Option<&str> {
        self.seller_location.as_deref()
    }

    pub fn seller_rating(&self) -> Option<f64> {
        self.seller_rating
    }
}

/// Conjunctive listing search: every field that is set must equal the
/// corresponding item field. The default filter matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFilter {
    pub size: Option<Size>,
    pub condition: Option<ItemCondition>,
    pub colour: Option<Colour>,
}

impl ListingFilter {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn condition(mut self, condition: ItemCondition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn colour(mut self, colour: Colour) -> Self {
        self.colour = Some(colour);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.condition.is_none() && self.colour.is_none()
    }

    /// An item with no size never matches a size filter (same for colour).
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(size) = self.size {
            if item.size() != Some(size) {
                return false;
            }
        }
        if let Some(colour) = self.colour {
            if item.colour() != Some(colour) {
                return false;
            }
        }
        if let Some(condition) = self.condition {
            if item.condition() != condition {
                return false;
            }
        }
        true
    }
}
