use serde::{Deserialize, Serialize};

use upcycle_core::{DomainError, DomainResult, ValueObject};

use crate::vocabulary::{Colour, Currency, ItemCondition, Size};

/// An item offered for resale.
///
/// Immutable once constructed. Carries no owner; ownership is implied by the
/// listing or sale that wraps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ItemFields")]
pub struct Item {
    title: String,
    description: String,
    size: Option<Size>,
    colour: Option<Colour>,
    condition: ItemCondition,
    price: f64,
    currency: Currency,
}

impl ValueObject for Item {}

/// Unvalidated wire shape; decoding goes through `Item::new`.
#[derive(Deserialize)]
struct ItemFields {
    title: String,
    description: String,
    size: Option<Size>,
    colour: Option<Colour>,
    condition: ItemCondition,
    price: f64,
    currency: Currency,
}

impl TryFrom<ItemFields> for Item {
    type Error = DomainError;

    fn try_from(f: ItemFields) -> Result<Self, Self::Error> {
        let mut item = Item::new(f.title, f.description, f.condition, f.price, f.currency)?;
        item.size = f.size;
        item.colour = f.colour;
        Ok(item)
    }
}

impl Item {
    /// Build an item with no size or colour.
    ///
    /// `price` must be finite and non-negative.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        condition: ItemCondition,
        price: f64,
        currency: Currency,
    ) -> DomainResult<Self> {
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::validation(format!(
                "price must be a non-negative number (got {price})"
            )));
        }

        Ok(Self {
            title: title.into(),
            description: description.into(),
            size: None,
            colour: None,
            condition,
            price,
            currency,
        })
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = Some(colour);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn colour(&self) -> Option<Colour> {
        self.colour
    }

    pub fn condition(&self) -> ItemCondition {
        self.condition
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}
