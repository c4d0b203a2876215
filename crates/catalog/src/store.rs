use serde::{Deserialize, Serialize};

use crate::listing::Listing;

pub const DEFAULT_STORE_NAME: &str = "Upcycle Nation";
pub const DEFAULT_STORE_DESCRIPTION: &str = "Reduce, Reuse, Recycle with Upcycle Nation!";
pub const DEFAULT_STORE_WEBSITE: &str = "upcyclenation.com";

/// The single store: a header plus its append-only listing book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    name: String,
    description: String,
    listings: Vec<Listing>,
    website_url: Option<String>,
}

impl Store {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        website_url: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            listings: Vec::new(),
            website_url,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn website_url(&self) -> Option<&str> {
        self.website_url.as_deref()
    }

    /// Listings in insertion order.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Append a listing and return a reference to the stored copy.
    pub fn push_listing(&mut self, listing: Listing) -> &Listing {
        self.listings.push(listing);
        let idx = self.listings.len() - 1;
        &self.listings[idx]
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(
            DEFAULT_STORE_NAME,
            DEFAULT_STORE_DESCRIPTION,
            Some(DEFAULT_STORE_WEBSITE.to_string()),
        )
    }
}
