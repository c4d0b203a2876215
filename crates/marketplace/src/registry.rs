//! The marketplace registry.
//!
//! Owns the store (with its listing book) and every registered user. All
//! collections are append-only: nothing is ever removed or updated in place,
//! apart from users' sale histories growing.

use core::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use upcycle_catalog::{Currency, Listing, ListingFilter, Store};
use upcycle_core::{DomainError, DomainResult, Username};
use upcycle_parties::User;
use upcycle_sales::{Review, Sale};

use crate::command::{AddReview, CreateListing, RecordSale, RegisterUser};
use crate::rates::RateProvider;

/// What `record_sale` does when the buyer is not a registered user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalePolicy {
    /// Build and return the sale, but record it against nobody. The returned
    /// sale is unreachable through any later query.
    #[default]
    Lenient,
    /// Fail with `DomainError::NotFound`; nothing is built or recorded.
    Strict,
}

impl FromStr for SalePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lenient" => Ok(SalePolicy::Lenient),
            "strict" => Ok(SalePolicy::Strict),
            other => Err(DomainError::invalid_enum("sale policy", other)),
        }
    }
}

/// Registry of all marketplace state.
///
/// Single-writer: mutation requires `&mut self`. Wrap the whole value in one
/// lock if it ever has to be shared.
#[derive(Debug)]
pub struct Marketplace<R> {
    store: Store,
    users: Vec<User>,
    rates: R,
    sale_policy: SalePolicy,
}

impl<R> Marketplace<R> {
    pub fn new(store: Store, rates: R) -> Self {
        Self {
            store,
            users: Vec::new(),
            rates,
            sale_policy: SalePolicy::default(),
        }
    }

    pub fn with_sale_policy(mut self, sale_policy: SalePolicy) -> Self {
        self.sale_policy = sale_policy;
        self
    }

    pub fn sale_policy(&self) -> SalePolicy {
        self.sale_policy
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Users in registration order (duplicates by username included).
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn rates(&self) -> &R {
        &self.rates
    }

    /// First user registered under `username`, if any.
    pub fn find_user(&self, username: &Username) -> Option<&User> {
        self.users.iter().find(|u| u.username() == username)
    }

    fn position_of(&self, username: &Username) -> Option<usize> {
        self.users.iter().position(|u| u.username() == username)
    }

    /// Register a user with an empty sale history.
    ///
    /// Usernames are not checked for uniqueness: registering the same name
    /// twice yields two independent records.
    #[instrument(skip(self, cmd), fields(username = %cmd.username))]
    pub fn register_user(&mut self, cmd: RegisterUser) -> &User {
        if self.position_of(&cmd.username).is_some() {
            tracing::warn!("username already registered; creating a second record");
        }

        let user = User::new(cmd.username, cmd.email, cmd.first_name, cmd.last_name);
        tracing::info!(user_id = %user.id_typed(), "user registered");

        self.users.push(user);
        let idx = self.users.len() - 1;
        &self.users[idx]
    }

    /// Append a listing to the store. The seller does not have to be a
    /// registered user.
    #[instrument(skip(self, cmd), fields(seller = %cmd.seller_username))]
    pub fn create_listing(&mut self, cmd: CreateListing) -> &Listing {
        let listing = Listing::new(cmd.item, cmd.seller_username)
            .with_image_url(cmd.image_url)
            .with_seller_location(cmd.seller_location)
            .with_seller_rating(cmd.seller_rating);

        tracing::info!(
            listing_id = %listing.id(),
            price = listing.item().price(),
            "listing created"
        );
        self.store.push_listing(listing)
    }

    /// Record a completed sale.
    ///
    /// A registered buyer gets the sale appended to their history; if the
    /// seller is also registered, the same `Arc<Sale>` is appended to theirs.
    /// An unknown seller only means the sale is recorded for the buyer alone.
    /// An unknown buyer is handled per [`SalePolicy`].
    #[instrument(
        skip(self, cmd),
        fields(buyer = %cmd.buyer_username, seller = %cmd.seller_username),
        err
    )]
    pub fn record_sale(&mut self, cmd: RecordSale) -> DomainResult<Arc<Sale>> {
        let Some(buyer_idx) = self.position_of(&cmd.buyer_username) else {
            return match self.sale_policy {
                SalePolicy::Lenient => {
                    let sale = Sale::new(
                        cmd.item,
                        cmd.buyer_username,
                        cmd.seller_username,
                        cmd.sale_price,
                        cmd.occurred_at,
                    );
                    tracing::warn!(sale_id = %sale.id(), "buyer not registered; sale not recorded");
                    Ok(Arc::new(sale))
                }
                SalePolicy::Strict => Err(DomainError::not_found(format!(
                    "buyer '{}'",
                    cmd.buyer_username
                ))),
            };
        };
        let seller_idx = self.position_of(&cmd.seller_username);

        let sale = Arc::new(Sale::new(
            cmd.item,
            cmd.buyer_username,
            cmd.seller_username,
            cmd.sale_price,
            cmd.occurred_at,
        ));

        self.users[buyer_idx].add_sale(Arc::clone(&sale));
        if let Some(idx) = seller_idx {
            self.users[idx].add_sale(Arc::clone(&sale));
        } else {
            tracing::debug!("seller not registered; recorded for buyer only");
        }

        tracing::info!(
            sale_id = %sale.id(),
            sale_price = sale.sale_price(),
            "sale recorded"
        );
        Ok(sale)
    }

    /// Build a review. The registry does not keep it; persisting reviews is
    /// the caller's business.
    pub fn add_review(&self, cmd: AddReview) -> Review {
        let review = Review::new(
            cmd.buyer_username,
            cmd.seller_username,
            cmd.rating,
            cmd.comment,
            cmd.created_at,
        );
        tracing::debug!(
            review_id = %review.id(),
            seller = %review.seller_username(),
            "review created"
        );
        review
    }

    /// Listings matching every set field of `filter`, in insertion order.
    pub fn store_listings(&self, filter: &ListingFilter) -> Vec<&Listing> {
        self.store
            .listings()
            .iter()
            .filter(|l| filter.matches(l.item()))
            .collect()
    }

    pub fn seller_listings(&self, seller: &Username) -> Vec<&Listing> {
        self.store
            .listings()
            .iter()
            .filter(|l| l.seller_username() == seller)
            .collect()
    }

    /// Concatenated sale history of every user record named `username`.
    ///
    /// A user's history holds both purchases and sales, so this returns
    /// every sale recorded against the record, whichever side they were on.
    fn history_of(&self, username: &Username) -> Vec<Arc<Sale>> {
        self.users
            .iter()
            .filter(|u| u.username() == username)
            .flat_map(|u| u.sales().iter().cloned())
            .collect()
    }

    pub fn buyer_sales(&self, buyer: &Username) -> Vec<Arc<Sale>> {
        self.history_of(buyer)
    }

    pub fn seller_sales(&self, seller: &Username) -> Vec<Arc<Sale>> {
        self.history_of(seller)
    }

    /// Listing-book value: the sum of item prices over all current listings.
    /// Not realized revenue, and currencies are not normalized.
    pub fn store_revenue(&self) -> f64 {
        self.store.listings().iter().map(|l| l.item().price()).sum()
    }

    /// Sum of item prices over the seller's current listings.
    pub fn seller_revenue(&self, seller: &Username) -> f64 {
        self.seller_listings(seller)
            .iter()
            .map(|l| l.item().price())
            .sum()
    }

    /// Sum of `sale_price` over `buyer_sales(buyer)`.
    pub fn buyer_expenditure(&self, buyer: &Username) -> f64 {
        self.buyer_sales(buyer).iter().map(|s| s.sale_price()).sum()
    }
}

impl<R: RateProvider> Marketplace<R> {
    /// Convert `amount` between currencies.
    ///
    /// Same-currency conversion returns `amount` untouched without asking the
    /// provider. Provider failures are returned as-is.
    #[instrument(skip(self), err)]
    pub fn convert(&self, amount: f64, from: Currency, to: Currency) -> DomainResult<f64> {
        if from == to {
            return Ok(amount);
        }

        let rate = self.rates.rate(from, to)?;
        tracing::debug!(rate, "conversion rate resolved");
        Ok(amount * rate)
    }
}
