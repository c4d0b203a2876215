//! Registry behaviour through the public API.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use upcycle_catalog::{Colour, Currency, Item, ItemCondition, ListingFilter, Size, Store};
use upcycle_core::{DomainError, DomainResult, Username};
use upcycle_marketplace::{
    AddReview, CreateListing, Marketplace, RateProvider, RecordSale, RegisterUser, SalePolicy,
};

/// Fixed-rate provider for tests.
struct FlatRate(f64);

impl RateProvider for FlatRate {
    fn rate(&self, _from: Currency, _to: Currency) -> DomainResult<f64> {
        Ok(self.0)
    }
}

struct Unavailable;

impl RateProvider for Unavailable {
    fn rate(&self, _from: Currency, _to: Currency) -> DomainResult<f64> {
        Err(DomainError::rate_unavailable("service down"))
    }
}

fn market() -> Marketplace<FlatRate> {
    Marketplace::new(Store::default(), FlatRate(0.5))
}

fn username(s: &str) -> Username {
    Username::new(s).unwrap()
}

fn register<R>(market: &mut Marketplace<R>, name: &str) {
    market.register_user(RegisterUser {
        username: username(name),
        email: format!("{name}@example.com"),
        first_name: name.to_string(),
        last_name: "Tester".to_string(),
    });
}

fn item(title: &str, price: f64) -> Item {
    Item::new(title, "", ItemCondition::Used, price, Currency::Usd).unwrap()
}

fn sale(buyer: &str, seller: &str, price: f64) -> RecordSale {
    RecordSale {
        item: item("Thing", price),
        buyer_username: username(buyer),
        seller_username: username(seller),
        sale_price: price,
        occurred_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    }
}

#[test]
fn unfiltered_listings_come_back_in_call_order() {
    let mut market = market();
    let titles = ["coat", "scarf", "boots", "hat"];
    for (i, title) in titles.iter().enumerate() {
        let seller = if i % 2 == 0 { "bob" } else { "carol" };
        market.create_listing(CreateListing::new(item(title, 10.0), username(seller)));
    }

    let listed: Vec<&str> = market
        .store_listings(&ListingFilter::any())
        .iter()
        .map(|l| l.item().title())
        .collect();
    assert_eq!(listed, titles);
}

#[test]
fn create_listing_returns_stored_listing_with_metadata() {
    let mut market = market();
    let listing = market
        .create_listing(CreateListing {
            item: item("coat", 30.0),
            image_url: Some("https://img.example/coat.jpg".to_string()),
            seller_username: username("ghost"),
            seller_location: Some("Leeds".to_string()),
            seller_rating: Some(4.8),
        })
        .clone();

    assert_eq!(listing.seller_username().as_str(), "ghost");
    assert_eq!(listing.seller_location(), Some("Leeds"));
    assert_eq!(market.store().listings(), &[listing]);
    assert!(market.find_user(&username("ghost")).is_none());
}

#[test]
fn filters_combine_conjunctively() {
    let mut market = market();
    let seller = username("bob");
    let cases = [
        ("a", Some(Size::Small), Some(Colour::Red), ItemCondition::Used),
        ("b", Some(Size::Small), Some(Colour::Blue), ItemCondition::Used),
        ("c", Some(Size::Large), Some(Colour::Red), ItemCondition::Vintage),
        ("d", None, None, ItemCondition::Used),
    ];
    for (title, size, colour, condition) in cases {
        let mut it = Item::new(title, "", condition, 1.0, Currency::Eur).unwrap();
        if let Some(size) = size {
            it = it.with_size(size);
        }
        if let Some(colour) = colour {
            it = it.with_colour(colour);
        }
        market.create_listing(CreateListing::new(it, seller.clone()));
    }

    let titles = |filter: ListingFilter| -> Vec<String> {
        market
            .store_listings(&filter)
            .iter()
            .map(|l| l.item().title().to_string())
            .collect()
    };

    assert_eq!(titles(ListingFilter::any().size(Size::Small)), ["a", "b"]);
    assert_eq!(titles(ListingFilter::any().colour(Colour::Red)), ["a", "c"]);
    assert_eq!(titles(ListingFilter::any().condition(ItemCondition::Used)), ["a", "b", "d"]);
    assert_eq!(
        titles(ListingFilter::any().size(Size::Small).colour(Colour::Red)),
        ["a"]
    );
    assert!(titles(ListingFilter::any().size(Size::Medium)).is_empty());
}

#[test]
fn recorded_sale_is_visible_to_buyer() {
    let mut market = market();
    register(&mut market, "alice");

    let recorded = market.record_sale(sale("alice", "bob", 10.0)).unwrap();

    let sales = market.buyer_sales(&username("alice"));
    assert_eq!(sales.len(), 1);
    assert!(Arc::ptr_eq(&sales[0], &recorded));
    assert_eq!(*sales[0], *recorded);
    assert_eq!(market.buyer_expenditure(&username("alice")), 10.0);
    // bob is not registered: nothing to attach to.
    assert!(market.seller_sales(&username("bob")).is_empty());
}

#[test]
fn registered_seller_sees_the_same_sale() {
    let mut market = market();
    register(&mut market, "alice");
    register(&mut market, "bob");

    let recorded = market.record_sale(sale("alice", "bob", 25.0)).unwrap();

    let seller_sales = market.seller_sales(&username("bob"));
    assert_eq!(seller_sales.len(), 1);
    assert!(Arc::ptr_eq(&seller_sales[0], &recorded));
}

#[test]
fn unknown_buyer_sale_is_returned_but_not_recorded() {
    let mut market = market();
    register(&mut market, "bob");

    let orphan = market.record_sale(sale("nobody", "bob", 7.0)).unwrap();
    assert_eq!(orphan.buyer_username().as_str(), "nobody");
    assert_eq!(orphan.sale_price(), 7.0);

    assert!(market.buyer_sales(&username("nobody")).is_empty());
    assert!(market.seller_sales(&username("bob")).is_empty());
    assert_eq!(market.buyer_expenditure(&username("nobody")), 0.0);
}

#[test]
fn strict_policy_surfaces_unknown_buyer() {
    let mut market = market().with_sale_policy(SalePolicy::Strict);
    assert_eq!(market.sale_policy(), SalePolicy::Strict);

    let err = market.record_sale(sale("nobody", "bob", 7.0)).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn duplicate_registration_creates_two_records() {
    let mut market = market();
    let first = market
        .register_user(RegisterUser {
            username: username("alice"),
            email: "one@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "One".to_string(),
        })
        .id_typed();
    let second = market
        .register_user(RegisterUser {
            username: username("alice"),
            email: "two@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Two".to_string(),
        })
        .id_typed();

    assert_ne!(first, second);
    assert_eq!(market.users().len(), 2);
    // Lookups and sale attribution go to the first record.
    assert_eq!(market.find_user(&username("alice")).unwrap().id_typed(), first);

    market.record_sale(sale("alice", "bob", 3.0)).unwrap();
    assert_eq!(market.users()[0].sales().len(), 1);
    assert!(market.users()[1].sales().is_empty());
}

#[test]
fn history_includes_both_sides() {
    let mut market = market();
    register(&mut market, "alice");
    register(&mut market, "bob");

    market.record_sale(sale("alice", "bob", 10.0)).unwrap();
    market.record_sale(sale("bob", "alice", 4.0)).unwrap();

    // A user's history mixes purchases and sales.
    let alice = market.buyer_sales(&username("alice"));
    assert_eq!(alice.len(), 2);
    assert_eq!(market.buyer_expenditure(&username("alice")), 14.0);
    assert_eq!(market.seller_sales(&username("bob")).len(), 2);
}

#[test]
fn reviews_are_returned_not_stored() {
    let mut market = market();
    register(&mut market, "alice");

    let review = market.add_review(AddReview {
        buyer_username: username("alice"),
        seller_username: username("bob"),
        rating: 4.5,
        comment: "Quick shipping".to_string(),
        created_at: Utc::now(),
    });

    assert_eq!(review.rating(), 4.5);
    assert_eq!(review.comment(), "Quick shipping");
    assert!(market.buyer_sales(&username("alice")).is_empty());
    assert!(market.store().listings().is_empty());
}

#[test]
fn revenue_sums_listing_prices() {
    let mut market = market();
    market.create_listing(CreateListing::new(item("a", 10.0), username("bob")));
    market.create_listing(CreateListing::new(item("b", 2.5), username("carol")));
    market.create_listing(CreateListing::new(item("c", 7.5), username("bob")));

    assert_eq!(market.store_revenue(), 20.0);
    assert_eq!(market.seller_revenue(&username("bob")), 17.5);
    assert_eq!(market.seller_revenue(&username("carol")), 2.5);
    assert_eq!(market.seller_revenue(&username("dave")), 0.0);
}

#[test]
fn convert_applies_provider_rate() {
    let market = market();
    assert_eq!(market.convert(100.0, Currency::Usd, Currency::Usd).unwrap(), 100.0);
    assert_eq!(
        market.convert(100.0, Currency::Usd, Currency::Eur).unwrap(),
        100.0 * 0.5
    );
}

#[test]
fn convert_fails_when_rate_unavailable() {
    let market = Marketplace::new(Store::default(), Unavailable);
    let err = market.convert(100.0, Currency::Usd, Currency::Eur).unwrap_err();
    assert!(matches!(err, DomainError::RateUnavailable(_)));
    // Identity conversion never reaches the provider.
    assert_eq!(market.convert(5.0, Currency::Cad, Currency::Cad).unwrap(), 5.0);
}

fn seller_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["ann", "ben", "cat", "dan"]).prop_map(str::to_string)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: seller revenue equals the sum of that seller's listing
    /// prices, and per-seller revenues add up to the store total.
    #[test]
    fn seller_revenue_matches_seller_listings(
        listings in prop::collection::vec((seller_name(), 0u32..10_000u32), 0..40)
    ) {
        let mut market = market();
        for (seller, cents) in &listings {
            let price = f64::from(*cents) / 100.0;
            market.create_listing(CreateListing::new(item("x", price), username(seller)));
        }

        let mut total = 0.0;
        for seller in ["ann", "ben", "cat", "dan", "eve"] {
            let name = username(seller);
            let expected: f64 = market
                .seller_listings(&name)
                .iter()
                .map(|l| l.item().price())
                .sum();
            prop_assert_eq!(market.seller_revenue(&name), expected);
            total += expected;
        }

        let store_total = market.store_revenue();
        prop_assert!((store_total - total).abs() < 1e-6);
    }

    /// Property: a filtered search is the subset of the unfiltered one whose
    /// items match the filter, in the same order.
    #[test]
    fn filtered_listings_are_ordered_subset(
        specs in prop::collection::vec(
            (
                prop::option::of(prop::sample::select(Size::ALL.to_vec())),
                prop::sample::select(ItemCondition::ALL.to_vec()),
                prop::option::of(prop::sample::select(Colour::ALL.to_vec())),
            ),
            0..30
        ),
        size in prop::option::of(prop::sample::select(Size::ALL.to_vec())),
        condition in prop::option::of(prop::sample::select(ItemCondition::ALL.to_vec())),
        colour in prop::option::of(prop::sample::select(Colour::ALL.to_vec())),
    ) {
        let mut market = market();
        for (s, c, col) in specs {
            let mut it = Item::new("x", "", c, 1.0, Currency::Usd).unwrap();
            if let Some(s) = s {
                it = it.with_size(s);
            }
            if let Some(col) = col {
                it = it.with_colour(col);
            }
            market.create_listing(CreateListing::new(it, username("ann")));
        }

        let filter = ListingFilter { size, condition, colour };
        let expected: Vec<_> = market
            .store_listings(&ListingFilter::any())
            .into_iter()
            .filter(|l| {
                size.is_none_or(|s| l.item().size() == Some(s))
                    && condition.is_none_or(|c| l.item().condition() == c)
                    && colour.is_none_or(|c| l.item().colour() == Some(c))
            })
            .map(|l| l.id())
            .collect();
        let actual: Vec<_> = market.store_listings(&filter).into_iter().map(|l| l.id()).collect();

        prop_assert_eq!(actual, expected);
    }
}
