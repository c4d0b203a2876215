use std::sync::Arc;

use upcycle_core::{Entity, UserId, Username};
use upcycle_sales::Sale;

/// A registered marketplace user.
///
/// Identity is the record's `UserId`; `username` is the lookup key. The sale
/// history is append-only and may hold sales where the user is the buyer,
/// the seller, or both.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    username: Username,
    email: String,
    first_name: String,
    last_name: String,
    sales: Vec<Arc<Sale>>,
}

impl User {
    /// A freshly registered user with an empty sale history.
    pub fn new(
        username: Username,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(),
            username,
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            sales: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Sales in the order they were recorded.
    pub fn sales(&self) -> &[Arc<Sale>] {
        &self.sales
    }

    pub fn add_sale(&mut self, sale: Arc<Sale>) {
        self.sales.push(sale);
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
