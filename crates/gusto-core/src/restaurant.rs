//! # Restaurant
//!
//! The single owner of all in-memory state.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Restaurant                                      │
//! │                                                                         │
//! │   ┌──────────────┐      ┌──────────────┐      ┌──────────────┐         │
//! │   │   Catalog    │      │  Directory   │      │    Ledger    │         │
//! │   │  menu items  │      │  customers   │      │    orders    │         │
//! │   └──────┬───────┘      └──────┬───────┘      └──────┬───────┘         │
//! │          │ delete(name, &ledger)│ delete(id, &ledger)│                  │
//! │          └──────────────────────┴────► OrderReferences ◄┘              │
//! │                                                                         │
//! │   place_order reads Directory + Catalog, writes Ledger                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each method borrows only the collections it needs, so the reference
//! checks can read the ledger while the catalog or directory is mutated.

use chrono::{DateTime, Local};

use crate::catalog::Catalog;
use crate::directory::Directory;
use crate::error::CoreResult;
use crate::ledger::Ledger;
use crate::money::Money;
use crate::types::{Customer, CustomerId, MenuItem, Order, OrderId, OrderStatus};

/// Menu items, customers and orders for one restaurant.
#[derive(Debug, Clone, Default)]
pub struct Restaurant {
    catalog: Catalog,
    directory: Directory,
    ledger: Ledger,
}

impl Restaurant {
    pub fn new() -> Self {
        Restaurant::default()
    }

    // =========================================================================
    // Menu Items
    // =========================================================================

    pub fn add_menu_item(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> CoreResult<()> {
        self.catalog.add(MenuItem::new(name, description, price, category))
    }

    pub fn menu_items(&self) -> Vec<&MenuItem> {
        self.catalog.list()
    }

    pub fn menu_item(&self, name: &str) -> Option<&MenuItem> {
        self.catalog.get(name)
    }

    pub fn update_menu_item_price(&mut self, name: &str, new_price: Money) -> CoreResult<()> {
        self.catalog.update_price(name, new_price)
    }

    pub fn delete_menu_item(&mut self, name: &str) -> CoreResult<MenuItem> {
        self.catalog.delete(name, &self.ledger)
    }

    // =========================================================================
    // Customers
    // =========================================================================

    pub fn register_customer(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> CustomerId {
        self.directory.register(name, email, phone_number)
    }

    pub fn customers(&self) -> Vec<&Customer> {
        self.directory.list()
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.directory.get(id)
    }

    pub fn customer_by_email(&self, email: &str) -> Option<&Customer> {
        self.directory.find_by_email(email)
    }

    pub fn update_customer(
        &mut self,
        id: CustomerId,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> CoreResult<()> {
        self.directory.update(id, email, phone_number)
    }

    pub fn delete_customer(&mut self, id: CustomerId) -> CoreResult<Customer> {
        self.directory.delete(id, &self.ledger)
    }

    // =========================================================================
    // Orders
    // =========================================================================

    pub fn place_order(&mut self, customer_email: &str, item_names: &str) -> CoreResult<OrderId> {
        self.ledger
            .place_order(&self.directory, &self.catalog, customer_email, item_names)
    }

    pub fn place_order_at(
        &mut self,
        customer_email: &str,
        item_names: &str,
        placed_at: DateTime<Local>,
    ) -> CoreResult<OrderId> {
        self.ledger
            .place_order_at(&self.directory, &self.catalog, customer_email, item_names, placed_at)
    }

    pub fn orders(&self) -> Vec<&Order> {
        self.ledger.list()
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.ledger.get(id)
    }

    pub fn check_order_status_writable(&self, id: OrderId) -> CoreResult<&Order> {
        self.ledger.check_status_writable(id)
    }

    pub fn update_order_status(&mut self, id: OrderId, label: &str) -> CoreResult<OrderStatus> {
        self.ledger.update_status(id, label)
    }

    pub fn cancel_order(&mut self, id: OrderId) -> CoreResult<Order> {
        self.ledger.cancel(id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, EntityKind};

    #[test]
    fn test_soup_scenario() {
        let mut restaurant = Restaurant::new();
        restaurant.register_customer("A", "a@x.com", "");
        restaurant
            .add_menu_item("Soup", "", "5.00".parse().unwrap(), "Starters")
            .unwrap();

        let id = restaurant.place_order("a@x.com", "Soup").unwrap();
        let order = restaurant.order(id).unwrap();
        assert_eq!(order.total_amount, Money::from_cents(500));
        assert_eq!(order.status, OrderStatus::Pending);

        assert_eq!(restaurant.update_order_status(id, "Completed").unwrap(), OrderStatus::Completed);
        assert!(matches!(
            restaurant.update_order_status(id, "Delivered"),
            Err(CoreError::OrderImmutable { .. })
        ));
    }

    #[test]
    fn test_menu_item_in_order_cannot_be_deleted() {
        let mut restaurant = Restaurant::new();
        restaurant.register_customer("A", "a@x.com", "");
        restaurant
            .add_menu_item("Soup", "", Money::from_cents(500), "Starters")
            .unwrap();
        let id = restaurant.place_order("a@x.com", "Soup").unwrap();

        assert!(matches!(
            restaurant.delete_menu_item("Soup"),
            Err(CoreError::InUse { entity: EntityKind::MenuItem, .. })
        ));
        assert!(restaurant.menu_item("Soup").is_some());

        restaurant.cancel_order(id).unwrap();
        restaurant.delete_menu_item("Soup").unwrap();
        assert!(restaurant.menu_item("Soup").is_none());
    }

    #[test]
    fn test_customer_deletable_once_orders_are_gone() {
        let mut restaurant = Restaurant::new();
        let customer = restaurant.register_customer("A", "a@x.com", "");
        restaurant
            .add_menu_item("Soup", "", Money::from_cents(500), "Starters")
            .unwrap();
        let first = restaurant.place_order("a@x.com", "Soup").unwrap();
        let second = restaurant.place_order("a@x.com", "Soup").unwrap();

        assert!(matches!(
            restaurant.delete_customer(customer),
            Err(CoreError::InUse { entity: EntityKind::Customer, .. })
        ));

        restaurant.cancel_order(first).unwrap();
        assert!(restaurant.delete_customer(customer).is_err());

        restaurant.cancel_order(second).unwrap();
        let removed = restaurant.delete_customer(customer).unwrap();
        assert_eq!(removed.email, "a@x.com");
        assert!(restaurant.customers().is_empty());
    }

    #[test]
    fn test_updated_email_is_used_for_new_orders() {
        let mut restaurant = Restaurant::new();
        let id = restaurant.register_customer("A", "old@x.com", "");
        restaurant
            .add_menu_item("Tea", "", Money::from_cents(300), "Drinks")
            .unwrap();

        restaurant.update_customer(id, "new@x.com", "555").unwrap();

        assert!(matches!(
            restaurant.place_order("old@x.com", "Tea"),
            Err(CoreError::CustomerNotFound(_))
        ));
        assert!(restaurant.place_order("new@x.com", "Tea").is_ok());
        assert_eq!(restaurant.customer_by_email("new@x.com").unwrap().phone_number, "555");
    }
}
