//! # Ledger
//!
//! Orders, keyed by sequential ID, and the rules that govern them.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Operations                                     │
//! │                                                                         │
//! │  place_order(email, "Soup, Bread")                                     │
//! │       │                                                                 │
//! │       ├── email unknown?          → CustomerNotFound                   │
//! │       ├── no names match catalog? → NoValidItems                       │
//! │       └── OK → Order { Pending, items copied, total summed }           │
//! │                                                                         │
//! │  update_status(id, "Delivered")                                        │
//! │       │                                                                 │
//! │       ├── id unknown?             → OrderNotFound                      │
//! │       ├── status not writable?    → OrderImmutable  (Completed)        │
//! │       ├── label unknown?          → InvalidStatus                      │
//! │       └── OK → status overwritten (any label, no transition graph)     │
//! │                                                                         │
//! │  cancel(id)                                                            │
//! │       │                                                                 │
//! │       ├── id unknown?             → OrderNotFound                      │
//! │       ├── not cancellable?        → OrderImmutable  (Delivered)        │
//! │       └── OK → order removed                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Listing Order
//! `list()` sorts by the `order_date` *string*, newest first. Because the
//! string starts with the month abbreviation, "Mar 01, 2024" sorts ahead of
//! "Feb 01, 2025". Callers relying on true chronology should sort on
//! `placed_at` themselves.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::directory::Directory;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CustomerId, Order, OrderId, OrderStatus, ORDER_DATE_FORMAT};
use crate::validation::parse_item_names;

// =============================================================================
// Reference Queries
// =============================================================================

/// Read-only questions the catalog and directory ask before deleting.
///
/// The [`Ledger`] is the production implementation. Taking this trait
/// instead of the ledger itself keeps the catalog and directory unaware of
/// how orders are stored.
pub trait OrderReferences {
    /// True if any order contains a menu item with this name.
    fn references_menu_item(&self, name: &str) -> bool;

    /// True if any order belongs to this customer.
    fn has_orders_for(&self, customer_id: CustomerId) -> bool;
}

// =============================================================================
// Ledger
// =============================================================================

/// All orders currently on file.
#[derive(Debug, Clone)]
pub struct Ledger {
    orders: BTreeMap<OrderId, Order>,
    next_id: OrderId,
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger {
            orders: BTreeMap::new(),
            next_id: OrderId::FIRST,
        }
    }
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Places an order stamped with the current local time.
    ///
    /// See [`Ledger::place_order_at`].
    pub fn place_order(
        &mut self,
        directory: &Directory,
        catalog: &Catalog,
        customer_email: &str,
        item_names: &str,
    ) -> CoreResult<OrderId> {
        self.place_order_at(directory, catalog, customer_email, item_names, Local::now())
    }

    /// Places an order for the first customer with `customer_email`.
    ///
    /// ## How It Works
    /// 1. Finds the customer by exact email (first match wins)
    /// 2. Splits `item_names` on commas and trims each token
    /// 3. Copies the catalog items whose names were given; unknown names
    ///    are dropped without error
    /// 4. Sums the copied prices into `total_amount`
    ///
    /// ## Errors
    /// - `CustomerNotFound` if no customer has that email
    /// - `NoValidItems` if no token matched a menu item
    /// - `TotalOverflow` if the prices do not fit in one `Money`
    pub fn place_order_at(
        &mut self,
        directory: &Directory,
        catalog: &Catalog,
        customer_email: &str,
        item_names: &str,
        placed_at: DateTime<Local>,
    ) -> CoreResult<OrderId> {
        let customer = directory
            .find_by_email(customer_email)
            .ok_or_else(|| CoreError::CustomerNotFound(customer_email.to_string()))?;

        let names = parse_item_names(item_names);
        let items = catalog.select(&names);
        if items.is_empty() {
            warn!(requested = ?names, "No requested item matched the catalog");
            return Err(CoreError::NoValidItems(item_names.to_string()));
        }
        debug!(requested = names.len(), matched = items.len(), "Matched order items");

        let total_amount = items
            .iter()
            .try_fold(Money::zero(), |total, item| total.checked_add(item.price))
            .ok_or(CoreError::TotalOverflow)?;

        let id = self.next_id;
        self.next_id = id.next();

        let order = Order {
            id,
            customer_id: customer.id,
            customer_name: customer.name.clone(),
            items,
            total_amount,
            status: OrderStatus::Pending,
            order_date: placed_at.format(ORDER_DATE_FORMAT).to_string(),
            placed_at,
        };

        info!(
            order_id = %id,
            customer_id = %customer.id,
            total = %total_amount,
            "Placed order"
        );
        self.orders.insert(id, order);
        Ok(id)
    }

    /// Lists orders by `order_date` string, descending. Ties keep ID order.
    pub fn list(&self) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self.orders.values().collect();
        orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        debug!(count = orders.len(), "Listed orders");
        orders
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// Checks that the order exists and its status may still be written.
    ///
    /// The console calls this before asking for the new status label.
    pub fn check_status_writable(&self, id: OrderId) -> CoreResult<&Order> {
        let order = self.orders.get(&id).ok_or(CoreError::OrderNotFound(id))?;

        if !order.status.permissions().status_writable {
            return Err(CoreError::OrderImmutable {
                order_id: id,
                status: order.status,
            });
        }

        Ok(order)
    }

    /// Overwrites the status of an order with the status named by `label`.
    ///
    /// Any writable status may move to any of the four labels, including
    /// back to Pending.
    pub fn update_status(&mut self, id: OrderId, label: &str) -> CoreResult<OrderStatus> {
        self.check_status_writable(id)?;

        let new_status: OrderStatus = label
            .parse()
            .map_err(|_| CoreError::InvalidStatus(label.to_string()))?;

        let order = self.orders.get_mut(&id).ok_or(CoreError::OrderNotFound(id))?;
        info!(order_id = %id, from = %order.status, to = %new_status, "Updated order status");
        order.status = new_status;
        Ok(new_status)
    }

    /// Removes an order unless its status forbids cancellation.
    pub fn cancel(&mut self, id: OrderId) -> CoreResult<Order> {
        let status = self
            .orders
            .get(&id)
            .map(|order| order.status)
            .ok_or(CoreError::OrderNotFound(id))?;

        if !status.permissions().cancellable {
            warn!(order_id = %id, %status, "Refused to cancel order");
            return Err(CoreError::OrderImmutable { order_id: id, status });
        }

        info!(order_id = %id, "Cancelled order");
        self.orders.remove(&id).ok_or(CoreError::OrderNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl OrderReferences for Ledger {
    fn references_menu_item(&self, name: &str) -> bool {
        self.orders.values().any(|order| order.contains_item(name))
    }

    fn has_orders_for(&self, customer_id: CustomerId) -> bool {
        self.orders.values().any(|order| order.customer_id == customer_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
