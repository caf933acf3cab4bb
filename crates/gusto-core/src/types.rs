//! # Domain Types
//!
//! Core domain types used throughout Gusto.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │    Customer     │   │      Order      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name (key)     │   │  id (seq)       │   │  id (seq)       │       │
//! │  │  description    │   │  name           │   │  customer_id    │       │
//! │  │  price (Money)  │   │  email (lookup) │   │  items (frozen) │       │
//! │  │  category       │   │  phone_number   │   │  total_amount   │       │
//! │  └─────────────────┘   └─────────────────┘   │  status         │       │
//! │                                              │  order_date     │       │
//! │                                              └─────────────────┘       │
//! │                                                                         │
//! │  OrderStatus: Pending ─ In Progress ─ Completed ─ Delivered            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! - Menu items are keyed by name.
//! - Customers and orders get sequential IDs starting at 1, never reused.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;

/// chrono format for `Order::order_date` ("Mar 05, 2024 14:30").
pub const ORDER_DATE_FORMAT: &str = "%b %d, %Y %H:%M";

// =============================================================================
// Identifiers
// =============================================================================

/// Sequential customer identifier, assigned by the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CustomerId(u32);

impl CustomerId {
    pub const FIRST: CustomerId = CustomerId(1);

    #[inline]
    pub const fn new(id: u32) -> Self {
        CustomerId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    pub(crate) const fn next(&self) -> Self {
        CustomerId(self.0 + 1)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CustomerId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(CustomerId)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "customer id".to_string(),
                reason: format!("'{}' is not a whole number", s),
            })
    }
}

/// Sequential order identifier, assigned by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(u32);

impl OrderId {
    pub const FIRST: OrderId = OrderId(1);

    #[inline]
    pub const fn new(id: u32) -> Self {
        OrderId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    pub(crate) const fn next(&self) -> Self {
        OrderId(self.0 + 1)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(OrderId)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "order id".to_string(),
                reason: format!("'{}' is not a whole number", s),
            })
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A dish on the menu.
///
/// Orders hold clones of these, so a clone is also the "snapshot" type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique within the catalog.
    pub name: String,
    pub description: String,
    /// Always positive while in the catalog.
    pub price: Money,
    pub category: String,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        MenuItem {
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    /// Used to find the customer when placing an order. Not unique.
    pub email: String,
    pub phone_number: String,
}

// =============================================================================
// Order Status
// =============================================================================

/// The lifecycle status of an order.
///
/// There is no transition graph: any writable status may be overwritten with
/// any other. What each status forbids lives in [`StatusPermissions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Delivered,
}

impl OrderStatus {
    /// Every status, in declaration order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Completed,
        OrderStatus::Delivered,
    ];

    /// The literal label operators type and see.
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Completed => "Completed",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// Looks up this status's row in [`STATUS_PERMISSIONS`].
    pub const fn permissions(&self) -> StatusPermissions {
        STATUS_PERMISSIONS[*self as usize].1
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Exact, case-sensitive match against the four labels.
impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: OrderStatus::ALL.iter().map(|s| s.label().to_string()).collect(),
            })
    }
}

// =============================================================================
// Status Permissions
// =============================================================================

/// What an order in a given status still allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPermissions {
    /// The status may be overwritten.
    pub status_writable: bool,
    /// The order may be cancelled (removed from the ledger).
    pub cancellable: bool,
}

/// Per-status policy table. Rows are in `OrderStatus` declaration order.
///
/// ```text
/// status        status_writable   cancellable
/// ───────────   ───────────────   ───────────
/// Pending             yes             yes
/// In Progress         yes             yes
/// Completed           NO              yes
/// Delivered           yes             NO
/// ```
///
/// Completed and Delivered each block exactly one operation; neither is a
/// full terminal state.
pub const STATUS_PERMISSIONS: [(OrderStatus, StatusPermissions); 4] = [
    (
        OrderStatus::Pending,
        StatusPermissions { status_writable: true, cancellable: true },
    ),
    (
        OrderStatus::InProgress,
        StatusPermissions { status_writable: true, cancellable: true },
    ),
    (
        OrderStatus::Completed,
        StatusPermissions { status_writable: false, cancellable: true },
    ),
    (
        OrderStatus::Delivered,
        StatusPermissions { status_writable: true, cancellable: false },
    ),
];

// =============================================================================
// Order
// =============================================================================

/// A customer's order.
///
/// `items` are copies taken when the order was placed, and `total_amount` is
/// their sum at that moment. Neither follows later catalog edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    /// Customer names cannot be edited, so this copy never goes stale.
    pub customer_name: String,
    pub items: Vec<MenuItem>,
    pub total_amount: Money,
    pub status: OrderStatus,
    /// `placed_at` rendered with [`ORDER_DATE_FORMAT`].
    pub order_date: String,
    pub placed_at: DateTime<Local>,
}

impl Order {
    /// Checks whether a menu item with this name is part of the order.
    pub fn contains_item(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_round_trip_through_from_str() {
        for status in OrderStatus::ALL {
            assert_eq!(status.label().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_parse_is_exact() {
        assert!("pending".parse::<OrderStatus>().is_err());
        assert!("InProgress".parse::<OrderStatus>().is_err());
        assert!("In  Progress".parse::<OrderStatus>().is_err());
        assert!(" Completed".parse::<OrderStatus>().is_err());
        assert!("".parse::<OrderStatus>().is_err());

        let err = "Done".parse::<OrderStatus>().unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { ref allowed, .. } if allowed.len() == 4));
    }

    #[test]
    fn test_status_serializes_with_labels() {
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");

        let parsed: OrderStatus = serde_json::from_str("\"Delivered\"").unwrap();
        assert_eq!(parsed, OrderStatus::Delivered);
    }

    #[test]
    fn test_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_permission_rows_match_declaration_order() {
        for (index, status) in OrderStatus::ALL.iter().enumerate() {
            assert_eq!(STATUS_PERMISSIONS[index].0, *status);
        }
    }

    #[test]
    fn test_permission_table() {
        assert!(OrderStatus::Pending.permissions().status_writable);
        assert!(OrderStatus::Pending.permissions().cancellable);
        assert!(OrderStatus::InProgress.permissions().status_writable);
        assert!(OrderStatus::InProgress.permissions().cancellable);

        // Completed: frozen status, still cancellable
        assert!(!OrderStatus::Completed.permissions().status_writable);
        assert!(OrderStatus::Completed.permissions().cancellable);

        // Delivered: status still writable, cannot be cancelled
        assert!(OrderStatus::Delivered.permissions().status_writable);
        assert!(!OrderStatus::Delivered.permissions().cancellable);
    }

    #[test]
    fn test_id_parsing() {
        assert_eq!("7".parse::<CustomerId>().unwrap(), CustomerId::new(7));
        assert_eq!("12".parse::<OrderId>().unwrap(), OrderId::new(12));
        assert!(" 12 ".parse::<OrderId>().is_err());
        assert!("7\t".parse::<CustomerId>().is_err());
        assert!("-1".parse::<OrderId>().is_err());
        assert!("abc".parse::<CustomerId>().is_err());
        assert!("".parse::<OrderId>().is_err());
    }

    #[test]
    fn test_ids_advance() {
        assert_eq!(CustomerId::FIRST.next().get(), 2);
        assert_eq!(OrderId::FIRST.next().to_string(), "2");
    }
}
