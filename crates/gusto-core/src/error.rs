//! # Error Types
//!
//! Domain-specific error types for gusto-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gusto-core errors (this file)                                         │
//! │  ├── CoreError        - Referential integrity and lifecycle rules      │
//! │  └── ValidationError  - Input parsing failures                         │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── ConsoleError     - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ConsoleError → stdout             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is recoverable: the console prints it and shows the menu
//! again.

use thiserror::Error;

use crate::money::Money;
use crate::types::{CustomerId, OrderId, OrderStatus};

// =============================================================================
// Entity Kind
// =============================================================================

/// Which collection a `NotFound` or `InUse` error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    MenuItem,
    Customer,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::MenuItem => f.write_str("Menu item"),
            EntityKind::Customer => f.write_str("Customer"),
        }
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised by the catalog, directory and ledger.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A menu item with this name already exists.
    #[error("Menu item '{0}' already exists")]
    DuplicateName(String),

    /// Price was zero or negative.
    #[error("Price must be greater than zero, got {0}")]
    InvalidPrice(Money),

    /// No menu item or customer with this key.
    #[error("{entity} not found: {key}")]
    NotFound { entity: EntityKind, key: String },

    /// Delete refused because an order still references the target.
    ///
    /// ## When This Occurs
    /// - Deleting a menu item that appears in any order
    /// - Deleting a customer who has any order on file
    #[error("{entity} {key} is referenced by an order")]
    InUse { entity: EntityKind, key: String },

    /// No customer has this email.
    #[error("No customer with email '{0}'")]
    CustomerNotFound(String),

    /// None of the requested item names matched the catalog.
    #[error("No valid menu items in '{0}'")]
    NoValidItems(String),

    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// The order's status forbids the requested operation.
    ///
    /// ## When This Occurs
    /// - Updating the status of a Completed order
    /// - Cancelling a Delivered order
    #[error("Order {order_id} is {status}, cannot perform operation")]
    OrderImmutable { order_id: OrderId, status: OrderStatus },

    /// Status text is not one of the four labels.
    #[error("Invalid status '{0}'")]
    InvalidStatus(String),

    /// The summed item prices do not fit in `Money`.
    #[error("Order total overflows")]
    TotalOverflow,

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    pub(crate) fn menu_item_not_found(name: &str) -> Self {
        CoreError::NotFound {
            entity: EntityKind::MenuItem,
            key: name.to_string(),
        }
    }

    pub(crate) fn customer_not_found(id: CustomerId) -> Self {
        CoreError::NotFound {
            entity: EntityKind::Customer,
            key: id.to_string(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Produced while turning operator text into typed values.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value exceeds the allowed maximum.
    #[error("{field} must not exceed {max}")]
    TooLarge { field: String, max: String },

    /// Invalid format (e.g., not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
