//! # Console Error Types
//!
//! What the operator sees when an operation is refused.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Gusto                                  │
//! │                                                                         │
//! │  Command (commands/*.rs)                                                │
//! │  Result<String, CommandError>                                          │
//! │         │                                                               │
//! │         ├── CoreError ─────► ConsoleError ──► printed, back to menu    │
//! │         │                                                               │
//! │         ├── bad number ────► ConsoleError ──► printed, back to menu    │
//! │         │                                                               │
//! │         └── io::Error ─────► propagated, process exits non-zero        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::io;

use gusto_core::{CoreError, EntityKind, OrderStatus};
use thiserror::Error;

/// A refused operation, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleError {
    /// Machine-readable error code (logged, not printed)
    pub code: ErrorCode,

    /// Human-readable message for the operator
    pub message: String,
}

/// Error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Menu selection was not a listed number
    InvalidOption,

    /// A record with this key already exists
    Duplicate,

    /// Typed value failed a type or positivity check
    ValidationError,

    /// Menu item, customer or order does not exist
    NotFound,

    /// Delete refused because an order references the record
    InUse,

    /// Order status forbids the operation
    Immutable,
}

impl ConsoleError {
    /// Creates a new console error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ConsoleError {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_option() -> Self {
        ConsoleError::new(ErrorCode::InvalidOption, "Invalid option.")
    }

    pub fn invalid_price() -> Self {
        ConsoleError::new(ErrorCode::ValidationError, "Invalid price.")
    }

    pub fn order_not_found() -> Self {
        ConsoleError::new(ErrorCode::NotFound, "Order not found.")
    }

    pub fn customer_not_found() -> Self {
        ConsoleError::new(ErrorCode::NotFound, "Customer not found.")
    }
}

/// Maps each domain rule to the message the operator reads.
impl From<CoreError> for ConsoleError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DuplicateName(_) => {
                ConsoleError::new(ErrorCode::Duplicate, "Menu item with this name already exists.")
            }
            CoreError::InvalidPrice(_) => ConsoleError::invalid_price(),
            CoreError::NotFound {
                entity: EntityKind::MenuItem,
                ..
            } => ConsoleError::new(ErrorCode::NotFound, "Menu item not found."),
            CoreError::NotFound {
                entity: EntityKind::Customer,
                ..
            } => ConsoleError::customer_not_found(),
            CoreError::InUse {
                entity: EntityKind::MenuItem,
                ..
            } => ConsoleError::new(
                ErrorCode::InUse,
                "Cannot delete menu item. It is part of an active order.",
            ),
            CoreError::InUse {
                entity: EntityKind::Customer,
                ..
            } => ConsoleError::new(ErrorCode::InUse, "Cannot delete customer. They have active orders."),
            CoreError::CustomerNotFound(_) => ConsoleError::customer_not_found(),
            CoreError::NoValidItems(_) => ConsoleError::new(ErrorCode::NotFound, "No valid items found."),
            CoreError::OrderNotFound(_) => ConsoleError::order_not_found(),
            CoreError::OrderImmutable {
                status: OrderStatus::Completed,
                ..
            } => ConsoleError::new(ErrorCode::Immutable, "Cannot update a completed order."),
            CoreError::OrderImmutable {
                status: OrderStatus::Delivered,
                ..
            } => ConsoleError::new(ErrorCode::Immutable, "Cannot cancel a delivered order."),
            err @ CoreError::OrderImmutable { .. } => {
                ConsoleError::new(ErrorCode::Immutable, format!("{}.", err))
            }
            CoreError::InvalidStatus(_) => ConsoleError::new(ErrorCode::ValidationError, "Invalid status."),
            CoreError::TotalOverflow => {
                ConsoleError::new(ErrorCode::ValidationError, "Order total is too large.")
            }
            CoreError::Validation(e) => ConsoleError::new(ErrorCode::ValidationError, format!("{}.", e)),
        }
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ConsoleError {}

// =============================================================================
// Command Error
// =============================================================================

/// Failure of a single console command.
///
/// `Rejected` is shown to the operator; `Io` ends the session.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Rejected(ConsoleError),

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl From<ConsoleError> for CommandError {
    fn from(err: ConsoleError) -> Self {
        CommandError::Rejected(err)
    }
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        CommandError::Rejected(err.into())
    }
}

/// Outcome of a command: the confirmation or listing to print.
pub type CommandResult = Result<String, CommandError>;
