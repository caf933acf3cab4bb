//! # gusto-core: Pure Business Logic for Gusto
//!
//! This crate holds the restaurant's records and the rules that connect
//! them. It performs no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Gusto Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/console (stdin / stdout)                   │   │
//! │  │    Menu loop ──► prompts ──► Restaurant calls ──► messages      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gusto-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │ directory │  │  ledger   │  │   money   │  │   │
//! │  │   │ MenuItem  │  │ Customer  │  │   Order   │  │   Money   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • SINGLE OWNER (Restaurant)           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, Customer, Order, OrderStatus)
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Parsing of operator input
//! - [`catalog`], [`directory`], [`ledger`] - The three collections
//! - [`restaurant`] - The aggregate that owns them
//!
//! ## Example Usage
//!
//! ```rust
//! use gusto_core::{Money, OrderStatus, Restaurant};
//!
//! let mut restaurant = Restaurant::new();
//! restaurant.register_customer("Ada", "ada@example.com", "555-0100");
//! restaurant
//!     .add_menu_item("Soup", "Tomato", Money::from_cents(500), "Starters")
//!     .unwrap();
//!
//! let order_id = restaurant.place_order("ada@example.com", "Soup").unwrap();
//! let order = restaurant.order(order_id).unwrap();
//! assert_eq!(order.total_amount.cents(), 500);
//! assert_eq!(order.status, OrderStatus::Pending);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod directory;
pub mod error;
pub mod ledger;
pub mod money;
pub mod restaurant;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use directory::Directory;
pub use error::{CoreError, CoreResult, EntityKind, ValidationError};
pub use ledger::{Ledger, OrderReferences};
pub use money::Money;
pub use restaurant::Restaurant;
pub use types::*;
