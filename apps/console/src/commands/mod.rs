//! # Console Commands
//!
//! One function per submenu entry.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── menu_items.rs  ◄─── Add, view, reprice, delete menu items
//! ├── orders.rs      ◄─── Place, view, update status, cancel orders
//! └── customers.rs   ◄─── Register, view, update, delete customers
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Console::manage_*                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn add<R, W>(console: &mut Console<R, W>) -> CommandResult            │
//! │         │                                                               │
//! │         ├── console.prompt.ask(...)   ◄── one question per field       │
//! │         │                                                               │
//! │         ├── early lookup fails? ──► Err, remaining questions skipped   │
//! │         │                                                               │
//! │         └── console.restaurant.*(...)                                  │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │  Ok(confirmation) or Err(CommandError) ──► Console::report             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookups that the operator would otherwise only learn about after typing
//! every field are checked as soon as the key is known.

pub mod customers;
pub mod menu_items;
pub mod orders;
