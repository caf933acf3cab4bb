//! # Order Commands
//!
//! ## Status Update Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Enter order ID to update:"                                           │
//! │       │                                                                 │
//! │       ├── not a whole number ──────────► "Order not found."            │
//! │       ├── no such order ───────────────► "Order not found."            │
//! │       ├── order is Completed ──────────► "Cannot update a completed    │
//! │       │                                   order."                       │
//! │       ▼                                                                 │
//! │  "Enter new status (...)"                                              │
//! │       │                                                                 │
//! │       ├── not an exact label ──────────► "Invalid status."             │
//! │       ▼                                                                 │
//! │  Ledger::update_status                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use gusto_core::{CoreError, OrderId};
use tracing::info;

use crate::console::Console;
use crate::error::{CommandError, CommandResult, ConsoleError};
use crate::render;

/// Reads an order ID. Anything unparseable is reported like an unknown order.
fn ask_order_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    question: &str,
) -> Result<OrderId, CommandError> {
    let input = console.prompt.ask(question)?;
    input
        .parse()
        .map_err(|_| ConsoleError::order_not_found().into())
}

pub fn place<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CommandResult {
    let email = console.prompt.ask("Enter customer email:")?;
    if console.restaurant.customer_by_email(&email).is_none() {
        return Err(CoreError::CustomerNotFound(email).into());
    }

    let item_names = console
        .prompt
        .ask("Enter menu item names separated by commas:")?;
    let order_id = console.restaurant.place_order(&email, &item_names)?;

    Ok(format!("Order placed successfully. Order ID: {}", order_id))
}

pub fn view<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CommandResult {
    let config = &console.config;
    Ok(render::listing(
        console.restaurant.orders(),
        "No orders placed.",
        |order| render::order(config, order),
    ))
}

pub fn update_status<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CommandResult {
    let order_id = ask_order_id(console, "Enter order ID to update:")?;
    console.restaurant.check_order_status_writable(order_id)?;

    let label = console
        .prompt
        .ask("Enter new status (Pending, In Progress, Completed, Delivered):")?;
    let status = console.restaurant.update_order_status(order_id, &label)?;

    info!(order_id = %order_id, status = %status, "Order status changed from console");
    Ok("Order status updated successfully.".to_string())
}

pub fn cancel<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CommandResult {
    let order_id = ask_order_id(console, "Enter order ID to cancel:")?;
    console.restaurant.cancel_order(order_id)?;
    Ok("Order canceled successfully.".to_string())
}
