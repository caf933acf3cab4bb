//! # Menu Item Commands
//!
//! ## Add Flow
//! ```text
//! name ──► already in catalog? ──► "Menu item with this name already exists."
//!   │
//!   ▼
//! description ──► price ──► not a positive decimal? ──► "Invalid price."
//!                   │
//!                   ▼
//!               category ──► Catalog::add
//! ```

use std::io::{BufRead, Write};

use gusto_core::validation::parse_price;
use gusto_core::{CoreError, EntityKind};
use tracing::{debug, info};

use crate::console::Console;
use crate::error::{CommandResult, ConsoleError};
use crate::render;

pub fn add<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CommandResult {
    let name = console.prompt.ask("Enter name of menu item:")?;
    if console.restaurant.menu_item(&name).is_some() {
        return Err(CoreError::DuplicateName(name).into());
    }

    let description = console.prompt.ask("Enter description:")?;

    let price_input = console.prompt.ask("Enter price:")?;
    let price = parse_price(&price_input).map_err(|e| {
        debug!(input = %price_input, error = %e, "Rejected price");
        ConsoleError::invalid_price()
    })?;

    let category = console.prompt.ask("Enter category:")?;

    console
        .restaurant
        .add_menu_item(name.as_str(), description, price, category)?;

    info!(name = %name, price = %price, "Menu item added");
    Ok("Menu item added successfully.".to_string())
}

pub fn view<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CommandResult {
    let config = &console.config;
    Ok(render::listing(
        console.restaurant.menu_items(),
        "No menu items available.",
        |item| render::menu_item(config, item),
    ))
}

/// Changes a price. Existing orders keep the price they were placed at.
pub fn update<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CommandResult {
    let name = console.prompt.ask("Enter the name of the item to update:")?;
    if console.restaurant.menu_item(&name).is_none() {
        return Err(CoreError::NotFound {
            entity: EntityKind::MenuItem,
            key: name,
        }
        .into());
    }

    let price_input = console.prompt.ask("Enter new price (greater than 0):")?;
    let price = parse_price(&price_input).map_err(|_| ConsoleError::invalid_price())?;

    console.restaurant.update_menu_item_price(&name, price)?;
    Ok("Menu item updated successfully.".to_string())
}

pub fn delete<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CommandResult {
    let name = console.prompt.ask("Enter the name of the item to delete:")?;
    console.restaurant.delete_menu_item(&name)?;
    Ok("Menu item deleted successfully.".to_string())
}
