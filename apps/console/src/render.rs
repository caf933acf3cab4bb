//! Text layouts for listings.

use gusto_core::{Customer, MenuItem, Order};

use crate::config::ConsoleConfig;

/// `Soup (Starters) - Tomato: $5.00`
pub fn menu_item(config: &ConsoleConfig, item: &MenuItem) -> String {
    format!(
        "{} ({}) - {}: {}",
        item.name,
        item.category,
        item.description,
        config.format_money(item.price)
    )
}

/// `Customer ID: 1, Name: Ada, Email: ada@x.com, Phone: 555-0100`
pub fn customer(customer: &Customer) -> String {
    format!(
        "Customer ID: {}, Name: {}, Email: {}, Phone: {}",
        customer.id, customer.name, customer.email, customer.phone_number
    )
}

/// Header line, one line per item, the total, then a blank line.
pub fn order(config: &ConsoleConfig, order: &Order) -> String {
    let items: String = order
        .items
        .iter()
        .map(|item| format!("- {}: {}\n", item.name, config.format_money(item.price)))
        .collect();

    format!(
        "Order {} for {} - {} on {}\n{}Total: {}\n",
        order.id,
        order.customer_name,
        order.status,
        order.order_date,
        items,
        config.format_money(order.total_amount)
    )
}

/// Joins rendered records, or returns `empty` when there are none.
pub fn listing<T>(records: Vec<T>, empty: &str, render: impl Fn(T) -> String) -> String {
    if records.is_empty() {
        return empty.to_string();
    }
    records.into_iter().map(render).collect::<Vec<_>>().join("\n")
}
