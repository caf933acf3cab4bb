//! # Catalog
//!
//! The menu: every dish the restaurant sells, keyed by name.
//!
//! ## Key Operations
//! - Add with duplicate-name and positive-price checks
//! - List grouped by category
//! - Price updates in place
//! - Delete, refused while any order references the item
//!
//! ## Price Updates vs. Orders
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  catalog: Soup $5.00                                                    │
//! │       │                                                                 │
//! │       ├──► place_order ──► Order #1 holds its own copy: Soup $5.00     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  update_price("Soup", $6.00)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  catalog: Soup $6.00        Order #1 still: Soup $5.00, total $5.00    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult, EntityKind};
use crate::ledger::OrderReferences;
use crate::money::Money;
use crate::types::MenuItem;
use crate::validation::validate_price;

/// The restaurant's menu items, in insertion order.
///
/// ## Invariants
/// - Names are unique
/// - Every price is positive
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Adds a new menu item.
    ///
    /// ## Errors
    /// - `DuplicateName` if the name is taken (checked first)
    /// - `InvalidPrice` if the price is not positive
    pub fn add(&mut self, item: MenuItem) -> CoreResult<()> {
        if self.contains(&item.name) {
            warn!(name = %item.name, "Rejected duplicate menu item");
            return Err(CoreError::DuplicateName(item.name));
        }

        validate_price(item.price).map_err(|_| CoreError::InvalidPrice(item.price))?;

        info!(name = %item.name, price = %item.price, category = %item.category, "Added menu item");
        self.items.push(item);
        Ok(())
    }

    /// Lists all items ordered by category.
    ///
    /// The sort is stable, so items within a category keep insertion order.
    pub fn list(&self) -> Vec<&MenuItem> {
        let mut items: Vec<&MenuItem> = self.items.iter().collect();
        items.sort_by(|a, b| a.category.cmp(&b.category));
        debug!(count = items.len(), "Listed menu items");
        items
    }

    pub fn get(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Changes the price of an existing item.
    ///
    /// Orders already placed keep the price they were placed at.
    pub fn update_price(&mut self, name: &str, new_price: Money) -> CoreResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.name == name)
            .ok_or_else(|| CoreError::menu_item_not_found(name))?;

        validate_price(new_price).map_err(|_| CoreError::InvalidPrice(new_price))?;

        info!(name = %name, old_price = %item.price, new_price = %new_price, "Updated menu item price");
        item.price = new_price;
        Ok(())
    }

    /// Removes an item unless an order still contains it.
    ///
    /// ## Errors
    /// - `NotFound` if no item has this name
    /// - `InUse` if `references` reports an order containing it
    pub fn delete(&mut self, name: &str, references: &impl OrderReferences) -> CoreResult<MenuItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| CoreError::menu_item_not_found(name))?;

        if references.references_menu_item(name) {
            warn!(name = %name, "Refused to delete menu item referenced by an order");
            return Err(CoreError::InUse {
                entity: EntityKind::MenuItem,
                key: name.to_string(),
            });
        }

        info!(name = %name, "Deleted menu item");
        Ok(self.items.remove(index))
    }

    /// Copies the items whose name appears in `names`.
    ///
    /// Results follow catalog order, each item at most once. Unknown names
    /// are ignored.
    pub fn select(&self, names: &[String]) -> Vec<MenuItem> {
        self.items
            .iter()
            .filter(|item| names.contains(&item.name))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CustomerId;

    /// Reference query that reports a fixed set of names as in use.
    struct Referenced(Vec<&'static str>);

    impl OrderReferences for Referenced {
        fn references_menu_item(&self, name: &str) -> bool {
            self.0.contains(&name)
        }

        fn has_orders_for(&self, _customer_id: CustomerId) -> bool {
            false
        }
    }

    fn item(name: &str, cents: i64, category: &str) -> MenuItem {
        MenuItem::new(name, format!("{} description", name), Money::from_cents(cents), category)
    }

    #[test]
    fn test_add_then_get_returns_exact_price() {
        let mut catalog = Catalog::new();
        catalog.add(item("Soup", 500, "Starters")).unwrap();

        let soup = catalog.get("Soup").unwrap();
        assert_eq!(soup.price, Money::from_cents(500));
        assert_eq!(soup.category, "Starters");
    }

    #[test]
    fn test_add_duplicate_leaves_catalog_unchanged() {
        let mut catalog = Catalog::new();
        catalog.add(item("Soup", 500, "Starters")).unwrap();

        let result = catalog.add(item("Soup", 900, "Mains"));
        assert!(matches!(result, Err(CoreError::DuplicateName(ref name)) if name == "Soup"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Soup").unwrap().price.cents(), 500);
    }

    #[test]
    fn test_duplicate_is_reported_before_bad_price() {
        let mut catalog = Catalog::new();
        catalog.add(item("Soup", 500, "Starters")).unwrap();

        let result = catalog.add(item("Soup", 0, "Starters"));
        assert!(matches!(result, Err(CoreError::DuplicateName(_))));
    }

    #[test]
    fn test_add_rejects_non_positive_price() {
        let mut catalog = Catalog::new();

        assert!(matches!(catalog.add(item("Water", 0, "Drinks")), Err(CoreError::InvalidPrice(_))));
        assert!(matches!(catalog.add(item("Water", -100, "Drinks")), Err(CoreError::InvalidPrice(_))));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_list_sorts_by_category_and_keeps_insertion_order() {
        let mut catalog = Catalog::new();
        catalog.add(item("Steak", 2500, "Mains")).unwrap();
        catalog.add(item("Tea", 300, "Drinks")).unwrap();
        catalog.add(item("Pasta", 1400, "Mains")).unwrap();
        catalog.add(item("Coffee", 350, "Drinks")).unwrap();
        catalog.add(item("Cake", 600, "Desserts")).unwrap();

        let names: Vec<&str> = catalog.list().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Cake", "Tea", "Coffee", "Steak", "Pasta"]);
    }

    #[test]
    fn test_update_price() {
        let mut catalog = Catalog::new();
        catalog.add(item("Soup", 500, "Starters")).unwrap();

        catalog.update_price("Soup", Money::from_cents(650)).unwrap();
        assert_eq!(catalog.get("Soup").unwrap().price.cents(), 650);
    }

    #[test]
    fn test_update_price_errors() {
        let mut catalog = Catalog::new();
        catalog.add(item("Soup", 500, "Starters")).unwrap();

        let missing = catalog.update_price("Stew", Money::from_cents(650));
        assert!(matches!(missing, Err(CoreError::NotFound { entity: EntityKind::MenuItem, .. })));

        let bad = catalog.update_price("Soup", Money::zero());
        assert!(matches!(bad, Err(CoreError::InvalidPrice(_))));
        assert_eq!(catalog.get("Soup").unwrap().price.cents(), 500);
    }

    #[test]
    fn test_delete_referenced_item_is_refused() {
        let mut catalog = Catalog::new();
        catalog.add(item("Soup", 500, "Starters")).unwrap();

        let result = catalog.delete("Soup", &Referenced(vec!["Soup"]));
        assert!(matches!(result, Err(CoreError::InUse { entity: EntityKind::MenuItem, .. })));
        assert!(catalog.contains("Soup"));
    }

    #[test]
    fn test_delete_unreferenced_item() {
        let mut catalog = Catalog::new();
        catalog.add(item("Soup", 500, "Starters")).unwrap();
        catalog.add(item("Tea", 300, "Drinks")).unwrap();

        let removed = catalog.delete("Tea", &Referenced(vec!["Soup"])).unwrap();
        assert_eq!(removed.name, "Tea");
        assert!(!catalog.contains("Tea"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_delete_missing_reports_not_found_before_in_use() {
        let mut catalog = Catalog::new();

        let result = catalog.delete("Soup", &Referenced(vec!["Soup"]));
        assert!(matches!(result, Err(CoreError::NotFound { .. })));
    }

    #[test]
    fn test_select_follows_catalog_order_without_duplicates() {
        let mut catalog = Catalog::new();
        catalog.add(item("Soup", 500, "Starters")).unwrap();
        catalog.add(item("Tea", 300, "Drinks")).unwrap();
        catalog.add(item("Cake", 600, "Desserts")).unwrap();

        let names = vec!["Cake".to_string(), "Nope".to_string(), "Soup".to_string(), "Cake".to_string()];
        let selected: Vec<String> = catalog.select(&names).into_iter().map(|i| i.name).collect();
        assert_eq!(selected, vec!["Soup", "Cake"]);
    }
}
