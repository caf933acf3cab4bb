//! # Directory
//!
//! Registered customers, keyed by sequential ID.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult, EntityKind};
use crate::ledger::OrderReferences;
use crate::types::{Customer, CustomerId};

/// The restaurant's customers.
///
/// IDs start at 1 and are never reused, so iterating the map yields
/// registration order.
#[derive(Debug, Clone)]
pub struct Directory {
    customers: BTreeMap<CustomerId, Customer>,
    next_id: CustomerId,
}

impl Default for Directory {
    fn default() -> Self {
        Directory {
            customers: BTreeMap::new(),
            next_id: CustomerId::FIRST,
        }
    }
}

impl Directory {
    pub fn new() -> Self {
        Directory::default()
    }

    /// Registers a customer and returns the assigned ID. Never fails.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> CustomerId {
        let id = self.next_id;
        self.next_id = id.next();

        let customer = Customer {
            id,
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
        };
        info!(customer_id = %id, email = %customer.email, "Registered customer");
        self.customers.insert(id, customer);
        id
    }

    pub fn list(&self) -> Vec<&Customer> {
        debug!(count = self.customers.len(), "Listed customers");
        self.customers.values().collect()
    }

    pub fn get(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(&id)
    }

    /// First customer (in ID order) whose email matches exactly.
    pub fn find_by_email(&self, email: &str) -> Option<&Customer> {
        self.customers.values().find(|customer| customer.email == email)
    }

    /// Overwrites email and phone number.
    ///
    /// Both fields are replaced as given; an empty string clears the field.
    pub fn update(
        &mut self,
        id: CustomerId,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> CoreResult<()> {
        let customer = self
            .customers
            .get_mut(&id)
            .ok_or_else(|| CoreError::customer_not_found(id))?;

        customer.email = email.into();
        customer.phone_number = phone_number.into();
        info!(customer_id = %id, email = %customer.email, "Updated customer");
        Ok(())
    }

    /// Removes a customer who has no orders on file.
    pub fn delete(&mut self, id: CustomerId, references: &impl OrderReferences) -> CoreResult<Customer> {
        if !self.customers.contains_key(&id) {
            return Err(CoreError::customer_not_found(id));
        }

        if references.has_orders_for(id) {
            warn!(customer_id = %id, "Refused to delete customer with orders");
            return Err(CoreError::InUse {
                entity: EntityKind::Customer,
                key: id.to_string(),
            });
        }

        info!(customer_id = %id, "Deleted customer");
        self.customers
            .remove(&id)
            .ok_or_else(|| CoreError::customer_not_found(id))
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
