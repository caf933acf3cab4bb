//! Customer commands. Contact fields are taken as typed; only IDs are parsed.

use std::io::{BufRead, Write};

use gusto_core::CustomerId;

use crate::console::Console;
use crate::error::{CommandError, CommandResult, ConsoleError};
use crate::render;

/// Reads a customer ID that must name a registered customer.
fn ask_customer_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    question: &str,
) -> Result<CustomerId, CommandError> {
    let input = console.prompt.ask(question)?;
    match input.parse::<CustomerId>() {
        Ok(id) if console.restaurant.customer(id).is_some() => Ok(id),
        _ => Err(ConsoleError::customer_not_found().into()),
    }
}

pub fn register<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CommandResult {
    let name = console.prompt.ask("Enter customer name:")?;
    let email = console.prompt.ask("Enter customer email:")?;
    let phone_number = console.prompt.ask("Enter customer phone number:")?;

    let id = console.restaurant.register_customer(name, email, phone_number);
    Ok(format!("Customer registered successfully. Customer ID: {}", id))
}

pub fn view<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CommandResult {
    Ok(render::listing(
        console.restaurant.customers(),
        "No customers registered.",
        render::customer,
    ))
}

/// Replaces email and phone. The name never changes after registration.
pub fn update<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CommandResult {
    let id = ask_customer_id(console, "Enter customer ID to update:")?;
    let email = console.prompt.ask("Enter new email:")?;
    let phone_number = console.prompt.ask("Enter new phone number:")?;

    console.restaurant.update_customer(id, email, phone_number)?;
    Ok("Customer updated successfully.".to_string())
}

pub fn delete<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CommandResult {
    let id = ask_customer_id(console, "Enter customer ID to delete:")?;
    console.restaurant.delete_customer(id)?;
    Ok("Customer deleted successfully.".to_string())
}

#[cfg(test)]
mod tests {
    use crate::config::ConsoleConfig;
    use crate::console::{run_script, Console};
    use gusto_core::CustomerId;
    use std::io::Cursor;

    const REGISTER_ADA: &str = "3\n1\nAda\nada@x.com\n555-0100\n";

    #[test]
    fn test_register_and_view() {
        let script = format!("{REGISTER_ADA}3\n1\nBob\n\n\n3\n2\n4\n");
        let (restaurant, output) = run_script(&script);

        assert!(output.contains("Customer registered successfully. Customer ID: 1"));
        assert!(output.contains("Customer registered successfully. Customer ID: 2"));
        assert_eq!(restaurant.customers().len(), 2);
        assert!(output.contains(
            "Customer ID: 1, Name: Ada, Email: ada@x.com, Phone: 555-0100\n\
             Customer ID: 2, Name: Bob, Email: , Phone: \n"
        ));
    }

    #[test]
    fn test_invalid_utf8_answer_keeps_session_alive() {
        let mut console = Console::new(
            ConsoleConfig::default(),
            Cursor::new(b"3\n1\nAda\n\xff\xfe\n555\n3\n2\n4\n".to_vec()),
            Vec::new(),
        );
        console.run().unwrap();

        let ada = console.restaurant().customer(CustomerId::new(1)).unwrap();
        assert_eq!(ada.email, "\u{FFFD}\u{FFFD}");
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Customer registered successfully. Customer ID: 1"));
        assert!(output.contains("Phone: 555"));
    }

    #[test]
    fn test_empty_customer_listing() {
        let (_, output) = run_script("3\n2\n4\n");
        assert!(output.contains("No customers registered."));
    }

    #[test]
    fn test_register_at_end_of_input_uses_empty_fields() {
        let (restaurant, _) = run_script("3\n1\nAda\n");
        let ada = restaurant.customer(CustomerId::new(1)).unwrap();
        assert_eq!(ada.name, "Ada");
        assert_eq!(ada.email, "");
        assert_eq!(ada.phone_number, "");
    }

    #[test]
    fn test_update_contact_details() {
        let script = format!("{REGISTER_ADA}3\n3\n1\nada@y.org\n555-0199\n4\n");
        let (restaurant, output) = run_script(&script);

        assert!(output.contains("Customer updated successfully."));
        let ada = restaurant.customer(CustomerId::new(1)).unwrap();
        assert_eq!(ada.name, "Ada");
        assert_eq!(ada.email, "ada@y.org");
        assert_eq!(ada.phone_number, "555-0199");
    }

    #[test]
    fn test_update_unknown_customer_skips_questions() {
        let script = format!("{REGISTER_ADA}3\n3\n7\n3\n3\nseven\n4\n");
        let (_, output) = run_script(&script);

        assert_eq!(output.matches("Customer not found.").count(), 2);
        assert!(!output.contains("Enter new email:"));
    }

    #[test]
    fn test_delete_refused_while_orders_exist() {
        let script = format!(
            "1\n1\nSoup\nTomato\n5\nStarters\n{REGISTER_ADA}\
             2\n1\nada@x.com\nSoup\n\
             3\n4\n1\n\
             2\n4\n1\n\
             3\n4\n1\n4\n"
        );
        let (restaurant, output) = run_script(&script);

        assert!(output.contains("Cannot delete customer. They have active orders."));
        assert!(output.contains("Order canceled successfully."));
        assert!(output.contains("Customer deleted successfully."));
        assert!(restaurant.customers().is_empty());
    }

    #[test]
    fn test_deleted_ids_are_not_reused() {
        let script = format!("{REGISTER_ADA}3\n4\n1\n3\n1\nBob\nbob@x.com\n\n4\n");
        let (restaurant, output) = run_script(&script);

        assert!(output.contains("Customer ID: 2"));
        assert!(restaurant.customer(CustomerId::new(1)).is_none());
        assert!(restaurant.customer(CustomerId::new(2)).is_some());
    }
}
