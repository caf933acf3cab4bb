//! # Console Controller
//!
//! The request/response loop.
//!
//! ## Loop Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  print top menu ──► read line ──┬── 1/2/3 ──► print submenu            │
//! │        ▲                        │               │                       │
//! │        │                        │               ▼                       │
//! │        │                        │            read line ──► command      │
//! │        │                        │               │                       │
//! │        │                        │               ▼                       │
//! │        └────────────────────────┤     print confirmation or error      │
//! │                                 │                                       │
//! │                                 ├── 4 or end of input ──► return        │
//! │                                 │                                       │
//! │                                 └── anything else ──► "Invalid option"  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A submenu runs at most one command and then control returns to the top
//! menu. Nothing a user types ends the loop except option 4.

use std::io::{self, BufRead, Write};

use gusto_core::Restaurant;
use tracing::{debug, info};

use crate::commands::{customers, menu_items, orders};
use crate::config::ConsoleConfig;
use crate::error::{CommandError, CommandResult, ConsoleError};
use crate::prompt::Prompt;

const MENU_ITEMS_MENU: &str = "
Menu Items Management
1. Add Menu Item
2. View Menu Items
3. Update Menu Item
4. Delete Menu Item
5. Back to Main Menu";

const ORDERS_MENU: &str = "
Orders Management
1. Place New Order
2. View Orders
3. Update Order Status
4. Cancel Order
5. Back to Main Menu";

const CUSTOMERS_MENU: &str = "
Customers Management
1. Register New Customer
2. View Customers
3. Update Customer Information
4. Delete Customer
5. Back to Main Menu";

/// Parses a menu selection. Anything but a bare whole number is `None`,
/// including numbers with surrounding spaces.
pub fn parse_choice(line: &str) -> Option<u32> {
    line.parse().ok()
}

/// Owns the restaurant for the whole session and talks to the operator.
pub struct Console<R, W> {
    pub(crate) restaurant: Restaurant,
    pub(crate) config: ConsoleConfig,
    pub(crate) prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(config: ConsoleConfig, input: R, output: W) -> Self {
        Console {
            restaurant: Restaurant::new(),
            config,
            prompt: Prompt::new(input, output),
        }
    }

    /// Starts from existing state instead of an empty restaurant.
    pub fn with_restaurant(restaurant: Restaurant, config: ConsoleConfig, input: R, output: W) -> Self {
        Console {
            restaurant,
            config,
            prompt: Prompt::new(input, output),
        }
    }

    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    /// Runs until the operator picks Exit or input ends.
    ///
    /// Only I/O failures on the underlying streams are returned as errors.
    pub fn run(&mut self) -> io::Result<()> {
        info!(restaurant = %self.config.restaurant_name, "Console session started");

        loop {
            self.prompt.say(format_args!(
                "\nWelcome to {}\n1. Manage Menu Items\n2. Manage Orders\n3. Manage Customers\n4. Exit",
                self.config.restaurant_name
            ))?;

            let Some(line) = self.prompt.read_line()? else {
                info!("Input closed, ending session");
                break;
            };

            match parse_choice(&line) {
                Some(1) => self.manage_menu_items()?,
                Some(2) => self.manage_orders()?,
                Some(3) => self.manage_customers()?,
                Some(4) => {
                    info!("Exit selected");
                    break;
                }
                _ => {
                    debug!(input = %line, "Invalid top-level option");
                    self.prompt.say("Invalid option, please try again.")?;
                }
            }
        }

        Ok(())
    }

    fn manage_menu_items(&mut self) -> io::Result<()> {
        let Some(choice) = self.submenu_choice(MENU_ITEMS_MENU)? else {
            return Ok(());
        };
        let result = match choice {
            Some(1) => menu_items::add(self),
            Some(2) => menu_items::view(self),
            Some(3) => menu_items::update(self),
            Some(4) => menu_items::delete(self),
            Some(5) => return Ok(()),
            _ => Err(ConsoleError::invalid_option().into()),
        };
        self.report(result)
    }

    fn manage_orders(&mut self) -> io::Result<()> {
        let Some(choice) = self.submenu_choice(ORDERS_MENU)? else {
            return Ok(());
        };
        let result = match choice {
            Some(1) => orders::place(self),
            Some(2) => orders::view(self),
            Some(3) => orders::update_status(self),
            Some(4) => orders::cancel(self),
            Some(5) => return Ok(()),
            _ => Err(ConsoleError::invalid_option().into()),
        };
        self.report(result)
    }

    fn manage_customers(&mut self) -> io::Result<()> {
        let Some(choice) = self.submenu_choice(CUSTOMERS_MENU)? else {
            return Ok(());
        };
        let result = match choice {
            Some(1) => customers::register(self),
            Some(2) => customers::view(self),
            Some(3) => customers::update(self),
            Some(4) => customers::delete(self),
            Some(5) => return Ok(()),
            _ => Err(ConsoleError::invalid_option().into()),
        };
        self.report(result)
    }

    /// Prints a submenu and reads the selection.
    ///
    /// Outer `None` means input ended; inner `None` means the line was not a
    /// number.
    fn submenu_choice(&mut self, menu: &str) -> io::Result<Option<Option<u32>>> {
        self.prompt.say(menu)?;
        Ok(self.prompt.read_line()?.map(|line| parse_choice(&line)))
    }

    /// Prints a command's outcome. Only I/O errors escape.
    fn report(&mut self, result: CommandResult) -> io::Result<()> {
        match result {
            Ok(message) => self.prompt.say(message),
            Err(CommandError::Rejected(err)) => {
                debug!(code = ?err.code, message = %err.message, "Command rejected");
                self.prompt.say(err.message)
            }
            Err(CommandError::Io(err)) => Err(err),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

/// Runs a scripted session and returns the final state and everything printed.
#[cfg(test)]
pub(crate) fn run_script(input: &str) -> (Restaurant, String) {
    let mut console = Console::new(
        ConsoleConfig::default(),
        std::io::Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
    );
    console.run().unwrap();
    let restaurant = console.restaurant().clone();
    let output = String::from_utf8(console.into_output()).unwrap();
    (restaurant, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> (Restaurant, String) {
        run_script(input)
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1"), Some(1));
        assert_eq!(parse_choice("4"), Some(4));
        assert_eq!(parse_choice(" 4 "), None);
        assert_eq!(parse_choice("one"), None);
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("-1"), None);
    }

    #[test]
    fn test_exit_option_ends_session() {
        let (_, output) = session("4\n1\n");
        assert!(output.starts_with("\nWelcome to Restaurant Management System\n1. Manage Menu Items"));
        assert_eq!(output.matches("Welcome to").count(), 1);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (_, output) = session("");
        assert_eq!(output.matches("Welcome to").count(), 1);
    }

    #[test]
    fn test_invalid_top_level_options_reprompt() {
        let (_, output) = session("9\nabc\n\n4\n");
        assert_eq!(output.matches("Invalid option, please try again.").count(), 3);
        assert_eq!(output.matches("Welcome to").count(), 4);
    }

    #[test]
    fn test_invalid_submenu_option_returns_to_top() {
        let (_, output) = session("1\n7\n2\nx\n4\n");
        assert_eq!(output.matches("Invalid option.").count(), 2);
        assert!(output.contains("Menu Items Management"));
        assert!(output.contains("Orders Management"));
        assert_eq!(output.matches("Welcome to").count(), 3);
    }

    #[test]
    fn test_back_option_prints_nothing_else() {
        let (_, output) = session("3\n5\n4\n");
        assert!(output.contains("Customers Management"));
        assert!(!output.contains("Invalid option"));
        assert_eq!(output.matches("Welcome to").count(), 2);
    }

    #[test]
    fn test_session_over_existing_restaurant() {
        let mut restaurant = Restaurant::new();
        restaurant
            .add_menu_item("Tea", "Green", gusto_core::Money::from_cents(300), "Drinks")
            .unwrap();

        let mut console = Console::with_restaurant(
            restaurant,
            ConsoleConfig::default(),
            Cursor::new(b"1\n2\n4\n".to_vec()),
            Vec::new(),
        );
        console.run().unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Tea (Drinks) - Green: $3.00"));
    }

    #[test]
    fn test_configured_banner() {
        let config = ConsoleConfig {
            restaurant_name: "Trattoria".to_string(),
            ..ConsoleConfig::default()
        };
        let mut console = Console::new(config, Cursor::new(b"4\n".to_vec()), Vec::new());
        console.run().unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Welcome to Trattoria"));
    }
}
