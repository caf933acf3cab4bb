//! # Validation Module
//!
//! Turns operator text into typed values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console (apps/console)                                       │
//! │  └── Reads raw lines, calls the parsers below                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Type checks (decimal, whole number)                               │
//! │  └── Positivity checks                                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog / Directory / Ledger                                 │
//! │  └── Uniqueness, references, status policy                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only type and positivity checks live here. Names, emails and phone
//! numbers are accepted as typed, including empty strings.

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Highest price a menu item may carry ($1,000,000.00).
///
/// Keeps every order total far below `i64::MAX` cents.
pub const MAX_PRICE: Money = Money::from_cents(100_000_000);

/// Validates a menu price.
///
/// ## Rules
/// - Must be strictly positive (> 0)
/// - Must not exceed [`MAX_PRICE`]
///
/// ## Example
/// ```rust
/// use gusto_core::money::Money;
/// use gusto_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(500)).is_ok());
/// assert!(validate_price(Money::zero()).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if price > MAX_PRICE {
        return Err(ValidationError::TooLarge {
            field: "price".to_string(),
            max: MAX_PRICE.to_string(),
        });
    }

    Ok(())
}

/// Parses and validates a price typed by the operator.
///
/// ```rust
/// use gusto_core::validation::parse_price;
///
/// assert_eq!(parse_price("4.50").unwrap().cents(), 450);
/// assert!(parse_price("0").is_err());
/// assert!(parse_price("four").is_err());
/// ```
pub fn parse_price(input: &str) -> ValidationResult<Money> {
    let price: Money = input.parse()?;
    validate_price(price)?;
    Ok(price)
}

// =============================================================================
// List Parsing
// =============================================================================

/// Splits a comma-separated list of menu item names.
///
/// ## Rules
/// - Empty segments between commas are dropped
/// - Each remaining token is trimmed of surrounding whitespace
/// - Order and duplicates are preserved; matching is the ledger's job
///
/// ```rust
/// use gusto_core::validation::parse_item_names;
///
/// assert_eq!(parse_item_names(" Soup ,Bread,,Tea"), vec!["Soup", "Bread", "Tea"]);
/// ```
pub fn parse_item_names(input: &str) -> Vec<String> {
    input
        .split(',')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.trim().to_string())
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
