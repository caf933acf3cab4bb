//! # Console Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`GUSTO_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup.

use gusto_core::Money;

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Shown in the top-level banner ("Welcome to ...").
    pub restaurant_name: String,

    /// Prefixed to every price shown to the operator.
    pub currency_symbol: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            restaurant_name: "Restaurant Management System".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Creates a ConsoleConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `GUSTO_RESTAURANT_NAME`: Override the banner name
    /// - `GUSTO_CURRENCY_SYMBOL`: Override the currency symbol
    ///
    /// Empty values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup (tests pass a closure).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConsoleConfig::default();

        if let Some(name) = lookup("GUSTO_RESTAURANT_NAME").filter(|v| !v.trim().is_empty()) {
            config.restaurant_name = name;
        }

        if let Some(symbol) = lookup("GUSTO_CURRENCY_SYMBOL").filter(|v| !v.trim().is_empty()) {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use gusto_console::config::ConsoleConfig;
    /// use gusto_core::Money;
    ///
    /// let config = ConsoleConfig::default();
    /// assert_eq!(config.format_money(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.cents() < 0 { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}
