//! Typed bot settings loaded from a TOML configuration file.
//!
//! Replaces the loose key/value configuration of ad-hoc bots with explicit
//! structures: order validation bounds and payment methods under `[orders]`,
//! role names that grant admin commands under `[access]`, and the keyword
//! auto-response table under `[responses]`. Every field has a default, so a
//! missing file yields a working configuration.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Top-level settings structure mirroring config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BotSettings {
    /// Order validation and payment settings
    pub orders: OrderSettings,
    /// Who may run admin commands
    pub access: AccessSettings,
    /// Keyword auto-responses
    pub responses: ResponseSettings,
}

/// Validation bounds and payment configuration for order placement.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OrderSettings {
    /// Largest quantity a single order may request
    pub max_quantity: i32,
    /// Minimum length of a trimmed product name
    pub min_product_name_length: usize,
    /// Accepted payment methods
    pub payment_methods: Vec<String>,
    /// Payment method applied when the customer names none
    pub default_payment_method: String,
    /// When true, admins may set any status, bypassing the forward-only
    /// transition table (same-status no-ops are still rejected)
    pub allow_status_override: bool,
}

impl Default for OrderSettings {
    fn default() -> Self {
        Self {
            max_quantity: 100,
            min_product_name_length: 2,
            payment_methods: vec!["PayPal".to_string()],
            default_payment_method: "PayPal".to_string(),
            allow_status_override: false,
        }
    }
}

/// Role names (case-insensitive) that grant access to admin commands.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccessSettings {
    /// Guild role names treated as admin/moderator
    pub admin_roles: Vec<String>,
}

impl Default for AccessSettings {
    fn default() -> Self {
        Self {
            admin_roles: vec![
                "admin".to_string(),
                "moderator".to_string(),
                "mod".to_string(),
            ],
        }
    }
}

/// Keyword auto-response configuration for the message handler.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResponseSettings {
    /// Whether keyword matching is case-sensitive
    pub case_sensitive: bool,
    /// Keyword -> canned response
    pub keywords: BTreeMap<String, String>,
}

impl Default for ResponseSettings {
    fn default() -> Self {
        let mut keywords = BTreeMap::new();
        keywords.insert(
            "help".to_string(),
            "Here are the available commands! Use `/help` for more details.".to_string(),
        );
        keywords.insert(
            "support".to_string(),
            "For support, please contact the moderators or use the support channel.".to_string(),
        );
        Self {
            case_sensitive: false,
            keywords,
        }
    }
}

impl AccessSettings {
    /// Whether a guild role name grants admin access.
    #[must_use]
    pub fn is_admin_role(&self, role_name: &str) -> bool {
        self.admin_roles
            .iter()
            .any(|role| role.eq_ignore_ascii_case(role_name))
    }
}

/// Loads settings from a TOML file, falling back to defaults when the file
/// does not exist.
///
/// # Errors
/// Returns [`Error::Config`] if the file exists but cannot be read or parsed.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<BotSettings> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!("No config file at {}, using defaults", path.display());
        return Ok(BotSettings::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path.display()),
    })
}

/// Loads settings from the path named by the `BOT_CONFIG` environment
/// variable, defaulting to `./config.toml`.
///
/// # Errors
/// Returns [`Error::Config`] if an existing file cannot be read or parsed.
pub fn load_default_settings() -> Result<BotSettings> {
    let path = std::env::var("BOT_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    load_settings(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = BotSettings::default();
        assert_eq!(settings.orders.max_quantity, 100);
        assert_eq!(settings.orders.min_product_name_length, 2);
        assert_eq!(settings.orders.default_payment_method, "PayPal");
        assert!(!settings.orders.allow_status_override);
        assert!(settings.access.is_admin_role("Admin"));
        assert!(settings.access.is_admin_role("MOD"));
        assert!(!settings.access.is_admin_role("member"));
        assert!(!settings.responses.case_sensitive);
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [orders]
            max_quantity = 50
            min_product_name_length = 3
            payment_methods = ["PayPal", "Stripe"]
            default_payment_method = "Stripe"
            allow_status_override = true

            [access]
            admin_roles = ["staff"]

            [responses]
            case_sensitive = true

            [responses.keywords]
            rules = "Please check out the rules channel."
        "#;

        let settings: BotSettings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.orders.max_quantity, 50);
        assert_eq!(settings.orders.min_product_name_length, 3);
        assert_eq!(settings.orders.payment_methods, vec!["PayPal", "Stripe"]);
        assert_eq!(settings.orders.default_payment_method, "Stripe");
        assert!(settings.orders.allow_status_override);
        assert!(settings.access.is_admin_role("Staff"));
        assert!(!settings.access.is_admin_role("moderator"));
        assert!(settings.responses.case_sensitive);
        assert_eq!(
            settings.responses.keywords.get("rules").unwrap(),
            "Please check out the rules channel."
        );
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let toml_str = r#"
            [orders]
            max_quantity = 10
        "#;

        let settings: BotSettings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.orders.max_quantity, 10);
        // Unspecified fields fall back to defaults
        assert_eq!(settings.orders.min_product_name_length, 2);
        assert_eq!(settings.orders.default_payment_method, "PayPal");
        assert!(settings.access.is_admin_role("admin"));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let settings = load_settings("/nonexistent/config.toml").unwrap();
        assert_eq!(settings.orders.max_quantity, 100);
    }
}
