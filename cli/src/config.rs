//! # Invoice Glue Configuration
//!
//! Constants for the invoice and pairing flows. These describe *our*
//! deployment (who's buying the beer, where the money UI redirects) and
//! belong strictly to this binary; nothing here is allowed to leak into
//! `beerpay-protocol`, which knows only how to mint SINs.

/// Invoice currency. The beer fridge runs on Swiss francs.
pub const CURRENCY: &str = "CHF";

/// Where the payment API sends invoice status notifications.
pub const NOTIFICATION_EMAIL: &str = "beer@coredump.ch";

/// Where the buyer lands after paying.
pub const REDIRECT_URL: &str = "https://www.coredump.ch/";

/// Buyer identity stamped on every invoice.
pub const BUYER_NAME: &str = "Coredump Hacker";
pub const BUYER_CITY: &str = "Rapperswil";
pub const BUYER_ZIP: u32 = 8640;
pub const BUYER_COUNTRY: &str = "Switzerland";

/// Base URL of the payment API.
pub const DEFAULT_API_URL: &str = "https://bitpay.com";

/// Invoices at or below this amount use the "high" transaction speed;
/// anything larger settles at "medium". Small beer money can afford to
/// confirm fast.
pub const HIGH_SPEED_THRESHOLD: f64 = 5.0;

/// Label attached to API tokens and used as the default item description.
pub const DEFAULT_LABEL: &str = "Beerpay";

/// Facade requested when pairing: point-of-sale, which can create
/// invoices but not touch payouts or settings.
pub const DEFAULT_FACADE: &str = "pos";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_threshold_is_positive() {
        assert!(HIGH_SPEED_THRESHOLD > 0.0);
    }

    #[test]
    fn test_api_url_has_no_trailing_slash() {
        // The client joins paths with a slash; a trailing one here would
        // produce `//tokens`.
        assert!(!DEFAULT_API_URL.ends_with('/'));
    }
}
