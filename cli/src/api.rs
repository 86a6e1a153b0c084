//! # Payment API Client
//!
//! A thin JSON client for the two payment-API endpoints Beerpay uses:
//!
//! - `POST /tokens`: exchange a freshly generated SIN for a pairing
//!   code, which a human then approves in the API's web UI.
//! - `POST /invoices`: create an invoice for an amount in CHF.
//!
//! The client knows nothing about SIN internals; it takes the finished
//! base58 string and puts it in the `id` field. Field names follow the
//! wire format exactly (camelCase), so keep the serde renames intact.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config;

/// Errors from talking to the payment API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or non-2xx response.
    #[error("payment API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The token response parsed fine but contained no pairing code.
    #[error("token response contained no pairing code")]
    MissingPairingCode,
}

/// Client for a BitPay-compatible payment API.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

/// Body of a `POST /tokens` request.
#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    label: &'a str,
    id: &'a str,
    facade: &'a str,
}

/// Response envelope of `POST /tokens`. The API wraps everything in a
/// `data` array, even single results.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    data: Vec<TokenData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenData {
    pairing_code: String,
}

/// Body of a `POST /invoices` request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InvoiceRequest<'a> {
    price: f64,
    currency: &'a str,
    transaction_speed: &'a str,
    notification_email: &'a str,
    redirect_url: &'a str,
    item_desc: &'a str,
    physical: bool,
    buyer_name: &'a str,
    buyer_city: &'a str,
    buyer_zip: u32,
    buyer_country: &'a str,
}

impl ApiClient {
    /// Create a client for the API at `base_url`. A trailing slash is
    /// tolerated and stripped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Request an API token for the given SIN; returns the pairing code.
    ///
    /// The pairing code is what a human pastes into the API's approval
    /// page; the token itself stays on the server side until approved.
    pub async fn create_token(
        &self,
        sin: &str,
        label: &str,
        facade: &str,
    ) -> Result<String, ApiError> {
        let url = format!("{}/tokens", self.base_url);
        tracing::debug!(url = %url, label = %label, facade = %facade, "requesting API token");

        let response: TokenResponse = self
            .http
            .post(&url)
            .json(&TokenRequest {
                label,
                id: sin,
                facade,
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .data
            .into_iter()
            .next()
            .map(|entry| entry.pairing_code)
            .ok_or(ApiError::MissingPairingCode)
    }

    /// Create an invoice and return the API's response as raw JSON.
    ///
    /// Amounts at or below [`config::HIGH_SPEED_THRESHOLD`] use the
    /// "high" transaction speed, larger ones "medium".
    pub async fn create_invoice(
        &self,
        amount: f64,
        description: &str,
    ) -> Result<Value, ApiError> {
        let url = format!("{}/invoices", self.base_url);
        let transaction_speed = if amount <= config::HIGH_SPEED_THRESHOLD {
            "high"
        } else {
            "medium"
        };
        tracing::debug!(url = %url, amount, speed = transaction_speed, "creating invoice");

        let response = self
            .http
            .post(&url)
            .json(&InvoiceRequest {
                price: amount,
                currency: config::CURRENCY,
                transaction_speed,
                notification_email: config::NOTIFICATION_EMAIL,
                redirect_url: config::REDIRECT_URL,
                item_desc: description,
                physical: true,
                buyer_name: config::BUYER_NAME,
                buyer_city: config::BUYER_CITY,
                buyer_zip: config::BUYER_ZIP,
                buyer_country: config::BUYER_COUNTRY,
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response)
    }
}
