use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Body posted to the payment-session-creation endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub ticket_id: String,
    pub email: String,
    pub quantity: u32,
    pub buyer_name: String,
    pub buyer_phone: String,
    pub form_responses: HashMap<String, String>,
}

/// Response from session creation: where to send the buyer, and the order
/// number to show on the result pages.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    pub checkout_url: String,
    pub order_number: String,
}

/// Session state reported by the status endpoint. The payment processor owns
/// the `status`/`payment_status` vocabulary; everything else is best-effort
/// order metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub payment_status: String,
    pub customer_email: Option<String>,
    /// Total in minor units (cents for most currencies).
    pub amount_total: Option<i64>,
    pub currency: Option<String>,
    #[serde(rename = "orderNumber")]
    pub order_number: Option<String>,
    #[serde(rename = "ticketName")]
    pub ticket_name: Option<String>,
    pub quantity: Option<u32>,
    #[serde(rename = "eventName")]
    pub event_name: Option<String>,
    #[serde(rename = "eventDate")]
    pub event_date: Option<String>,
}

impl SessionStatus {
    pub fn is_paid(&self) -> bool {
        self.payment_status == "paid"
    }

    /// Minimal confirmation used when the status fetch fails but the order
    /// number is already known from session creation.
    pub fn paid_fallback(order_number: Option<String>) -> Self {
        Self {
            status: "complete".to_string(),
            payment_status: "paid".to_string(),
            order_number,
            ..Self::default()
        }
    }
}
