//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `Transaction`: the database entity for one payment collection request
//! - `TransactionStatus`: the closed status vocabulary
//! - Request and response types for the transaction endpoints and the
//!   gateway webhook

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a transaction.
///
/// Every record starts as `Pending`. The gateway webhook resolves it to
/// `Success` or `Failed`; a manual update may set any member of this set,
/// including moving a resolved transaction back to `Pending`. Strings
/// outside the set are rejected at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Pending,
    Success,
    Failed,
}

impl TransactionStatus {
    /// Parse the wire form (`"PENDING"`, `"SUCCESS"`, `"FAILED"`).
    ///
    /// Returns `None` for anything outside the set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(Self::Pending),
            "SUCCESS" => Some(Self::Success),
            "FAILED" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// Represents a transaction record from the database.
///
/// Maps to the `transactions` table. `collect_id` is the primary key and the
/// identifier the payment gateway echoes back through the webhook;
/// `custom_order_id` is the customer-facing identifier used for status
/// lookups. Both are generated at creation and never change.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Transaction {
    /// Primary identifier, `COL` followed by a random 128-bit token
    pub collect_id: String,

    /// School this collection request belongs to
    pub school_id: String,

    /// Payment provider name; `"PENDING"` until the webhook resolves it
    pub gateway: String,

    /// Requested amount. Always 0 at creation; no amount-setting path is
    /// exposed
    pub order_amount: f64,

    /// Actual settled amount, reported by the webhook
    pub transaction_amount: f64,

    /// Current lifecycle status
    pub status: TransactionStatus,

    /// Customer-facing identifier, `ORD` followed by a random 128-bit token
    pub custom_order_id: String,

    /// Bank reference reported by the webhook, absent until then
    pub bank_reference: Option<String>,

    /// Creation time; listings order by this, newest first
    pub created_at: DateTime<Utc>,
}

/// Projection returned by the full transaction listing.
///
/// Carries every field a dashboard needs while leaving out
/// `bank_reference` and `created_at`.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct TransactionSummary {
    pub collect_id: String,
    pub school_id: String,
    pub gateway: String,
    pub order_amount: f64,
    pub transaction_amount: f64,
    pub status: TransactionStatus,
    pub custom_order_id: String,
}

/// Projection returned by the customer-facing status check.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct StatusSummary {
    pub status: TransactionStatus,
    pub collect_id: String,
    pub order_amount: f64,
    pub transaction_amount: f64,
    pub gateway: String,
}

/// Request to create a new collection request.
///
/// ```json
/// { "school_id": "SCH-001" }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateCollectRequest {
    /// School the collection request is raised for. Optional in the wire
    /// type so a missing field maps to the documented 400 instead of a
    /// deserialization rejection.
    pub school_id: Option<String>,
}

/// Response for a created collection request.
///
/// ```json
/// {
///   "collect_id": "COL9f2c...",
///   "custom_order_id": "ORD41aa...",
///   "payment_link": "https://payment-gateway.com/pay/COL9f2c..."
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct CreateCollectResponse {
    pub collect_id: String,
    pub custom_order_id: String,
    pub payment_link: String,
}

/// Request body for the manual status update endpoint.
#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    /// New status in wire form. Must name a member of
    /// [`TransactionStatus`].
    pub status: Option<String>,
}

/// Webhook callback body sent by the payment gateway.
///
/// ```json
/// {
///   "status": 200,
///   "order_info": {
///     "order_id": "COL9f2c...",
///     "transaction_amount": 1499.5,
///     "gateway": "razorpay",
///     "bank_reference": "HDFC-77123"
///   }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct WebhookRequest {
    /// HTTP-style outcome code. 200 marks the transaction `SUCCESS`,
    /// anything else `FAILED`.
    #[serde(default)]
    pub status: i64,

    pub order_info: Option<OrderInfo>,
}

/// Gateway-reported order details inside a webhook callback.
#[derive(Debug, Deserialize)]
pub struct OrderInfo {
    /// The collect_id this callback refers to
    pub order_id: Option<String>,

    #[serde(default)]
    pub transaction_amount: f64,

    #[serde(default)]
    pub gateway: String,

    #[serde(default)]
    pub bank_reference: String,
}
