//! Payment gateway webhook ingestion.
//!
//! The gateway calls `POST /api/webhook/transaction-status` to report the
//! outcome of a collection request. The callback carries no user token, so
//! this is the one write path outside the authentication gate, and the only
//! path that moves a transaction out of `PENDING` with gateway data.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{
    error::AppError,
    models::transaction::{TransactionStatus, WebhookRequest},
    state::AppState,
};

/// Ingest a transaction-status callback.
///
/// The gateway's numeric outcome code maps onto the status set: 200 means
/// `SUCCESS`, any other value `FAILED`. Gateway-native status vocabularies
/// are not preserved. `order_info.order_id` is the `collect_id` issued at
/// creation.
///
/// A callback naming an unknown collect_id is acknowledged with 200 so the
/// gateway does not retry, but the ack carries `"updated": false` and the
/// event is logged for auditing.
///
/// # Request Body
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
pub async fn transaction_status(
    State(state): State<AppState>,
    Json(request): Json<WebhookRequest>,
) -> Result<Json<Value>, AppError> {
    let order_info = request
        .order_info
        .ok_or_else(|| AppError::InvalidRequest("Invalid webhook payload".to_string()))?;
    let order_id = order_info
        .order_id
        .filter(|order_id| !order_id.is_empty())
        .ok_or_else(|| AppError::InvalidRequest("Invalid webhook payload".to_string()))?;

    let status = if request.status == 200 {
        TransactionStatus::Success
    } else {
        TransactionStatus::Failed
    };

    let rows_affected = state
        .store
        .update_status_and_gateway_info(
            &order_id,
            status,
            order_info.transaction_amount,
            &order_info.gateway,
            &order_info.bank_reference,
        )
        .await?;

    if rows_affected == 0 {
        tracing::warn!(order_id = %order_id, "webhook ignored: no transaction matches order_id");
        return Ok(Json(json!({
            "message": "No transaction matched the webhook order_id",
            "updated": false
        })));
    }

    Ok(Json(json!({
        "message": "Transaction status updated successfully",
        "updated": true
    })))
}
