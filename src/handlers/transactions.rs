//! Transaction HTTP handlers.
//!
//! This module implements the transaction-facing API endpoints:
//! - GET /api/transactions - list all transactions
//! - GET /api/transactions/school/{school_id} - list one school's transactions
//! - GET /api/transactions/status/{custom_order_id} - customer status lookup
//! - POST /api/transactions/{collect_id}/status - manual status update
//! - POST /api/create-collect-request - create a collection request

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::transaction::{
        CreateCollectRequest, CreateCollectResponse, StatusSummary, StatusUpdateRequest,
        Transaction, TransactionStatus, TransactionSummary,
    },
    state::AppState,
};

/// List every transaction, newest first.
///
/// # Response (200)
///
/// ```json
/// [
///   {
///     "collect_id": "COL9f2c...",
///     "school_id": "SCH-001",
///     "gateway": "razorpay",
///     "order_amount": 0.0,
///     "transaction_amount": 1499.5,
///     "status": "SUCCESS",
///     "custom_order_id": "ORD41aa..."
///   }
/// ]
/// ```
pub async fn list_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransactionSummary>>, AppError> {
    let transactions = state.store.list_all().await?;

    Ok(Json(transactions))
}

/// List one school's transactions, newest first, with the full field set.
pub async fn list_school_transactions(
    State(state): State<AppState>,
    Path(school_id): Path<String>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let transactions = state.store.list_by_school(&school_id).await?;

    Ok(Json(transactions))
}

/// Customer-facing status lookup by custom order id.
///
/// Returns the status projection (status, collect_id, order_amount,
/// transaction_amount, gateway) or 404 when the identifier is unknown.
pub async fn check_transaction_status(
    State(state): State<AppState>,
    Path(custom_order_id): Path<String>,
) -> Result<Json<StatusSummary>, AppError> {
    let summary = state
        .store
        .find_by_custom_order_id(&custom_order_id)
        .await?
        .ok_or(AppError::TransactionNotFound)?;

    Ok(Json(summary))
}

/// Manually overwrite a transaction's status.
///
/// The new value must name a member of the status set; anything else is a
/// 400. An unknown collect_id is a 404 (zero rows affected).
pub async fn update_transaction_status(
    State(state): State<AppState>,
    Path(collect_id): Path<String>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<Value>, AppError> {
    let status = request
        .status
        .ok_or_else(|| AppError::InvalidRequest("Status is required".to_string()))?;
    let status = TransactionStatus::parse(&status)
        .ok_or_else(|| AppError::InvalidRequest("Invalid status value".to_string()))?;

    let rows_affected = state.store.update_status_only(&collect_id, status).await?;
    if rows_affected == 0 {
        return Err(AppError::TransactionNotFound);
    }

    Ok(Json(json!({ "message": "Status updated successfully" })))
}

/// Create a new payment collection request.
///
/// Generates the `COL`/`ORD` identifier pair, inserts a `PENDING` record
/// with zero amounts, and returns a mock payment link for the gateway.
///
/// # Request Body
///
/// ```json
/// { "school_id": "SCH-001" }
/// ```
///
/// # Response (200)
///
/// ```json
/// {
///   "collect_id": "COL9f2c...",
///   "custom_order_id": "ORD41aa...",
///   "payment_link": "https://payment-gateway.com/pay/COL9f2c..."
/// }
/// ```
pub async fn create_collect_request(
    State(state): State<AppState>,
    Json(request): Json<CreateCollectRequest>,
) -> Result<Json<CreateCollectResponse>, AppError> {
    let school_id = request
        .school_id
        .filter(|school_id| !school_id.is_empty())
        .ok_or_else(|| AppError::InvalidRequest("School ID is required".to_string()))?;

    let collect_id = format!("COL{}", Uuid::new_v4().simple());
    let custom_order_id = format!("ORD{}", Uuid::new_v4().simple());

    state
        .store
        .insert(&collect_id, &school_id, &custom_order_id)
        .await?;

    // Mock payment link; no gateway call happens here.
    let payment_link = state
        .payment_gateway_url
        .join(&format!("pay/{collect_id}"))
        .map_err(|e| AppError::InvalidRequest(format!("Could not build payment link: {e}")))?;

    Ok(Json(CreateCollectResponse {
        collect_id,
        custom_order_id,
        payment_link: payment_link.to_string(),
    }))
}
