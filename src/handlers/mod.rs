//! HTTP request handlers (route handlers).
//!
//! Each handler validates its input, delegates to the transaction store,
//! and shapes the JSON response. Failures become [`crate::error::AppError`]
//! values and render through its `IntoResponse` impl.

/// Service and database health probe
pub mod health;
/// Transaction listing, lookup, creation, and manual status update
pub mod transactions;
/// Payment gateway callback ingestion
pub mod webhooks;
