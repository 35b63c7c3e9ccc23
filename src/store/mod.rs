//! Durable persistence layer.
//!
//! The store owns the connection pool; everything above it goes through the
//! operations defined here and never touches SQL directly.

pub mod transactions;

pub use transactions::TransactionStore;
