//! Transaction persistence operations.
//!
//! [`TransactionStore`] owns the SQLite pool and exposes the handful of
//! queries the HTTP layer is built on. Every query binds its inputs;
//! request data never reaches query text.

use chrono::Utc;

use crate::{
    db::DbPool,
    error::AppError,
    models::transaction::{StatusSummary, Transaction, TransactionStatus, TransactionSummary},
};

/// Durable store for transaction records.
///
/// Cloning is cheap; the underlying pool is shared.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    pool: DbPool,
}

impl TransactionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Verify database connectivity with a trivial query.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;

        Ok(())
    }

    /// Insert a freshly created collection request.
    ///
    /// New records always start with zero amounts, `PENDING` status, and
    /// `PENDING` gateway; the webhook fills in the rest later.
    ///
    /// # Errors
    ///
    /// A duplicate `collect_id` violates the primary key and surfaces as a
    /// database error.
    pub async fn insert(
        &self,
        collect_id: &str,
        school_id: &str,
        custom_order_id: &str,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO transactions (
                collect_id, school_id, custom_order_id,
                order_amount, transaction_amount, status, gateway, created_at
            )
            VALUES (?1, ?2, ?3, 0, 0, ?4, 'PENDING', ?5)
            "#,
        )
        .bind(collect_id)
        .bind(school_id)
        .bind(custom_order_id)
        .bind(TransactionStatus::Pending)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All transactions as the listing projection, newest first.
    pub async fn list_all(&self) -> Result<Vec<TransactionSummary>, AppError> {
        let transactions = sqlx::query_as::<_, TransactionSummary>(
            r#"
            SELECT collect_id, school_id, gateway, order_amount,
                   transaction_amount, status, custom_order_id
            FROM transactions
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    /// Every transaction belonging to one school, newest first, full field
    /// set.
    pub async fn list_by_school(&self, school_id: &str) -> Result<Vec<Transaction>, AppError> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT *
            FROM transactions
            WHERE school_id = ?1
            ORDER BY created_at DESC
            "#,
        )
        .bind(school_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    /// Status projection for the customer-facing lookup, or `None` when the
    /// identifier is unknown.
    pub async fn find_by_custom_order_id(
        &self,
        custom_order_id: &str,
    ) -> Result<Option<StatusSummary>, AppError> {
        let summary = sqlx::query_as::<_, StatusSummary>(
            r#"
            SELECT status, collect_id, order_amount, transaction_amount, gateway
            FROM transactions
            WHERE custom_order_id = ?1
            "#,
        )
        .bind(custom_order_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(summary)
    }

    /// Apply a gateway-reported outcome: status, settled amount, gateway
    /// name, and bank reference in one statement.
    ///
    /// Returns the number of rows affected; 0 means no transaction matched
    /// `collect_id`.
    pub async fn update_status_and_gateway_info(
        &self,
        collect_id: &str,
        status: TransactionStatus,
        transaction_amount: f64,
        gateway: &str,
        bank_reference: &str,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE transactions
            SET status = ?1,
                transaction_amount = ?2,
                gateway = ?3,
                bank_reference = ?4
            WHERE collect_id = ?5
            "#,
        )
        .bind(status)
        .bind(transaction_amount)
        .bind(gateway)
        .bind(bank_reference)
        .bind(collect_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Overwrite the status field only.
    ///
    /// Returns the number of rows affected; 0 means no transaction matched
    /// `collect_id`.
    pub async fn update_status_only(
        &self,
        collect_id: &str,
        status: TransactionStatus,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE transactions
            SET status = ?1
            WHERE collect_id = ?2
            "#,
        )
        .bind(status)
        .bind(collect_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod transaction_store_tests {
    use std::time::Duration;

    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;
    use crate::db;

    async fn test_store() -> TransactionStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Could not open database in memory.");
        db::run_migrations(&pool)
            .await
            .expect("Could not run migrations.");

        TransactionStore::new(pool)
    }

    #[tokio::test]
    async fn insert_applies_pending_defaults() {
        let store = test_store().await;

        store
            .insert("COLaaa", "SCH-001", "ORDaaa")
            .await
            .expect("insert failed");

        let rows = store.list_by_school("SCH-001").await.unwrap();
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.collect_id, "COLaaa");
        assert_eq!(row.custom_order_id, "ORDaaa");
        assert_eq!(row.status, TransactionStatus::Pending);
        assert_eq!(row.gateway, "PENDING");
        assert_eq!(row.order_amount, 0.0);
        assert_eq!(row.transaction_amount, 0.0);
        assert_eq!(row.bank_reference, None);
    }

    #[tokio::test]
    async fn duplicate_collect_id_is_rejected() {
        let store = test_store().await;

        store.insert("COLdup", "SCH-001", "ORD1").await.unwrap();
        let result = store.insert("COLdup", "SCH-002", "ORD2").await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn update_status_only_changes_nothing_else() {
        let store = test_store().await;
        store.insert("COLbbb", "SCH-001", "ORDbbb").await.unwrap();

        let rows = store
            .update_status_only("COLbbb", TransactionStatus::Success)
            .await
            .unwrap();
        assert_eq!(rows, 1);

        let summary = store
            .find_by_custom_order_id("ORDbbb")
            .await
            .unwrap()
            .expect("transaction should exist");
        assert_eq!(summary.status, TransactionStatus::Success);
        assert_eq!(summary.collect_id, "COLbbb");
        assert_eq!(summary.order_amount, 0.0);
        assert_eq!(summary.transaction_amount, 0.0);
        assert_eq!(summary.gateway, "PENDING");
    }

    #[tokio::test]
    async fn updates_against_unknown_ids_affect_zero_rows() {
        let store = test_store().await;

        let rows = store
            .update_status_only("COLmissing", TransactionStatus::Failed)
            .await
            .unwrap();
        assert_eq!(rows, 0);

        let rows = store
            .update_status_and_gateway_info(
                "COLmissing",
                TransactionStatus::Success,
                10.0,
                "razorpay",
                "REF-1",
            )
            .await
            .unwrap();
        assert_eq!(rows, 0);
    }

    #[tokio::test]
    async fn gateway_info_update_persists_fields_exactly() {
        let store = test_store().await;
        store.insert("COLccc", "SCH-001", "ORDccc").await.unwrap();

        let rows = store
            .update_status_and_gateway_info(
                "COLccc",
                TransactionStatus::Success,
                1499.5,
                "razorpay",
                "HDFC-77123",
            )
            .await
            .unwrap();
        assert_eq!(rows, 1);

        let row = &store.list_by_school("SCH-001").await.unwrap()[0];
        assert_eq!(row.status, TransactionStatus::Success);
        assert_eq!(row.transaction_amount, 1499.5);
        assert_eq!(row.gateway, "razorpay");
        assert_eq!(row.bank_reference.as_deref(), Some("HDFC-77123"));
        // untouched by the gateway info update
        assert_eq!(row.order_amount, 0.0);
        assert_eq!(row.school_id, "SCH-001");
    }

    #[tokio::test]
    async fn listings_are_newest_first_and_empty_store_lists_empty() {
        let store = test_store().await;

        assert!(store.list_all().await.unwrap().is_empty());
        assert!(store.list_by_school("SCH-001").await.unwrap().is_empty());

        for (collect_id, order_id) in [("COL1", "ORD1"), ("COL2", "ORD2"), ("COL3", "ORD3")] {
            store.insert(collect_id, "SCH-001", order_id).await.unwrap();
            // keep created_at strictly increasing
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let all = store.list_all().await.unwrap();
        let ids: Vec<&str> = all.iter().map(|t| t.collect_id.as_str()).collect();
        assert_eq!(ids, ["COL3", "COL2", "COL1"]);

        let school = store.list_by_school("SCH-001").await.unwrap();
        let ids: Vec<&str> = school.iter().map(|t| t.collect_id.as_str()).collect();
        assert_eq!(ids, ["COL3", "COL2", "COL1"]);
    }

    #[tokio::test]
    async fn school_listing_filters_by_school() {
        let store = test_store().await;
        store.insert("COL1", "SCH-001", "ORD1").await.unwrap();
        store.insert("COL2", "SCH-002", "ORD2").await.unwrap();

        let rows = store.list_by_school("SCH-002").await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].collect_id, "COL2");
    }

    #[tokio::test]
    async fn unknown_custom_order_id_finds_nothing() {
        let store = test_store().await;

        let found = store.find_by_custom_order_id("ORDnope").await.unwrap();

        assert!(found.is_none());
    }
}
