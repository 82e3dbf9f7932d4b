//! Database transaction utilities
//!
//! An ingestion run is transaction-as-control-flow: the upload record, every
//! earnings row, and the final status stamp commit together or not at all.
//! [`TransactionGuard`] wraps the underlying transaction so the run code can
//! pass it to `_tx` repository methods and still decide commit vs rollback at
//! the end.

use fleetops_core::AppError;
use sqlx::{PgPool, Postgres, Transaction};
use std::ops::{Deref, DerefMut};

/// A database transaction that must be explicitly committed or rolled back.
///
/// Dropping the guard without finishing it logs a warning; the connection
/// rolls the transaction back when it returns to the pool, so nothing leaks,
/// but a run should always reach one of the two explicit ends.
///
/// # Example
///
/// ```ignore
/// use fleetops_db::db::transaction::TransactionGuard;
///
/// async fn example(pool: &sqlx::PgPool) -> Result<(), fleetops_core::AppError> {
///     let mut tx = TransactionGuard::begin(pool).await?;
///     sqlx::query("INSERT INTO ...").execute(&mut **tx).await?;
///     tx.commit().await?;
///     Ok(())
/// }
/// ```
pub struct TransactionGuard {
    transaction: Option<Transaction<'static, Postgres>>,
}

impl TransactionGuard {
    /// Begin a new database transaction.
    pub async fn begin(pool: &PgPool) -> Result<Self, AppError> {
        let transaction = pool.begin().await?;
        Ok(Self {
            transaction: Some(transaction),
        })
    }

    /// Commit the transaction, consuming the guard.
    pub async fn commit(mut self) -> Result<(), AppError> {
        if let Some(tx) = self.transaction.take() {
            tx.commit().await?;
        }
        Ok(())
    }

    /// Roll the transaction back, consuming the guard.
    pub async fn rollback(mut self) -> Result<(), AppError> {
        if let Some(tx) = self.transaction.take() {
            tx.rollback().await?;
        }
        Ok(())
    }
}

impl Deref for TransactionGuard {
    type Target = Transaction<'static, Postgres>;

    fn deref(&self) -> &Self::Target {
        self.transaction
            .as_ref()
            .expect("transaction was already committed or rolled back")
    }
}

impl DerefMut for TransactionGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.transaction
            .as_mut()
            .expect("transaction was already committed or rolled back")
    }
}

impl Drop for TransactionGuard {
    fn drop(&mut self) {
        if self.transaction.is_some() {
            tracing::warn!(
                "transaction dropped without explicit commit or rollback; it rolls back when the connection is released"
            );
        }
    }
}
