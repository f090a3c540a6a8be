use thiserror::Error;

/// Errors raised at the persistence boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection-level failure; the run cannot continue.
    #[error("connection error: {0}")]
    Connection(#[source] sqlx::Error),
    /// A single insert failed; the hotel's transaction is rolled back and
    /// the run moves on to the next hotel.
    #[error("insert into {table} failed: {source}")]
    Insert {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },
    /// Opening or committing the per-hotel transaction failed.
    #[error("transaction error: {0}")]
    Transaction(#[source] sqlx::Error),
}

impl StoreError {
    /// Fatal errors abort the whole run; everything else only skips the
    /// hotel whose transaction failed.
    pub fn is_fatal(&self) -> bool {
        matches!(self, StoreError::Connection(_))
    }

    pub(crate) fn insert(table: &'static str, err: sqlx::Error) -> Self {
        if is_connection_error(&err) {
            StoreError::Connection(err)
        } else {
            StoreError::Insert { table, source: err }
        }
    }

    pub(crate) fn transaction(err: sqlx::Error) -> Self {
        if is_connection_error(&err) {
            StoreError::Connection(err)
        } else {
            StoreError::Transaction(err)
        }
    }
}

fn is_connection_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_loss_is_fatal() {
        let err = StoreError::insert("hotel", sqlx::Error::PoolClosed);
        assert!(err.is_fatal());
    }

    #[test]
    fn statement_failure_is_recoverable() {
        let err = StoreError::insert("offer", sqlx::Error::RowNotFound);
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("offer"));
    }
}
