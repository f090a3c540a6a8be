//! Persistence gateway for Stayseed.
//!
//! Maps one hotel aggregate onto ordered inserts across seven relational
//! tables inside a single transaction. The schema is an external
//! collaborator and is assumed to pre-exist; `schema.sql` in this crate is
//! reference documentation only.

pub mod error;
pub mod gateway;

pub use error::StoreError;
pub use gateway::{PersistedCounts, PostgresGateway};

use stayseed_core::Hotel;

/// Store seam for the pipeline.
///
/// [`PostgresGateway`] is the production implementation; tests and dry runs
/// substitute their own.
#[async_trait::async_trait]
pub trait HotelStore {
    /// All-or-nothing write of one hotel aggregate.
    async fn persist(&self, hotel: &Hotel) -> Result<PersistedCounts, StoreError>;

    /// Release the underlying connection. Called once, on every exit path.
    async fn close(&self) {}
}
