use tracing::warn;

use stayseed_core::Hotel;
use stayseed_store::{HotelStore, PersistedCounts, StoreError};

/// Store substitute for `--dry-run`: prints each aggregate as one JSON
/// document on stdout instead of writing to a database.
pub struct DryRunStore;

#[async_trait::async_trait]
impl HotelStore for DryRunStore {
    async fn persist(&self, hotel: &Hotel) -> Result<PersistedCounts, StoreError> {
        match serde_json::to_string(hotel) {
            Ok(line) => println!("{line}"),
            Err(err) => warn!(hotel = %hotel.name, error = %err, "failed to serialize hotel"),
        }
        Ok(PersistedCounts {
            rooms: hotel.rooms.len() as u64,
            offers: hotel.offer_count() as u64,
            reviews: hotel.reviews.len() as u64,
        })
    }
}
