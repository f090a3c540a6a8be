//! Pluggable hotel source.
//!
//! The pipeline consumes hotels through [`HotelSource`], so the synthetic
//! generator can later be swapped for a real retrieval adapter without
//! touching the orchestrator. The variant is selected by configuration.

use chrono::{NaiveDate, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use stayseed_core::{Destination, Hotel};

/// Produces the hotel aggregates for one destination.
pub trait HotelSource: Send {
    fn fetch(&mut self, destination: &Destination) -> Vec<Hotel>;
}

/// Configured source variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Synthetic,
}

impl SourceKind {
    pub fn build(self, seed: u64) -> Box<dyn HotelSource> {
        match self {
            SourceKind::Synthetic => Box::new(SyntheticSource::new(seed)),
        }
    }
}

/// Seeded randomized generator standing in for the scraping layer.
///
/// Each destination draws from an RNG seeded by the run seed and the
/// destination name, so output is reproducible and independent of the order
/// destinations are processed in.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    seed: u64,
    today: NaiveDate,
}

impl SyntheticSource {
    pub fn new(seed: u64) -> Self {
        Self::with_today(seed, Utc::now().date_naive())
    }

    /// Pin the reference date reviews are aged against.
    pub fn with_today(seed: u64, today: NaiveDate) -> Self {
        Self { seed, today }
    }
}

impl HotelSource for SyntheticSource {
    fn fetch(&mut self, destination: &Destination) -> Vec<Hotel> {
        let mut rng = ChaCha8Rng::seed_from_u64(hash_seed(self.seed, &destination.name));
        crate::hotels::generate_destination(&mut rng, destination, self.today)
    }
}

/// FNV-style mix of the run seed with a destination key.
fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
