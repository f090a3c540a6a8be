use serde::{Deserialize, Serialize};

/// One target city for a seeding run.
///
/// The latitude/longitude pair is the reference point around which hotel
/// coordinates are jittered; it is a coarse approximation, not a geocode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Number of hotel aggregates to generate for this destination.
    pub target_count: u32,
}

impl Destination {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
        target_count: u32,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            latitude,
            longitude,
            target_count,
        }
    }
}
