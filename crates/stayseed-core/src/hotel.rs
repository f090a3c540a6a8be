use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A fully populated hotel aggregate.
///
/// The hotel exclusively owns its amenities, photos, rooms (with their own
/// photos and offers), and reviews; the whole graph is persisted or rolled
/// back as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    /// Stable identifier in the shape the scraping pipeline would produce.
    pub external_id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    pub email: String,
    /// Star classification, always 3, 4 or 5.
    pub stars: i16,
    /// Aggregate guest score in [7.5, 9.8], one decimal.
    pub rating: f64,
    pub review_count: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub amenities: Amenities,
    pub photos: Vec<Photo>,
    pub rooms: Vec<Room>,
    pub reviews: Vec<Review>,
}

impl Hotel {
    /// URL of the first photo, used as the hotel's primary image.
    pub fn main_photo_url(&self) -> Option<&str> {
        self.photos.first().map(|photo| photo.url.as_str())
    }

    pub fn offer_count(&self) -> usize {
        self.rooms.iter().map(|room| room.offers.len()).sum()
    }
}

/// Amenity flags for one hotel, exactly one record per hotel.
///
/// Wifi, air conditioning, TV, non-smoking rooms, and an in-room safe are
/// always present by policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenities {
    pub parking: bool,
    pub restaurant: bool,
    pub wifi: bool,
    pub pool: bool,
    pub spa: bool,
    pub gym: bool,
    pub air_conditioning: bool,
    pub non_smoking: bool,
    pub pet_allowed: bool,
    pub tv: bool,
    pub minibar: bool,
    pub safe: bool,
}

/// Ordered photo reference owned by a hotel or a room.
///
/// The position is unique within its owner and fixes the category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub url: String,
    pub category: String,
    pub position: i16,
}

/// The four fixed room tiers, in their declared catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomTier {
    Standard,
    Deluxe,
    JuniorSuite,
    PresidentialSuite,
}

impl RoomTier {
    pub const ALL: [RoomTier; 4] = [
        RoomTier::Standard,
        RoomTier::Deluxe,
        RoomTier::JuniorSuite,
        RoomTier::PresidentialSuite,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoomTier::Standard => "Standard",
            RoomTier::Deluxe => "Deluxe",
            RoomTier::JuniorSuite => "Junior Suite",
            RoomTier::PresidentialSuite => "Presidential Suite",
        }
    }
}

/// One room type, belonging to exactly one hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub tier: RoomTier,
    /// Marketing category label for the tier.
    pub category: String,
    pub beds: String,
    pub bed_count: i16,
    pub max_adults: i16,
    pub max_children: i16,
    pub surface_m2: i32,
    pub view: String,
    pub description: String,
    /// Nightly price of the flexible rate, in whole currency units.
    pub base_price: i32,
    pub photos: Vec<Photo>,
    pub offers: Vec<Offer>,
}

/// Meal-inclusion level of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardType {
    None,
    Breakfast,
    HalfBoard,
    FullBoard,
}

impl BoardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardType::None => "none",
            BoardType::Breakfast => "breakfast",
            BoardType::HalfBoard => "half_board",
            BoardType::FullBoard => "full_board",
        }
    }
}

/// A rate plan attached to one room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub name: String,
    /// Nightly price in whole currency units.
    pub price: i32,
    pub currency: String,
    pub cancellation_policy: String,
    pub free_cancellation_days: i16,
    pub refundable: bool,
    pub breakfast_included: bool,
    pub board: BoardType,
    pub description: String,
}

/// A synthetic guest review, belonging to exactly one hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub username: String,
    /// Guest score in [7.5, 10.0], one decimal.
    pub rating: f64,
    pub title: String,
    pub comment: String,
    pub date: NaiveDate,
    /// ISO country code of the reviewer.
    pub country: String,
    pub traveler_type: String,
    pub language: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_declared_in_catalog_order() {
        let labels: Vec<&str> = RoomTier::ALL.iter().map(RoomTier::label).collect();
        assert_eq!(
            labels,
            ["Standard", "Deluxe", "Junior Suite", "Presidential Suite"]
        );
    }

    #[test]
    fn board_type_serializes_as_snake_case() {
        for board in [
            BoardType::None,
            BoardType::Breakfast,
            BoardType::HalfBoard,
            BoardType::FullBoard,
        ] {
            let json = serde_json::to_string(&board).expect("serializes");
            assert_eq!(json, format!("\"{}\"", board.as_str()));
        }
    }
}
