//! Room catalog generator.
//!
//! Every hotel carries the same fixed four-tier lineup; only surface, view,
//! and base price vary within tier-specific ranges.

use rand::Rng;

use stayseed_core::{Photo, Room, RoomTier};

use crate::attributes::{self, ROOM_PHOTO_CATEGORIES};
use crate::offers;

struct TierSpec {
    tier: RoomTier,
    category: &'static str,
    beds: &'static str,
    bed_count: i16,
    max_adults: i16,
    max_children: i16,
    surface_m2: (i32, i32),
    views: &'static [&'static str],
    description: &'static str,
    base_price: (i32, i32),
}

const TIERS: [TierSpec; 4] = [
    TierSpec {
        tier: RoomTier::Standard,
        category: "Comfort",
        beds: "1 double bed",
        bed_count: 1,
        max_adults: 2,
        max_children: 1,
        surface_m2: (20, 30),
        views: &["City", "Inner courtyard", "Street"],
        description: "Comfortable room with everything needed for a pleasant stay.",
        base_price: (80, 150),
    },
    TierSpec {
        tier: RoomTier::Deluxe,
        category: "Superior",
        beds: "1 king-size bed",
        bed_count: 1,
        max_adults: 2,
        max_children: 2,
        surface_m2: (30, 45),
        views: &["City", "Landmark", "Sea", "Mountain"],
        description: "Spacious room with high-end amenities and a panoramic view.",
        base_price: (150, 280),
    },
    TierSpec {
        tier: RoomTier::JuniorSuite,
        category: "Luxury",
        beds: "1 king-size bed",
        bed_count: 1,
        max_adults: 2,
        max_children: 2,
        surface_m2: (45, 65),
        views: &["Panoramic", "Sea", "Landmark", "Mountain"],
        description: "Elegant suite with a separate lounge and premium amenities.",
        base_price: (280, 450),
    },
    TierSpec {
        tier: RoomTier::PresidentialSuite,
        category: "Prestige",
        beds: "1 king-size bed + 1 sofa bed",
        bed_count: 2,
        max_adults: 4,
        max_children: 2,
        surface_m2: (65, 120),
        views: &["Panoramic"],
        description: "Luxurious suite with two bedrooms, a large lounge, and a private terrace.",
        base_price: (450, 850),
    },
];

/// Build the four-tier room lineup for a hotel in `city`.
///
/// The output always holds exactly four rooms, one per tier, in the declared
/// tier order, each with its three photos and its priced offers.
pub fn room_catalog(rng: &mut impl Rng, city: &str) -> Vec<Room> {
    TIERS.iter().map(|spec| build_room(rng, city, spec)).collect()
}

fn build_room(rng: &mut impl Rng, city: &str, spec: &TierSpec) -> Room {
    let (surface_min, surface_max) = spec.surface_m2;
    let (price_min, price_max) = spec.base_price;
    let base_price = rng.random_range(price_min..=price_max);

    let photos = ROOM_PHOTO_CATEGORIES
        .iter()
        .enumerate()
        .map(|(position, (category, search_term))| Photo {
            url: attributes::photo_url(search_term, city),
            category: (*category).to_string(),
            position: position as i16,
        })
        .collect();

    Room {
        tier: spec.tier,
        category: spec.category.to_string(),
        beds: spec.beds.to_string(),
        bed_count: spec.bed_count,
        max_adults: spec.max_adults,
        max_children: spec.max_children,
        surface_m2: rng.random_range(surface_min..=surface_max),
        view: attributes::pick(rng, spec.views).to_string(),
        description: spec.description.to_string(),
        base_price,
        photos,
        offers: offers::offers_for(base_price, rng),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn catalog_holds_each_tier_once_in_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let rooms = room_catalog(&mut rng, "Prague");
        let tiers: Vec<RoomTier> = rooms.iter().map(|room| room.tier).collect();
        assert_eq!(tiers, RoomTier::ALL);
    }

    #[test]
    fn base_prices_respect_tier_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..50 {
            let rooms = room_catalog(&mut rng, "Dubai");
            let ranges = [(80, 150), (150, 280), (280, 450), (450, 850)];
            for (room, (min, max)) in rooms.iter().zip(ranges) {
                assert!((min..=max).contains(&room.base_price));
                assert_eq!(room.photos.len(), 3);
                assert!((2..=4).contains(&room.offers.len()));
            }
        }
    }
}
