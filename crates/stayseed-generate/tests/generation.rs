use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stayseed_core::{BoardType, Destination, RoomTier};
use stayseed_generate::offers::apply_multiplier;
use stayseed_generate::{HotelSource, SyntheticSource, generate_destination};

fn destination(name: &str, country: &str, target_count: u32) -> Destination {
    Destination::new(name, country, 48.8566, 2.3522, target_count)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 27).expect("valid date")
}

#[test]
fn aggregate_cardinalities_hold_for_every_hotel() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let hotels = generate_destination(&mut rng, &destination("Paris", "France", 9), today());
    assert_eq!(hotels.len(), 9);

    for hotel in &hotels {
        assert_eq!(hotel.photos.len(), 5);
        assert_eq!(hotel.rooms.len(), 4);
        assert!((3..=6).contains(&hotel.reviews.len()));
        for room in &hotel.rooms {
            assert_eq!(room.photos.len(), 3);
            assert!((2..=4).contains(&room.offers.len()));
        }
    }
}

#[test]
fn photo_positions_are_unique_and_map_to_categories() {
    let mut rng = ChaCha8Rng::seed_from_u64(100);
    let hotels = generate_destination(&mut rng, &destination("Tokyo", "Japan", 3), today());
    for hotel in &hotels {
        let categories: Vec<(&str, i16)> = hotel
            .photos
            .iter()
            .map(|photo| (photo.category.as_str(), photo.position))
            .collect();
        assert_eq!(
            categories,
            [
                ("facade", 0),
                ("lobby", 1),
                ("restaurant", 2),
                ("pool", 3),
                ("spa", 4)
            ]
        );
        for room in &hotel.rooms {
            let categories: Vec<(&str, i16)> = room
                .photos
                .iter()
                .map(|photo| (photo.category.as_str(), photo.position))
                .collect();
            assert_eq!(categories, [("general", 0), ("bathroom", 1), ("view", 2)]);
        }
    }
}

#[test]
fn pricing_identities_hold_across_many_rooms() {
    let mut rng = ChaCha8Rng::seed_from_u64(101);
    let hotels = generate_destination(&mut rng, &destination("Dubai", "UAE", 25), today());

    for hotel in &hotels {
        for room in &hotel.rooms {
            let flexible = room
                .offers
                .iter()
                .find(|offer| offer.name == "Flexible")
                .expect("flexible offer");
            assert_eq!(flexible.price, room.base_price);
            assert!(flexible.refundable);

            let non_refundable = room
                .offers
                .iter()
                .find(|offer| offer.name == "Non-refundable")
                .expect("non-refundable offer");
            assert_eq!(non_refundable.price, apply_multiplier(room.base_price, 0.80));
            assert!(!non_refundable.refundable);
            assert_eq!(non_refundable.free_cancellation_days, 0);

            if let Some(breakfast) = room
                .offers
                .iter()
                .find(|offer| offer.board == BoardType::Breakfast)
            {
                assert_eq!(breakfast.price, apply_multiplier(room.base_price, 1.15));
                assert!(breakfast.breakfast_included);
            }

            let boards: Vec<_> = room
                .offers
                .iter()
                .filter(|offer| {
                    matches!(offer.board, BoardType::HalfBoard | BoardType::FullBoard)
                })
                .collect();
            if room.base_price > 250 {
                assert_eq!(boards.len(), 1);
            } else {
                assert!(boards.is_empty());
            }
        }
    }
}

#[test]
fn tier_order_is_fixed_and_ratings_stay_in_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(102);
    let hotels = generate_destination(&mut rng, &destination("Prague", "Czech Republic", 8), today());

    for hotel in &hotels {
        let tiers: Vec<RoomTier> = hotel.rooms.iter().map(|room| room.tier).collect();
        assert_eq!(tiers, RoomTier::ALL);
        assert!((3..=5).contains(&hotel.stars));
        assert!((7.5..=9.8).contains(&hotel.rating));
        assert!((250..=2500).contains(&hotel.review_count));
        for review in &hotel.reviews {
            assert!((7.5..=10.0).contains(&review.rating));
        }
    }
}

#[test]
fn external_ids_are_unique_within_a_destination() {
    let mut rng = ChaCha8Rng::seed_from_u64(103);
    let hotels = generate_destination(&mut rng, &destination("New York", "United States", 9), today());
    let ids: Vec<&str> = hotels.iter().map(|h| h.external_id.as_str()).collect();
    assert_eq!(ids[0], "booking_new_york_1");
    assert_eq!(ids[8], "booking_new_york_9");
    let mut deduped = ids.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[test]
fn source_honors_destination_target_counts() {
    let today = today();
    let mut source = SyntheticSource::with_today(7, today);
    for count in [0, 1, 8] {
        let hotels = source.fetch(&destination("Bali", "Indonesia", count));
        assert_eq!(hotels.len(), count as usize);
    }
}
