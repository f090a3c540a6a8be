//! Hotel entity generator.
//!
//! Orchestrates the attribute library and the room, offer, and review
//! generators to build complete hotel aggregates for one destination.

use chrono::NaiveDate;
use rand::Rng;
use tracing::debug;

use stayseed_core::{Amenities, Destination, Hotel, Photo};

use crate::attributes::{self, HOTEL_PHOTO_CATEGORIES};
use crate::reviews;
use crate::rooms;

/// Generate exactly `target_count` hotel aggregates for a destination.
pub fn generate_destination(
    rng: &mut impl Rng,
    destination: &Destination,
    today: NaiveDate,
) -> Vec<Hotel> {
    (0..destination.target_count)
        .map(|slot| generate_hotel(rng, destination, slot, today))
        .collect()
}

/// Generate the hotel aggregate for one slot of a destination.
pub fn generate_hotel(
    rng: &mut impl Rng,
    destination: &Destination,
    slot: u32,
    today: NaiveDate,
) -> Hotel {
    let city = destination.name.as_str();
    let name = attributes::hotel_name(rng, city);

    let photos = HOTEL_PHOTO_CATEGORIES
        .iter()
        .enumerate()
        .map(|(position, (category, search_term))| Photo {
            url: attributes::photo_url(search_term, city),
            category: (*category).to_string(),
            position: position as i16,
        })
        .collect();

    let hotel = Hotel {
        external_id: external_id(city, slot),
        email: attributes::contact_email(&name),
        description: format!(
            "Beautiful property in the heart of {city}. This hotel offers exceptional \
             service and modern amenities for an unforgettable stay, ideally located \
             for exploring the city's main attractions."
        ),
        address: attributes::street_address(rng),
        postal_code: attributes::postal_code(rng),
        city: city.to_string(),
        country: destination.country.clone(),
        phone: attributes::phone_number(rng),
        stars: attributes::star_rating(rng),
        rating: attributes::aggregate_rating(rng),
        review_count: attributes::review_total(rng),
        latitude: attributes::jitter_coordinate(rng, destination.latitude),
        longitude: attributes::jitter_coordinate(rng, destination.longitude),
        amenities: generate_amenities(rng),
        photos,
        rooms: rooms::room_catalog(rng, city),
        reviews: reviews::reviews_for(rng, &name, city, today),
        name,
    };

    debug!(
        hotel = %hotel.name,
        stars = hotel.stars,
        rating = hotel.rating,
        offers = hotel.offer_count(),
        "hotel generated"
    );

    hotel
}

fn external_id(city: &str, slot: u32) -> String {
    let city_slug = city.to_lowercase().replace(' ', "_");
    format!("booking_{city_slug}_{}", slot + 1)
}

/// Amenity flags; wifi, air conditioning, TV, non-smoking, and safe are
/// always set, restaurants and gyms are common, the rest is a coin flip.
fn generate_amenities(rng: &mut impl Rng) -> Amenities {
    Amenities {
        parking: rng.random_bool(0.5),
        restaurant: rng.random_bool(2.0 / 3.0),
        wifi: true,
        pool: rng.random_bool(0.5),
        spa: rng.random_bool(0.5),
        gym: rng.random_bool(2.0 / 3.0),
        air_conditioning: true,
        non_smoking: true,
        pet_allowed: rng.random_bool(0.5),
        tv: true,
        minibar: rng.random_bool(0.5),
        safe: true,
    }
}
