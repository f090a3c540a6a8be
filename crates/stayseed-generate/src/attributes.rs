//! Randomized attribute library.
//!
//! Pure helpers producing plausible names, addresses, photo references, and
//! numeric attributes. No state beyond the caller-provided RNG.

use rand::Rng;

const HOTEL_PREFIXES: [&str; 8] = [
    "Grand", "Le", "Hotel", "Resort", "Palace", "Luxury", "The", "Royal",
];
const HOTEL_TYPES: [&str; 6] = ["Boutique", "Spa", "Beach", "City", "Garden", "Plaza"];
const HOTEL_SUFFIXES: [&str; 6] = ["Hotel", "Resort", "Palace", "Suites", "Inn", "Lodge"];

const STREET_KINDS: [&str; 4] = ["Avenue", "Rue", "Boulevard", "Street"];
const STREET_NAMES: [&str; 5] = [
    "des Champs",
    "du Centre",
    "Principale",
    "Royale",
    "de la Paix",
];

/// Photo categories for a hotel, in display order, with their image search
/// terms. The position of a photo fixes its category.
pub const HOTEL_PHOTO_CATEGORIES: [(&str, &str); 5] = [
    ("facade", "hotel+building+exterior"),
    ("lobby", "hotel+lobby+reception"),
    ("restaurant", "hotel+restaurant"),
    ("pool", "hotel+swimming+pool"),
    ("spa", "hotel+spa+wellness"),
];

/// Photo categories for a room, in display order.
pub const ROOM_PHOTO_CATEGORIES: [(&str, &str); 3] = [
    ("general", "hotel+room+bed"),
    ("bathroom", "hotel+bathroom+luxury"),
    ("view", "hotel+room+view+window"),
];

/// Compose a hotel name from prefix/type/suffix tokens around the city name.
/// The type token is included with probability 0.5.
pub fn hotel_name(rng: &mut impl Rng, city: &str) -> String {
    let prefix = pick(rng, &HOTEL_PREFIXES);
    let suffix = pick(rng, &HOTEL_SUFFIXES);
    if rng.random_bool(0.5) {
        let type_name = pick(rng, &HOTEL_TYPES);
        format!("{prefix} {city} {type_name} {suffix}")
    } else {
        format!("{prefix} {city} {suffix}")
    }
}

pub fn street_address(rng: &mut impl Rng) -> String {
    let number = rng.random_range(1..=999);
    let kind = pick(rng, &STREET_KINDS);
    let name = pick(rng, &STREET_NAMES);
    format!("{number} {kind} {name}")
}

pub fn postal_code(rng: &mut impl Rng) -> String {
    format!("{}", rng.random_range(10000..=99999))
}

pub fn phone_number(rng: &mut impl Rng) -> String {
    format!(
        "+{}-{}-{}",
        rng.random_range(1..=999),
        rng.random_range(100..=999),
        rng.random_range(1000..=9999)
    )
}

/// Derive a contact address from the hotel name.
pub fn contact_email(hotel_name: &str) -> String {
    let host: String = hotel_name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    format!("contact@{host}.com")
}

/// Stock-photo URL for a category search term, scoped to the city.
pub fn photo_url(search_term: &str, city: &str) -> String {
    let city_query = city.replace(' ', "+");
    format!("https://source.unsplash.com/800x600/?{search_term},{city_query}")
}

/// Star rating weighted toward the upper classes: 3 stars with weight 1,
/// 4 and 5 stars with weight 2 each.
pub fn star_rating(rng: &mut impl Rng) -> i16 {
    const STARS: [i16; 5] = [3, 4, 4, 5, 5];
    STARS[rng.random_range(0..STARS.len())]
}

/// Aggregate guest score in [7.5, 9.8], one decimal.
pub fn aggregate_rating(rng: &mut impl Rng) -> f64 {
    round_tenths(rng.random_range(7.5..=9.8))
}

pub fn review_total(rng: &mut impl Rng) -> i32 {
    rng.random_range(250..=2500)
}

/// Jitter a reference coordinate by up to half a degree in either direction.
pub fn jitter_coordinate(rng: &mut impl Rng, reference: f64) -> f64 {
    reference + rng.random_range(-0.5..=0.5)
}

pub fn pick<'a>(rng: &mut impl Rng, values: &'a [&'a str]) -> &'a str {
    values[rng.random_range(0..values.len())]
}

pub(crate) fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn star_rating_stays_in_class_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let stars = star_rating(&mut rng);
            assert!((3..=5).contains(&stars));
        }
    }

    #[test]
    fn contact_email_strips_whitespace_and_lowercases() {
        assert_eq!(
            contact_email("Grand Paris Spa Hotel"),
            "contact@grandparisspahotel.com"
        );
    }

    #[test]
    fn photo_url_encodes_multi_word_cities() {
        let url = photo_url("hotel+building+exterior", "New York");
        assert_eq!(
            url,
            "https://source.unsplash.com/800x600/?hotel+building+exterior,New+York"
        );
    }

    #[test]
    fn jitter_stays_within_half_degree() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            let value = jitter_coordinate(&mut rng, 48.8566);
            assert!((48.3566..=49.3566).contains(&value));
        }
    }
}
