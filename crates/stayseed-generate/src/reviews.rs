//! Review generator.
//!
//! Synthesizes 3-6 guest reviews per hotel from fixed pools; ratings, dates,
//! and identities are drawn independently per review.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use stayseed_core::Review;

use crate::attributes::{pick, round_tenths};

const FIRST_NAMES: [&str; 16] = [
    "Marie", "Jean", "Sophie", "Pierre", "Emma", "Lucas", "Chloe", "Thomas", "John", "Sarah",
    "Michael", "Lisa", "David", "Anna", "Hans", "Julia",
];
const LAST_INITIALS: [&str; 5] = ["L.", "M.", "K.", "S.", "D."];

const TITLES: [&str; 6] = [
    "Exceptional stay!",
    "Perfect for a weekend",
    "Excellent hotel",
    "Great location",
    "Highly recommended",
    "Superb property",
];

const COUNTRIES: [&str; 8] = ["FR", "UK", "DE", "US", "IT", "ES", "NL", "BE"];
const TRAVELER_TYPES: [&str; 4] = ["couple", "family", "solo", "business"];

const REVIEW_LANGUAGE: &str = "en";

/// Oldest and newest allowed review age, in days before `today`.
const REVIEW_AGE_DAYS: (i64, i64) = (10, 180);

/// Generate 3-6 reviews for a hotel.
pub fn reviews_for(
    rng: &mut impl Rng,
    hotel_name: &str,
    city: &str,
    today: NaiveDate,
) -> Vec<Review> {
    let count = rng.random_range(3..=6);
    (0..count)
        .map(|_| build_review(rng, hotel_name, city, today))
        .collect()
}

fn build_review(rng: &mut impl Rng, hotel_name: &str, city: &str, today: NaiveDate) -> Review {
    let (min_age, max_age) = REVIEW_AGE_DAYS;
    Review {
        username: format!("{} {}", pick(rng, &FIRST_NAMES), pick(rng, &LAST_INITIALS)),
        rating: round_tenths(rng.random_range(7.5..=10.0)),
        title: pick(rng, &TITLES).to_string(),
        comment: comment_for(rng, hotel_name, city),
        date: today - Duration::days(rng.random_range(min_age..=max_age)),
        country: pick(rng, &COUNTRIES).to_string(),
        traveler_type: pick(rng, &TRAVELER_TYPES).to_string(),
        language: REVIEW_LANGUAGE.to_string(),
    }
}

fn comment_for(rng: &mut impl Rng, hotel_name: &str, city: &str) -> String {
    match rng.random_range(0..5) {
        0 => format!(
            "Wonderful hotel in the heart of {city}. Attentive staff and spotless rooms."
        ),
        1 => format!(
            "Excellent stay at {hotel_name}. The view from the room was superb and the service impeccable."
        ),
        2 => format!(
            "A quality hotel ideally located for visiting {city}. The breakfast was delicious."
        ),
        3 => "Very satisfied with our stay. Spacious, clean, well-equipped rooms. We will be back!"
            .to_string(),
        _ => "Welcoming, professional staff. The hotel sits right next to the main attractions."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn review_counts_ratings_and_dates_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let today = NaiveDate::from_ymd_opt(2026, 8, 27).expect("valid date");
        for _ in 0..50 {
            let reviews = reviews_for(&mut rng, "Grand Tokyo Palace", "Tokyo", today);
            assert!((3..=6).contains(&reviews.len()));
            for review in &reviews {
                assert!((7.5..=10.0).contains(&review.rating));
                let age = (today - review.date).num_days();
                assert!((10..=180).contains(&age));
                assert_eq!(review.language, "en");
            }
        }
    }
}
