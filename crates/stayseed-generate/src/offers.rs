//! Offer pricing engine.
//!
//! Derives the 2-4 rate plans of a room from its base price. Prices are
//! whole currency units; multiplier results are rounded half away from zero
//! (`f64::round`), the one rounding rule used everywhere in this crate.

use rand::Rng;

use stayseed_core::{BoardType, Offer};

const CURRENCY: &str = "EUR";

/// Base price above which a room receives exactly one board offer.
pub const BOARD_PRICE_THRESHOLD: i32 = 250;

const NON_REFUNDABLE_MULTIPLIER: f64 = 0.80;
const BREAKFAST_MULTIPLIER: f64 = 1.15;
const HALF_BOARD_MULTIPLIER: f64 = 1.25;
const FULL_BOARD_MULTIPLIER: f64 = 1.40;

/// Probability that a room carries a breakfast rate.
const BREAKFAST_PROBABILITY: f64 = 0.7;

/// Build the rate plans for a room.
///
/// Every room gets a flexible offer at the base price and a non-refundable
/// offer at 80% of it. A breakfast offer is included with probability 0.7,
/// and rooms above [`BOARD_PRICE_THRESHOLD`] get exactly one of half board
/// or full board, chosen uniformly. The result always holds 2 to 4 offers.
pub fn offers_for(base_price: i32, rng: &mut impl Rng) -> Vec<Offer> {
    let mut offers = vec![
        Offer {
            name: "Flexible".to_string(),
            price: base_price,
            currency: CURRENCY.to_string(),
            cancellation_policy: "Free cancellation until 24h before arrival".to_string(),
            free_cancellation_days: 1,
            refundable: true,
            breakfast_included: false,
            board: BoardType::None,
            description: "Flexible rate with free cancellation".to_string(),
        },
        Offer {
            name: "Non-refundable".to_string(),
            price: apply_multiplier(base_price, NON_REFUNDABLE_MULTIPLIER),
            currency: CURRENCY.to_string(),
            cancellation_policy: "Non-refundable".to_string(),
            free_cancellation_days: 0,
            refundable: false,
            breakfast_included: false,
            board: BoardType::None,
            description: "Discounted non-refundable rate".to_string(),
        },
    ];

    if rng.random_bool(BREAKFAST_PROBABILITY) {
        offers.push(Offer {
            name: "Breakfast included".to_string(),
            price: apply_multiplier(base_price, BREAKFAST_MULTIPLIER),
            currency: CURRENCY.to_string(),
            cancellation_policy: "Free cancellation until 48h before arrival".to_string(),
            free_cancellation_days: 2,
            refundable: true,
            breakfast_included: true,
            board: BoardType::Breakfast,
            description: "Buffet breakfast included".to_string(),
        });
    }

    if base_price > BOARD_PRICE_THRESHOLD {
        let (board, name, multiplier, description) = if rng.random_bool(0.5) {
            (
                BoardType::HalfBoard,
                "Half board",
                HALF_BOARD_MULTIPLIER,
                "Breakfast and dinner included",
            )
        } else {
            (
                BoardType::FullBoard,
                "Full board",
                FULL_BOARD_MULTIPLIER,
                "All meals included",
            )
        };
        offers.push(Offer {
            name: name.to_string(),
            price: apply_multiplier(base_price, multiplier),
            currency: CURRENCY.to_string(),
            cancellation_policy: "Free cancellation until 7 days before arrival".to_string(),
            free_cancellation_days: 7,
            refundable: true,
            breakfast_included: true,
            board,
            description: description.to_string(),
        });
    }

    offers
}

/// Multiply a whole-unit price and round half away from zero.
pub fn apply_multiplier(base_price: i32, multiplier: f64) -> i32 {
    (f64::from(base_price) * multiplier).round() as i32
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn rounding_is_half_away_from_zero() {
        // 85 * 1.15 = 97.75 -> 98; 250 * 0.80 = 200 exactly.
        assert_eq!(apply_multiplier(85, 1.15), 98);
        assert_eq!(apply_multiplier(250, 0.80), 200);
        assert_eq!(apply_multiplier(90, 1.25), 113);
    }

    #[test]
    fn low_priced_room_never_gets_a_board_offer() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let offers = offers_for(250, &mut rng);
            assert!(offers.len() <= 3);
            assert!(
                offers
                    .iter()
                    .all(|offer| !matches!(offer.board, BoardType::HalfBoard | BoardType::FullBoard))
            );
        }
    }

    #[test]
    fn expensive_room_gets_exactly_one_board_offer() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..100 {
            let offers = offers_for(600, &mut rng);
            let boards: Vec<_> = offers
                .iter()
                .filter(|offer| {
                    matches!(offer.board, BoardType::HalfBoard | BoardType::FullBoard)
                })
                .collect();
            assert_eq!(boards.len(), 1);
            let board = boards[0];
            let expected = match board.board {
                BoardType::HalfBoard => apply_multiplier(600, 1.25),
                _ => apply_multiplier(600, 1.40),
            };
            assert_eq!(board.price, expected);
        }
    }
}
