//! Core domain model for Stayseed.
//!
//! This crate defines the hotel aggregate and the destination descriptor
//! shared by the generators, the persistence gateway, and the CLI.

pub mod destination;
pub mod hotel;

pub use destination::Destination;
pub use hotel::{Amenities, BoardType, Hotel, Offer, Photo, Review, Room, RoomTier};
