//! Synthetic hotel-catalog generation for Stayseed.
//!
//! This crate fabricates plausible hotel aggregates for a destination,
//! replacing the network/HTML retrieval layer with seeded randomized
//! generation. All generators are total: they cannot fail for a valid
//! destination descriptor and perform no I/O.

pub mod attributes;
pub mod hotels;
pub mod offers;
pub mod reviews;
pub mod rooms;
pub mod source;

pub use hotels::{generate_destination, generate_hotel};
pub use source::{HotelSource, SourceKind, SyntheticSource};
