use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, info};

use stayseed_core::{Hotel, Offer, Photo, Review, Room};

use crate::error::StoreError;
use crate::HotelStore;

/// Rows written for one hotel aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistedCounts {
    pub rooms: u64,
    pub offers: u64,
    pub reviews: u64,
}

/// Persistence gateway over a single-connection Postgres pool.
///
/// The pool is capped at one connection: the whole run owns exactly one
/// store connection, acquired at startup and released by [`HotelStore::close`].
#[derive(Debug, Clone)]
pub struct PostgresGateway {
    pool: PgPool,
}

impl PostgresGateway {
    /// Connect to the store. Failure here is fatal for the run.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await
            .map_err(StoreError::Connection)?;
        info!("store connection established");
        Ok(Self { pool })
    }

    /// Wrap a pre-configured pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl HotelStore for PostgresGateway {
    /// Insert the aggregate in foreign-key order: hotel, hotel photos,
    /// amenities, then per room the room, its photos, and its offers, and
    /// finally the reviews. Any failure rolls the transaction back when it
    /// drops, leaving no rows for this hotel.
    async fn persist(&self, hotel: &Hotel) -> Result<PersistedCounts, StoreError> {
        let mut tx = self.pool.begin().await.map_err(StoreError::transaction)?;
        let mut counts = PersistedCounts::default();

        let hotel_id = insert_hotel(&mut tx, hotel).await?;

        for photo in &hotel.photos {
            insert_hotel_photo(&mut tx, hotel_id, photo).await?;
        }

        insert_amenities(&mut tx, hotel_id, hotel).await?;

        for room in &hotel.rooms {
            let room_id = insert_room(&mut tx, hotel_id, room).await?;
            counts.rooms += 1;
            for photo in &room.photos {
                insert_room_photo(&mut tx, room_id, photo).await?;
            }
            for offer in &room.offers {
                insert_offer(&mut tx, hotel_id, room_id, offer).await?;
                counts.offers += 1;
            }
        }

        for review in &hotel.reviews {
            insert_review(&mut tx, hotel_id, review).await?;
            counts.reviews += 1;
        }

        tx.commit().await.map_err(StoreError::transaction)?;

        debug!(
            hotel = %hotel.name,
            hotel_id,
            rooms = counts.rooms,
            offers = counts.offers,
            reviews = counts.reviews,
            "hotel aggregate committed"
        );

        Ok(counts)
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("store connection closed");
    }
}

const INSERT_HOTEL: &str = r#"
insert into hotel (
  external_id, name, description, address, postal_code,
  city, country, phone, email, main_photo_url,
  stars, rating, review_count, latitude, longitude
) values ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
returning id
"#;

const INSERT_HOTEL_PHOTO: &str = r#"
insert into hotel_photo (hotel_id, url, category, position)
values ($1, $2, $3, $4)
"#;

const INSERT_AMENITIES: &str = r#"
insert into hotel_amenities (
  hotel_id, parking, restaurant, wifi, pool, spa, gym,
  air_conditioning, non_smoking, pet_allowed, tv, minibar, safe
) values ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
"#;

const INSERT_ROOM: &str = r#"
insert into room (
  hotel_id, tier, category, beds, bed_count,
  max_adults, max_children, surface_m2, view, description, base_price
) values ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
returning id
"#;

const INSERT_ROOM_PHOTO: &str = r#"
insert into room_photo (room_id, url, category, position)
values ($1, $2, $3, $4)
"#;

const INSERT_OFFER: &str = r#"
insert into offer (
  hotel_id, room_id, name, price, currency, cancellation_policy,
  free_cancellation_days, refundable, breakfast_included, board, description
) values ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
"#;

const INSERT_REVIEW: &str = r#"
insert into review (
  hotel_id, username, rating, title, comment,
  review_date, country, traveler_type, language
) values ($1, $2, $3, $4, $5, $6, $7, $8, $9)
"#;

async fn insert_hotel(
    tx: &mut Transaction<'_, Postgres>,
    hotel: &Hotel,
) -> Result<i64, StoreError> {
    sqlx::query_scalar::<_, i64>(INSERT_HOTEL)
        .bind(&hotel.external_id)
        .bind(&hotel.name)
        .bind(&hotel.description)
        .bind(&hotel.address)
        .bind(&hotel.postal_code)
        .bind(&hotel.city)
        .bind(&hotel.country)
        .bind(&hotel.phone)
        .bind(&hotel.email)
        .bind(hotel.main_photo_url())
        .bind(hotel.stars)
        .bind(hotel.rating)
        .bind(hotel.review_count)
        .bind(hotel.latitude)
        .bind(hotel.longitude)
        .fetch_one(&mut **tx)
        .await
        .map_err(|err| StoreError::insert("hotel", err))
}

async fn insert_hotel_photo(
    tx: &mut Transaction<'_, Postgres>,
    hotel_id: i64,
    photo: &Photo,
) -> Result<(), StoreError> {
    sqlx::query(INSERT_HOTEL_PHOTO)
        .bind(hotel_id)
        .bind(&photo.url)
        .bind(&photo.category)
        .bind(photo.position)
        .execute(&mut **tx)
        .await
        .map_err(|err| StoreError::insert("hotel_photo", err))?;
    Ok(())
}

async fn insert_amenities(
    tx: &mut Transaction<'_, Postgres>,
    hotel_id: i64,
    hotel: &Hotel,
) -> Result<(), StoreError> {
    let amenities = &hotel.amenities;
    sqlx::query(INSERT_AMENITIES)
        .bind(hotel_id)
        .bind(amenities.parking)
        .bind(amenities.restaurant)
        .bind(amenities.wifi)
        .bind(amenities.pool)
        .bind(amenities.spa)
        .bind(amenities.gym)
        .bind(amenities.air_conditioning)
        .bind(amenities.non_smoking)
        .bind(amenities.pet_allowed)
        .bind(amenities.tv)
        .bind(amenities.minibar)
        .bind(amenities.safe)
        .execute(&mut **tx)
        .await
        .map_err(|err| StoreError::insert("hotel_amenities", err))?;
    Ok(())
}

async fn insert_room(
    tx: &mut Transaction<'_, Postgres>,
    hotel_id: i64,
    room: &Room,
) -> Result<i64, StoreError> {
    sqlx::query_scalar::<_, i64>(INSERT_ROOM)
        .bind(hotel_id)
        .bind(room.tier.label())
        .bind(&room.category)
        .bind(&room.beds)
        .bind(room.bed_count)
        .bind(room.max_adults)
        .bind(room.max_children)
        .bind(room.surface_m2)
        .bind(&room.view)
        .bind(&room.description)
        .bind(room.base_price)
        .fetch_one(&mut **tx)
        .await
        .map_err(|err| StoreError::insert("room", err))
}

async fn insert_room_photo(
    tx: &mut Transaction<'_, Postgres>,
    room_id: i64,
    photo: &Photo,
) -> Result<(), StoreError> {
    sqlx::query(INSERT_ROOM_PHOTO)
        .bind(room_id)
        .bind(&photo.url)
        .bind(&photo.category)
        .bind(photo.position)
        .execute(&mut **tx)
        .await
        .map_err(|err| StoreError::insert("room_photo", err))?;
    Ok(())
}

async fn insert_offer(
    tx: &mut Transaction<'_, Postgres>,
    hotel_id: i64,
    room_id: i64,
    offer: &Offer,
) -> Result<(), StoreError> {
    sqlx::query(INSERT_OFFER)
        .bind(hotel_id)
        .bind(room_id)
        .bind(&offer.name)
        .bind(offer.price)
        .bind(&offer.currency)
        .bind(&offer.cancellation_policy)
        .bind(offer.free_cancellation_days)
        .bind(offer.refundable)
        .bind(offer.breakfast_included)
        .bind(offer.board.as_str())
        .bind(&offer.description)
        .execute(&mut **tx)
        .await
        .map_err(|err| StoreError::insert("offer", err))?;
    Ok(())
}

async fn insert_review(
    tx: &mut Transaction<'_, Postgres>,
    hotel_id: i64,
    review: &Review,
) -> Result<(), StoreError> {
    sqlx::query(INSERT_REVIEW)
        .bind(hotel_id)
        .bind(&review.username)
        .bind(review.rating)
        .bind(&review.title)
        .bind(&review.comment)
        .bind(review.date)
        .bind(&review.country)
        .bind(&review.traveler_type)
        .bind(&review.language)
        .execute(&mut **tx)
        .await
        .map_err(|err| StoreError::insert("review", err))?;
    Ok(())
}
