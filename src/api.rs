use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use leptos::logging::{error, log};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::Session;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::reservation::{NewReservation, Reservation};
use crate::models::restaurant::Restaurant;
use crate::models::review::{NewReview, Review};

/// Reads and writes against the restaurant backend. Every call is one
/// independent round-trip; only the two `create_*` calls mutate anything.
#[async_trait(?Send)]
pub trait RestaurantApi {
    async fn list_reservations(&self) -> Result<Vec<Reservation>, ApiError>;

    async fn get_restaurant(&self, id: &str) -> Result<Restaurant, ApiError>;

    async fn get_reservation(&self, id: &str) -> Result<Reservation, ApiError>;

    async fn get_review(&self, id: &str) -> Result<Review, ApiError>;

    /// Fails with `Unauthorized` without touching the network when the
    /// session carries no token or no user id. `Decode` from either create
    /// call means the backend accepted the write but its response body was
    /// not the created record.
    async fn create_reservation(
        &self,
        session: &Session,
        reservation: &NewReservation,
    ) -> Result<Reservation, ApiError>;

    async fn create_review(&self, session: &Session, review: &NewReview) -> Result<Review, ApiError>;
}

pub fn restaurant_path(id: &str) -> String {
    format!("restaurantes/{}", urlencoding::encode(id))
}

pub fn reservation_path(id: &str) -> String {
    format!("reservas/{}", urlencoding::encode(id))
}

pub fn review_path(id: &str) -> String {
    format!("resenas/{}", urlencoding::encode(id))
}

/// `RestaurantApi` over the browser's fetch.
#[derive(Debug, Clone, Default)]
pub struct HttpRestaurantApi {
    config: ApiConfig,
}

impl HttpRestaurantApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        log!("[API] GET {}", url);
        let response = Request::get(&url).send().await.map_err(|e| {
            error!("[API] GET {} failed: {:?}", url, e);
            ApiError::from(e)
        })?;
        read_json(response).await
    }

    async fn post_json<B, T>(&self, path: &str, session: &Session, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let bearer = session.bearer().ok_or(ApiError::Unauthorized)?;
        if session.user_id().is_none() {
            return Err(ApiError::Unauthorized);
        }
        let url = self.config.endpoint(path);
        log!("[API] POST {}", url);
        let response = Request::post(&url)
            .header("Authorization", &bearer)
            .json(body)
            .map_err(|e| ApiError::Network(format!("could not encode request body: {}", e)))?
            .send()
            .await
            .map_err(|e| {
                error!("[API] POST {} failed: {:?}", url, e);
                ApiError::from(e)
            })?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        error!("[API] {} answered {}: {}", response.url(), status, body);
        return Err(ApiError::from_status(status, body));
    }
    response.json::<T>().await.map_err(ApiError::from)
}

#[async_trait(?Send)]
impl RestaurantApi for HttpRestaurantApi {
    async fn list_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.get_json("reservas").await
    }

    async fn get_restaurant(&self, id: &str) -> Result<Restaurant, ApiError> {
        self.get_json(&restaurant_path(id)).await
    }

    async fn get_reservation(&self, id: &str) -> Result<Reservation, ApiError> {
        self.get_json(&reservation_path(id)).await
    }

    async fn get_review(&self, id: &str) -> Result<Review, ApiError> {
        self.get_json(&review_path(id)).await
    }

    async fn create_reservation(
        &self,
        session: &Session,
        reservation: &NewReservation,
    ) -> Result<Reservation, ApiError> {
        log!(
            "[API] Booking {} {} at restaurant {}",
            reservation.date,
            reservation.time,
            reservation.restaurant_id
        );
        self.post_json("reservas", session, reservation).await
    }

    async fn create_review(&self, session: &Session, review: &NewReview) -> Result<Review, ApiError> {
        self.post_json("resenas", session, review).await
    }
}
