//! In-memory stand-in for the restaurant backend.
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use futures::channel::oneshot;

use mesa_reservas::api::RestaurantApi;
use mesa_reservas::auth::Session;
use mesa_reservas::error::ApiError;
use mesa_reservas::models::reservation::{NewReservation, Reservation};
use mesa_reservas::models::restaurant::{MenuItem, Restaurant};
use mesa_reservas::models::review::{NewReview, Review};

#[derive(Default)]
pub struct FakeApi {
    pub restaurants: RefCell<HashMap<String, Restaurant>>,
    pub reservations: RefCell<Vec<Reservation>>,
    pub reviews: RefCell<Vec<Review>>,
    /// Every request, e.g. `GET restaurantes/r1` or `POST reservas`.
    pub calls: RefCell<Vec<String>>,
    pub posted_reservations: RefCell<Vec<NewReservation>>,
    pub posted_reviews: RefCell<Vec<NewReview>>,
    /// Requests that should fail, keyed like `calls`.
    pub failures: RefCell<HashMap<String, ApiError>>,
    /// Restaurant fetches held until the matching sender fires.
    gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
    next_id: Cell<u32>,
}

impl FakeApi {
    pub fn with_restaurant(restaurant: Restaurant) -> Self {
        let api = FakeApi::default();
        api.add_restaurant(restaurant);
        api
    }

    pub fn add_restaurant(&self, restaurant: Restaurant) {
        self.restaurants
            .borrow_mut()
            .insert(restaurant.id.clone(), restaurant);
    }

    /// Stores a reservation and links it to its restaurant.
    pub fn add_reservation(&self, reservation: Reservation) {
        if let Some(restaurant_id) = &reservation.restaurant_id {
            if let Some(restaurant) = self.restaurants.borrow_mut().get_mut(restaurant_id) {
                restaurant.reservation_ids.push(reservation.id.clone());
            }
        }
        self.reservations.borrow_mut().push(reservation);
    }

    pub fn add_review(&self, review: Review) {
        if let Some(restaurant_id) = &review.restaurant_id {
            if let Some(restaurant) = self.restaurants.borrow_mut().get_mut(restaurant_id) {
                restaurant.review_ids.push(review.id.clone());
            }
        }
        self.reviews.borrow_mut().push(review);
    }

    pub fn fail(&self, call: &str, error: ApiError) {
        self.failures.borrow_mut().insert(call.to_string(), error);
    }

    pub fn hold_restaurant(&self, id: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(id.to_string(), rx);
        tx
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.as_str() == call).count()
    }

    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call.clone());
        match self.failures.borrow().get(&call) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn next_id(&self, prefix: &str) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        format!("{}-{}", prefix, id)
    }
}

#[async_trait(?Send)]
impl RestaurantApi for FakeApi {
    async fn list_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.record("GET reservas".to_string())?;
        Ok(self.reservations.borrow().clone())
    }

    async fn get_restaurant(&self, id: &str) -> Result<Restaurant, ApiError> {
        self.record(format!("GET restaurantes/{}", id))?;
        let gate = self.gates.borrow_mut().remove(id);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.restaurants
            .borrow()
            .get(id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn get_reservation(&self, id: &str) -> Result<Reservation, ApiError> {
        self.record(format!("GET reservas/{}", id))?;
        self.reservations
            .borrow()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn get_review(&self, id: &str) -> Result<Review, ApiError> {
        self.record(format!("GET resenas/{}", id))?;
        self.reviews
            .borrow()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn create_reservation(
        &self,
        session: &Session,
        reservation: &NewReservation,
    ) -> Result<Reservation, ApiError> {
        session.bearer().ok_or(ApiError::Unauthorized)?;
        self.record("POST reservas".to_string())?;
        self.posted_reservations.borrow_mut().push(reservation.clone());
        let created = Reservation {
            id: self.next_id("reserva"),
            restaurant_id: Some(reservation.restaurant_id.clone()),
            user_id: Some(reservation.user_id.clone()),
            date: reservation.date.clone(),
            time: reservation.time.clone(),
        };
        self.add_reservation(created.clone());
        Ok(created)
    }

    async fn create_review(&self, session: &Session, review: &NewReview) -> Result<Review, ApiError> {
        session.bearer().ok_or(ApiError::Unauthorized)?;
        self.record("POST resenas".to_string())?;
        self.posted_reviews.borrow_mut().push(review.clone());
        let created = Review {
            id: self.next_id("resena"),
            restaurant_id: Some(review.restaurant_id.clone()),
            user_id: Some(review.user_id.clone()),
            rating: review.rating,
            comment: review.comment.clone(),
        };
        self.add_review(created.clone());
        Ok(created)
    }
}

pub fn restaurant(id: &str) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: format!("Restaurante {}", id),
        location: "Av. Mate de Luna 1200".to_string(),
        hours: "12 a 23".to_string(),
        menu: vec![MenuItem {
            id: "m1".to_string(),
            name: "Milanesa".to_string(),
            description: "Con papas fritas".to_string(),
            price: 8500.0,
        }],
        review_ids: Vec::new(),
        reservation_ids: Vec::new(),
    }
}

pub fn reservation(id: &str, restaurant_id: &str, date: &str, time: &str) -> Reservation {
    Reservation {
        id: id.to_string(),
        restaurant_id: Some(restaurant_id.to_string()),
        user_id: Some("otro-usuario".to_string()),
        date: date.to_string(),
        time: time.to_string(),
    }
}

pub fn review(id: &str, restaurant_id: &str, rating: u8, comment: &str) -> Review {
    Review {
        id: id.to_string(),
        restaurant_id: Some(restaurant_id.to_string()),
        user_id: Some("otro-usuario".to_string()),
        rating,
        comment: comment.to_string(),
    }
}

/// Session for user `u1` carrying an unsigned JWT.
pub fn logged_in() -> Session {
    let token = format!(
        "{}.{}.firma",
        URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(br#"{"_id":"u1"}"#)
    );
    Session::from_token(Some(token))
}
