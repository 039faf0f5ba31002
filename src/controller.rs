//! State and workflow behind the restaurant details page.
//!
//! The controller is framework independent: it owns the page state, talks to a
//! [`RestaurantApi`] and reports every change through an observer callback. The
//! Leptos page mirrors that callback into a signal; tests simply inspect
//! [`DetailsController::state`].
//!
//! Every [`DetailsController::refresh`] is tagged with an epoch. Responses that
//! come back after a newer refresh started are dropped, so the most recently
//! requested restaurant always wins.
use std::cell::{Cell, RefCell};

use futures::future::try_join_all;
use leptos::logging::{error, log, warn};

use crate::api::RestaurantApi;
use crate::auth::Session;
use crate::conflict::Slot;
use crate::error::ApiError;
use crate::models::reservation::{NewReservation, Reservation};
use crate::models::restaurant::Restaurant;
use crate::models::review::{NewReview, Review};

pub const LOAD_RESTAURANT_ERROR: &str = "Error al obtener la información del restaurante";
pub const LOAD_RESERVATIONS_ERROR: &str = "Error al obtener las reservas";
pub const LOAD_REVIEWS_ERROR: &str = "Error al obtener las reseñas";
pub const SLOT_TAKEN: &str = "La fecha y hora seleccionadas ya están ocupadas";
pub const RESERVATION_FAILED: &str = "Error al agregar la reserva";
pub const REVIEW_FAILED: &str = "Error al agregar la revisión";
pub const LOGIN_REQUIRED: &str = "Debes iniciar sesión para hacer esta accion";

/// Load state of one independently refreshed part of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Section::Idle
    }
}

impl<T> Section<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Section::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Section::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Section::Loading)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    /// Still editing, with an inline message under the form.
    Rejected(String),
}

impl FormStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            FormStatus::Rejected(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub restaurant: Section<Restaurant>,
    pub reservations: Section<Vec<Reservation>>,
    pub reviews: Section<Vec<Review>>,
    pub reservation_form: FormStatus,
    pub review_form: FormStatus,
    pub login_prompt: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Loaded,
    /// At least one section ended in an error.
    Failed,
    /// A newer refresh started while this one was in flight.
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    LoginRequired,
    Rejected(String),
    Conflict,
    Failed(String),
    Created,
}

pub struct DetailsController<A> {
    api: A,
    state: RefCell<ViewState>,
    epoch: Cell<u64>,
    on_change: Box<dyn Fn(&ViewState)>,
}

impl<A: RestaurantApi> DetailsController<A> {
    pub fn new(api: A) -> Self {
        Self::with_observer(api, |_| {})
    }

    pub fn with_observer(api: A, on_change: impl Fn(&ViewState) + 'static) -> Self {
        Self {
            api,
            state: RefCell::new(ViewState::default()),
            epoch: Cell::new(0),
            on_change: Box::new(on_change),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    fn update(&self, f: impl FnOnce(&mut ViewState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            f(&mut state);
            state.clone()
        };
        (self.on_change)(&snapshot);
    }

    fn is_current(&self, epoch: u64) -> bool {
        self.epoch.get() == epoch
    }

    /// Reloads the restaurant, then every review and reservation it references.
    pub async fn refresh(&self, restaurant_id: &str) -> RefreshOutcome {
        let epoch = self.epoch.get() + 1;
        self.epoch.set(epoch);
        log!("[VIEW] Loading restaurant {} (epoch {})", restaurant_id, epoch);

        self.update(|state| {
            state.restaurant = Section::Loading;
            state.reservations = Section::Loading;
            state.reviews = Section::Loading;
        });

        let restaurant = self.api.get_restaurant(restaurant_id).await;
        if !self.is_current(epoch) {
            log!("[VIEW] Dropping stale restaurant response (epoch {})", epoch);
            return RefreshOutcome::Superseded;
        }

        let restaurant = match restaurant {
            Ok(restaurant) => restaurant,
            Err(e) => {
                error!("[VIEW] Failed to load restaurant {}: {}", restaurant_id, e);
                self.update(|state| {
                    state.restaurant = Section::Error(e.user_message(LOAD_RESTAURANT_ERROR));
                    state.reservations = Section::Idle;
                    state.reviews = Section::Idle;
                });
                return RefreshOutcome::Failed;
            }
        };

        let review_ids = restaurant.review_ids.clone();
        let reservation_ids = restaurant.reservation_ids.clone();
        self.update(|state| state.restaurant = Section::Loaded(restaurant));

        let reviews = try_join_all(review_ids.iter().map(|id| self.api.get_review(id)));
        let reservations =
            try_join_all(reservation_ids.iter().map(|id| self.api.get_reservation(id)));
        let (reviews, reservations) = futures::join!(reviews, reservations);

        if !self.is_current(epoch) {
            log!("[VIEW] Dropping stale reviews/reservations (epoch {})", epoch);
            return RefreshOutcome::Superseded;
        }

        let mut failed = false;
        let reviews = match reviews {
            Ok(reviews) => Section::Loaded(reviews),
            Err(e) => {
                error!("[VIEW] Failed to load reviews: {}", e);
                failed = true;
                Section::Error(e.user_message(LOAD_REVIEWS_ERROR))
            }
        };
        let reservations = match reservations {
            Ok(reservations) => Section::Loaded(reservations),
            Err(e) => {
                error!("[VIEW] Failed to load reservations: {}", e);
                failed = true;
                Section::Error(e.user_message(LOAD_RESERVATIONS_ERROR))
            }
        };
        self.update(|state| {
            state.reviews = reviews;
            state.reservations = reservations;
        });

        if failed {
            RefreshOutcome::Failed
        } else {
            RefreshOutcome::Loaded
        }
    }

    fn require_login(&self) -> SubmitOutcome {
        log!("[VIEW] Submission requires login");
        self.update(|state| state.login_prompt = true);
        SubmitOutcome::LoginRequired
    }

    pub fn dismiss_login_prompt(&self) {
        self.update(|state| state.login_prompt = false);
    }

    pub fn go_to_login(&self) {
        self.dismiss_login_prompt();
        crate::auth::redirect_to_login();
    }

    fn set_reservation_form(&self, status: FormStatus) {
        self.update(|state| state.reservation_form = status);
    }

    fn set_review_form(&self, status: FormStatus) {
        self.update(|state| state.review_form = status);
    }

    /// Books `date`/`time` unless the slot is already taken at this restaurant.
    pub async fn submit_reservation(
        &self,
        restaurant_id: &str,
        session: &Session,
        date: &str,
        time: &str,
    ) -> SubmitOutcome {
        if !session.is_authenticated() {
            return self.require_login();
        }
        let Some(user_id) = session.user_id() else {
            warn!("[VIEW] Session token carries no user id");
            return self.require_login();
        };

        let slot = match Slot::parse(date, time) {
            Ok(slot) => slot,
            Err(e) => {
                let msg = e.user_message(RESERVATION_FAILED);
                self.set_reservation_form(FormStatus::Rejected(msg.clone()));
                return SubmitOutcome::Rejected(msg);
            }
        };

        self.set_reservation_form(FormStatus::Submitting);

        let existing = match self.api.list_reservations().await {
            Ok(existing) => existing,
            Err(e) => {
                error!("[VIEW] Could not list reservations before booking: {}", e);
                let msg = e.user_message(RESERVATION_FAILED);
                self.set_reservation_form(FormStatus::Rejected(msg.clone()));
                return SubmitOutcome::Failed(msg);
            }
        };
        let existing: Vec<Reservation> = existing
            .into_iter()
            .filter(|reservation| reservation.belongs_to(restaurant_id))
            .collect();

        if slot.is_taken(&existing) {
            warn!(
                "[VIEW] Slot {} {} already booked at {}",
                slot.date,
                slot.hhmm(),
                restaurant_id
            );
            self.set_reservation_form(FormStatus::Rejected(SLOT_TAKEN.to_string()));
            return SubmitOutcome::Conflict;
        }

        let reservation =
            NewReservation::for_slot(restaurant_id.to_string(), user_id.to_string(), &slot);
        match self.api.create_reservation(session, &reservation).await {
            Ok(created) => {
                log!("[VIEW] Reservation {} created", created.id);
                self.set_reservation_form(FormStatus::Editing);
                self.refresh(restaurant_id).await;
                SubmitOutcome::Created
            }
            // The backend answered 2xx; only its echo of the record was unreadable.
            Err(ApiError::Decode(e)) => {
                warn!("[VIEW] Reservation accepted, response not readable: {}", e);
                self.set_reservation_form(FormStatus::Editing);
                self.refresh(restaurant_id).await;
                SubmitOutcome::Created
            }
            Err(ApiError::Conflict) => {
                warn!("[VIEW] Backend rejected slot {} {}", slot.date, slot.hhmm());
                self.set_reservation_form(FormStatus::Rejected(SLOT_TAKEN.to_string()));
                SubmitOutcome::Conflict
            }
            Err(ApiError::Unauthorized) => {
                self.set_reservation_form(FormStatus::Editing);
                self.require_login()
            }
            Err(e) => {
                error!("[VIEW] Failed to create reservation: {}", e);
                let msg = e.user_message(RESERVATION_FAILED);
                self.set_reservation_form(FormStatus::Rejected(msg.clone()));
                SubmitOutcome::Failed(msg)
            }
        }
    }

    pub async fn submit_review(
        &self,
        restaurant_id: &str,
        session: &Session,
        rating: u8,
        comment: &str,
    ) -> SubmitOutcome {
        if !session.is_authenticated() {
            return self.require_login();
        }
        let Some(user_id) = session.user_id() else {
            warn!("[VIEW] Session token carries no user id");
            return self.require_login();
        };

        let review = match NewReview::new(
            user_id.to_string(),
            restaurant_id.to_string(),
            rating,
            comment.to_string(),
        ) {
            Ok(review) => review,
            Err(e) => {
                let msg = e.user_message(REVIEW_FAILED);
                self.set_review_form(FormStatus::Rejected(msg.clone()));
                return SubmitOutcome::Rejected(msg);
            }
        };

        self.set_review_form(FormStatus::Submitting);
        match self.api.create_review(session, &review).await {
            Ok(created) => {
                log!("[VIEW] Review {} created", created.id);
                self.set_review_form(FormStatus::Editing);
                self.refresh(restaurant_id).await;
                SubmitOutcome::Created
            }
            Err(ApiError::Decode(e)) => {
                warn!("[VIEW] Review accepted, response not readable: {}", e);
                self.set_review_form(FormStatus::Editing);
                self.refresh(restaurant_id).await;
                SubmitOutcome::Created
            }
            Err(ApiError::Unauthorized) => {
                self.set_review_form(FormStatus::Editing);
                self.require_login()
            }
            Err(e) => {
                error!("[VIEW] Failed to create review: {}", e);
                let msg = e.user_message(REVIEW_FAILED);
                self.set_review_form(FormStatus::Rejected(msg.clone()));
                SubmitOutcome::Failed(msg)
            }
        }
    }
}
