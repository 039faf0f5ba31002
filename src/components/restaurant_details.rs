/// Page for `/restaurantes/:id`: restaurant header, menu, reservations,
/// reviews and the two submission forms.
use std::rc::Rc;

use leptos::logging::log;
use leptos::*;
use leptos_router::use_params_map;

use crate::api::HttpRestaurantApi;
use crate::auth::{BrowserStorage, Session, TOKEN_KEY};
use crate::components::{
    login_modal::LoginModal, menu_list::MenuList, reservation_form::ReservationForm,
    reservations_list::ReservationsList, review_form::ReviewForm, reviews_list::ReviewsList,
};
use crate::config::ApiConfig;
use crate::controller::{DetailsController, Section, ViewState};

#[component]
pub fn RestaurantDetails() -> impl IntoView {
    let params = use_params_map();
    let restaurant_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    let config = use_context::<ApiConfig>().unwrap_or_default();
    let session = create_rw_signal(Session::from_store(&BrowserStorage));
    let state = create_rw_signal(ViewState::default());

    let controller = Rc::new(DetailsController::with_observer(
        HttpRestaurantApi::new(config),
        move |snapshot: &ViewState| {
            if state.try_set(snapshot.clone()).is_some() {
                log!("[VIEW] Page is gone, dropping state update");
            }
        },
    ));

    // A login or logout in another tab changes the session.
    let storage_listener = window_event_listener(ev::storage, move |e| {
        if e.key().map_or(true, |key| key == TOKEN_KEY) {
            log!("[AUTH] Token changed in another tab");
            session.set(Session::from_store(&BrowserStorage));
        }
    });
    on_cleanup(move || storage_listener.remove());

    create_effect({
        let controller = controller.clone();
        move |_| {
            let id = restaurant_id();
            session.with(|_| ());
            if id.is_empty() {
                return;
            }
            let controller = controller.clone();
            spawn_local(async move {
                controller.refresh(&id).await;
            });
        }
    });

    let on_reservation = Callback::new({
        let controller = controller.clone();
        move |(date, time): (String, String)| {
            let controller = controller.clone();
            let id = params.with_untracked(|p| p.get("id").cloned().unwrap_or_default());
            let session = session.get_untracked();
            spawn_local(async move {
                controller.submit_reservation(&id, &session, &date, &time).await;
            });
        }
    });

    let on_review = Callback::new({
        let controller = controller.clone();
        move |(rating, comment): (u8, String)| {
            let controller = controller.clone();
            let id = params.with_untracked(|p| p.get("id").cloned().unwrap_or_default());
            let session = session.get_untracked();
            spawn_local(async move {
                controller.submit_review(&id, &session, rating, &comment).await;
            });
        }
    });

    let on_close_login = Callback::new({
        let controller = controller.clone();
        move |_: ()| controller.dismiss_login_prompt()
    });
    let on_login = Callback::new({
        let controller = controller.clone();
        move |_: ()| controller.go_to_login()
    });

    // Memos keep form inputs alive while only form status changes.
    let restaurant = create_memo(move |_| state.with(|s| s.restaurant.clone()));
    let reservations = create_memo(move |_| state.with(|s| s.reservations.clone()));
    let reviews = create_memo(move |_| state.with(|s| s.reviews.clone()));
    let login_prompt = create_memo(move |_| state.with(|s| s.login_prompt));
    let reservation_status = Signal::derive(move || state.with(|s| s.reservation_form.clone()));
    let review_status = Signal::derive(move || state.with(|s| s.review_form.clone()));

    view! {
        <div class="container mt-4">
            {move || match restaurant.get() {
                Section::Idle => ().into_view(),
                Section::Loading => view! { <p>{ "Cargando..." }</p> }.into_view(),
                Section::Error(msg) => view! {
                    <div class="alert alert-danger">{ msg }</div>
                }.into_view(),
                Section::Loaded(restaurant) => view! {
                    <div>
                        <h1 class="nombreRestaurant">{ restaurant.name }</h1>
                        <p class="my-3 fs-4 me-5 d-inline-block">{ restaurant.location }</p>
                        <p class="my-3 fs-4 ms-5 d-inline-block">{ format!("{}hs.", restaurant.hours) }</p>
                    </div>
                    <MenuList items=restaurant.menu />
                    <div class="row mt-4">
                        <div class="col">
                            <h6 class="card-subtitle mb-2 text-muted">{ "Reservas:" }</h6>
                            {move || match reservations.get() {
                                Section::Loaded(list) => view! { <ReservationsList reservations=list /> }.into_view(),
                                Section::Error(msg) => view! { <div class="alert alert-danger">{ msg }</div> }.into_view(),
                                Section::Loading => view! { <p>{ "Cargando reservas..." }</p> }.into_view(),
                                Section::Idle => ().into_view(),
                            }}
                        </div>
                        <div class="col">
                            <ReservationForm on_submit=on_reservation status=reservation_status />
                        </div>
                        {move || match reviews.get() {
                            Section::Loaded(list) => view! { <ReviewsList reviews=list /> }.into_view(),
                            Section::Error(msg) => view! { <div class="alert alert-danger">{ msg }</div> }.into_view(),
                            _ => ().into_view(),
                        }}
                        <div class="col">
                            <ReviewForm on_submit=on_review status=review_status />
                        </div>
                    </div>
                }.into_view(),
            }}
        </div>
        <Show when=move || login_prompt.get()>
            <LoginModal on_close=on_close_login on_login=on_login />
        </Show>
    }
}
