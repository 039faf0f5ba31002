use leptos::*;
use crate::models::reservation::Reservation;

#[component]
pub fn ReservationsList(reservations: Vec<Reservation>) -> impl IntoView {
    view! {
        <ul class="list-group">
            {
                reservations.into_iter().map(|reservation| {
                    let date = reservation.display_date();
                    view! {
                        <li class="list-group-item">
                            <p>{ format!("Fecha: {}", date) }</p>
                            <p>{ format!("Hora: {}", reservation.time) }</p>
                        </li>
                    }
                }).collect::<Vec<_>>()
            }
        </ul>
    }
}
