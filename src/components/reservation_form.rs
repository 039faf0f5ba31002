use leptos::*;
use leptos::ev::SubmitEvent;
use crate::controller::FormStatus;

#[component]
pub fn ReservationForm(
    #[prop(into)] on_submit: Callback<(String, String)>,
    #[prop(into)] status: Signal<FormStatus>,
) -> impl IntoView {
    let (date, set_date) = create_signal(String::new());
    let (time, set_time) = create_signal(String::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call((date.get_untracked(), time.get_untracked()));
    };

    view! {
        <form class="mt-3" on:submit=handle_submit>
            <div class="mb-3">
                <label class="form-label">{ "Fecha de Reserva:" }</label>
                <input
                    type="date"
                    class="form-control"
                    id="fechaReserva"
                    required
                    prop:value=move || date.get()
                    on:input=move |e| set_date.set(event_target_value(&e))
                />
            </div>
            <div class="mb-3">
                <label class="form-label">{ "Hora de Reserva:" }</label>
                <input
                    type="time"
                    class="form-control"
                    id="horaReserva"
                    required
                    prop:value=move || time.get()
                    on:input=move |e| set_time.set(event_target_value(&e))
                />
            </div>
            {move || status.with(|s| s.message().map(str::to_string)).map(|msg| view! {
                <div class="alert alert-danger">{ msg }</div>
            })}
            <button
                type="submit"
                class="btn"
                disabled=move || status.with(|s| *s == FormStatus::Submitting)
            >
                { "Agregar Reserva" }
            </button>
        </form>
    }
}
