use leptos::*;
use leptos::ev::SubmitEvent;
use crate::controller::FormStatus;

#[component]
pub fn ReviewForm(
    #[prop(into)] on_submit: Callback<(u8, String)>,
    #[prop(into)] status: Signal<FormStatus>,
) -> impl IntoView {
    let (rating, set_rating) = create_signal(5u8); // Default rating to 5
    let (comment, set_comment) = create_signal(String::new());

    let submit_review = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call((rating.get_untracked(), comment.get_untracked()));
    };

    view! {
        <form class="mt-3" on:submit=submit_review>
            <div class="mb-3">
                <label class="form-label">{ "Calificación:" }</label>
                <select
                    class="form-control"
                    id="rating"
                    required
                    on:change=move |e| set_rating.set(event_target_value(&e).parse::<u8>().unwrap_or(5))
                >
                    {[5u8, 4, 3, 2, 1].into_iter().map(|option| view! {
                        <option value=option.to_string() selected=move || rating.get() == option>
                            { format!("{}⭐", option) }
                        </option>
                    }).collect::<Vec<_>>()}
                </select>
            </div>
            <div class="mb-3">
                <label class="form-label">{ "Comentario:" }</label>
                <textarea
                    class="form-control"
                    id="comment"
                    required
                    prop:value=move || comment.get()
                    on:input=move |e| set_comment.set(event_target_value(&e))
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
                { "Agregar Reseña" }
            </button>
        </form>
    }
}
