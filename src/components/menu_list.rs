use leptos::*;
use crate::models::restaurant::MenuItem;

/// One row per dish; an empty menu renders an empty list.
#[component]
pub fn MenuList(items: Vec<MenuItem>) -> impl IntoView {
    view! {
        <p class="card-subtitle mb-2 text-muted fs-3">{ "Menú:" }</p>
        <ul class="list-group">
            {
                items.into_iter().map(|item| {
                    let price = item.display_price();
                    view! {
                        <li class="list-group-item">
                            <strong>{ item.name }</strong>
                            <p>{ item.description }</p>
                            <p>{ price }</p>
                        </li>
                    }
                }).collect::<Vec<_>>()
            }
        </ul>
    }
}
