use leptos::*;
use crate::models::review::Review;

#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> impl IntoView {
    if reviews.is_empty() {
        return ().into_view();
    }

    view! {
        <div class="text-center bg-light mt-5">
            <h6 class="card-subtitle mb-2 text-muted">{ "Reseñas:" }</h6>
            <ul class="list-unstyled">
                {
                    reviews.into_iter().map(|review| {
                        view! {
                            <li class="review-item">
                                <p>{ format!("Calificación: {}⭐", review.rating) }</p>
                                <p>{ review.comment }</p>
                            </li>
                        }
                    }).collect::<Vec<_>>()
                }
            </ul>
        </div>
    }
    .into_view()
}
