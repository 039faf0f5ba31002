/// Main application entry point.
/// Provides the backend configuration and routes restaurant pages to the details view.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::restaurant_details::RestaurantDetails;
use crate::config::ApiConfig;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    // Backend location shared by every page.
    provide_context(ApiConfig::default());

    view! {
        <Title text="Detalle del restaurante" />
        <Router>
            <main>
                <Routes>
                    <Route path="/restaurantes/:id" view=RestaurantDetails />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="container mt-4">
            <p>{ "Página no encontrada" }</p>
        </div>
    }
}
