use leptos::*;
use crate::controller::LOGIN_REQUIRED;

/// Shown when a form is submitted without a session. Stays open until the
/// user closes it or heads to the login page.
#[component]
pub fn LoginModal(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_login: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal" tabindex="-1" role="dialog" style="display: block">
            <div class="modal-dialog" role="document">
                <div class="modal-content">
                    <div class="modal-body">
                        <p>{ LOGIN_REQUIRED }</p>
                    </div>
                    <div class="modal-footer">
                        <button type="button" class="btn" on:click=move |_| on_close.call(())>
                            { "Cerrar" }
                        </button>
                        <button type="button" class="btn" on:click=move |_| on_login.call(())>
                            { "Ir al inicio de sesión" }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
