use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Session state is restored from the browser storage scopes once, here.
    provide_context(SessionContext::new());

    view! {
        <AppRoutes />
    }
}
