use crate::domain::dashboard::DashboardPage;
use crate::domain::issues::IssuesPage;
use crate::domain::master::MasterPage;
use crate::domain::sku_forecast::SkuForecastPage;
use crate::domain::tca_forecast::TcaForecastPage;
use crate::domain::upload::UploadPage;
use crate::layout::global_context::{use_global_context, Page};
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
// Page switching is state-driven; no Router components involved.

#[component]
fn ActivePage() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        {move || match ctx.active_page.get() {
            Page::Dashboard => view! { <DashboardPage /> }.into_any(),
            Page::TcaForecast => view! { <TcaForecastPage /> }.into_any(),
            Page::SkuForecast => view! { <SkuForecastPage /> }.into_any(),
            Page::Upload => view! { <UploadPage /> }.into_any(),
            Page::Master => view! { <MasterPage /> }.into_any(),
            Page::Issues => view! { <IssuesPage /> }.into_any(),
        }}
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ActivePage /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();
    let is_authenticated = session.is_authenticated();

    view! {
        <Show
            when=move || is_authenticated.get()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
