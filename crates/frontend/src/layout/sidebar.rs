//! Sidebar with the page menu, one entry per routed screen.

use crate::layout::global_context::{use_global_context, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <nav class="sidebar">
            <div class="sidebar-brand">
                {icon("star")}
                <span>"Sales Forecasting"</span>
            </div>

            <ul class="sidebar-menu">
                {Page::all()
                    .iter()
                    .copied()
                    .map(|page| {
                        let is_active = move || ctx.active_page.get() == page;
                        view! {
                            <li>
                                <button
                                    class=move || {
                                        if is_active() {
                                            "sidebar-item sidebar-item-active"
                                        } else {
                                            "sidebar-item"
                                        }
                                    }
                                    on:click=move |_| ctx.navigate(page)
                                >
                                    {icon(page.icon_name())}
                                    <span>{page.label()}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
