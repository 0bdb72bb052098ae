pub mod global_context;
pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |           Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    // The sidebar pane is captured by the `Show` children, which must be
    // shareable across threads, so `Send` alone is not enough.
    L: Fn() -> AnyView + 'static + Send + Sync,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = global_context::use_global_context();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <Show when=move || ctx.left_open.get()>
                    <aside class="app-sidebar">{left()}</aside>
                </Show>

                <main class="app-main">
                    {center()}
                </main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_pane_closures_satisfy_the_shell_bounds() {
        fn sidebar_pane<F>(_: F)
        where
            F: Fn() -> AnyView + 'static + Send + Sync,
        {
        }
        sidebar_pane(|| view! { <span>"left"</span> }.into_any());
    }
}
