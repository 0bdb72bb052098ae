use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

/// Initials shown in the avatar circle, derived from the email local part.
fn user_initials(email: &str) -> String {
    let name = email.split('@').next().unwrap_or_default();
    if name.is_empty() {
        return "U".to_string();
    }
    name.chars().take(2).collect::<String>().to_uppercase()
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();

    let email = move || {
        session
            .state
            .get()
            .user
            .map(|u| u.email)
            .unwrap_or_default()
    };
    let display_name = move || {
        let email = email();
        email.split('@').next().unwrap_or("user").to_string()
    };

    view! {
        <header class="top-header">
            <button
                class="header-toggle"
                title="Toggle sidebar"
                on:click=move |_| ctx.left_open.update(|open| *open = !*open)
            >
                {icon("menu")}
            </button>

            <div class="header-user">
                <span class="header-greeting">"Hello, " {display_name}</span>
                <span class="header-avatar" title=email>
                    {move || user_initials(&email())}
                </span>
                <button
                    class="header-logout"
                    title="Log out"
                    on:click=move |_| session.logout()
                >
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_email_local_part() {
        assert_eq!(user_initials("demo@company.com"), "DE");
        assert_eq!(user_initials("x@y.com"), "X");
        assert_eq!(user_initials(""), "U");
    }
}
