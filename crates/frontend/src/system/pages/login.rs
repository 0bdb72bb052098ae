use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

/// Simulated backend latency before the mock login resolves.
const LOGIN_DELAY_MS: u32 = 800;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember_me, set_remember_me) = signal(false);
    let (show_password, set_show_password) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    // Prefill from the durable scope after a previous "remember me" login.
    if let Some(remembered) = session.remembered_email() {
        set_email.set(remembered);
        set_remember_me.set(true);
    }

    // Cleared on unmount so a pending login timer stops touching signals.
    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();
        let remember_val = remember_me.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            TimeoutFuture::new(LOGIN_DELAY_MS).await;
            // The page may already be disposed; a disposed flag reads as
            // `None`, never as alive.
            if !alive.try_get_value().unwrap_or(false) {
                return;
            }

            match session.login(&email_val, &password_val, remember_val) {
                Ok(()) => {
                    // SessionContext flips the Show in AppRoutes.
                    _ = set_is_loading.try_set(false);
                }
                Err(e) => {
                    _ = set_error_message.try_set(Some(e.to_string()));
                    _ = set_is_loading.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-title">
                    {icon("star")}
                    <h1>"Sales Forecasting"</h1>
                </div>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email (ID)"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="example@company.com"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                set_email.set(event_target_value(&ev));
                                set_error_message.set(None);
                            }
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <div class="password-field">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                id="password"
                                placeholder="••••••••"
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    set_password.set(event_target_value(&ev));
                                    set_error_message.set(None);
                                }
                                disabled=move || is_loading.get()
                            />
                            <button
                                type="button"
                                class="password-toggle"
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                                disabled=move || is_loading.get()
                            >
                                {move || icon(if show_password.get() { "eye-off" } else { "eye" })}
                            </button>
                        </div>
                    </div>

                    <div class="form-group form-group-inline">
                        <input
                            type="checkbox"
                            id="remember"
                            prop:checked=move || remember_me.get()
                            on:change=move |ev| set_remember_me.set(event_target_checked(&ev))
                            disabled=move || is_loading.get()
                        />
                        <label for="remember">"Keep me logged in"</label>
                    </div>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {icon("alert-circle")}
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"Demo account:"</p>
                    <p>"Email: any valid address (e.g. demo@company.com)"</p>
                    <p>"Password: 6+ characters (e.g. demo123)"</p>
                </div>
            </div>
        </div>
    }
}
