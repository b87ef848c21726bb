//! Sign-in page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::Header;
use crate::state::AppState;
use crate::validate::validate_login;

/// Sign-in page
#[component]
pub fn SignInPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    // Redirect if already signed in
    let navigate_for_redirect = navigate.clone();
    let state_for_redirect = state.clone();
    Effect::new(move |_| {
        if state_for_redirect.token.get().is_some() {
            navigate_for_redirect("/chat", Default::default());
        }
    });

    let navigate_for_submit = navigate.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        // Validation failures never reach the network
        if let Err(reason) = validate_login(&email_val, &password_val) {
            error.set(Some(reason));
            return;
        }

        let state = state_for_submit.clone();
        let navigate = navigate_for_submit.clone();
        spawn_local(async move {
            is_loading.set(true);
            error.set(None);

            let base_url = state.api_base.get_untracked();
            match api::login(&base_url, &email_val, &password_val).await {
                Ok(resp) => {
                    // The chat session id stays unset until the backend
                    // mints one explicitly.
                    state.login(resp.token, resp.user, None);
                    navigate("/chat", Default::default());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
            is_loading.set(false);
        });
    };

    view! {
        <Title text="Quill — Sign In" />
        <div class="min-h-screen flex flex-col bg-[var(--bg-primary)]">
            <Header />

            <main class="auth-container flex-1">
                <div class="w-full max-w-md px-4">
                    <div class="auth-card">
                        // Header
                        <div class="auth-header">
                            <div class="auth-logo">"🪶"</div>
                            <h1 class="auth-title text-gradient">"Welcome Back"</h1>
                            <p class="auth-subtitle">"Sign in to continue"</p>
                        </div>

                        // Error message
                        <Show when=move || error.get().is_some()>
                            <div class="banner-error mb-6 animate-fade-in">
                                {move || error.get().unwrap_or_default()}
                            </div>
                        </Show>

                        // Form
                        <form on:submit=on_submit class="auth-form">
                            <div class="auth-input-group">
                                <label class="auth-label">"Email"</label>
                                <input
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                    placeholder="you@example.com"
                                    required=true
                                    class="input"
                                />
                            </div>

                            <div class="auth-input-group">
                                <label class="auth-label">"Password"</label>
                                <div class="relative">
                                    <input
                                        type=move || if show_password.get() { "text" } else { "password" }
                                        prop:value=move || password.get()
                                        on:input=move |ev| password.set(event_target_value(&ev))
                                        placeholder="••••••••"
                                        required=true
                                        class="input w-full pr-10"
                                    />
                                    <button
                                        type="button"
                                        on:click=move |_| show_password.update(|v| *v = !*v)
                                        class="absolute right-3 top-1/2 -translate-y-1/2 text-[var(--text-muted)]
                                               hover:text-[var(--text-primary)] transition-colors"
                                    >
                                        {move || if show_password.get() { "🙈" } else { "👁" }}
                                    </button>
                                </div>
                            </div>

                            <button
                                type="submit"
                                disabled=move || is_loading.get()
                                class="btn btn-primary w-full py-3"
                            >
                                {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                            </button>
                        </form>

                        // Link to sign-up
                        <div class="auth-footer">
                            "Don't have an account? "
                            <a href="/signup" class="auth-link">"Sign up"</a>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}
