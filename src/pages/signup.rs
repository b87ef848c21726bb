//! Sign-up page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::Header;
use crate::state::AppState;
use crate::types::RegisterRequest;
use crate::validate::validate_signup;

/// Sign-up page
#[component]
pub fn SignUpPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    // Form state
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    // Already signed in: straight to chat
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

        let form = RegisterRequest {
            first_name: first_name.get().trim().to_string(),
            last_name: last_name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            phone: phone.get().trim().to_string(),
            password: password.get(),
        };

        // Validation failures never reach the network
        if let Err(reason) = validate_signup(
            &form.first_name,
            &form.last_name,
            &form.email,
            &form.phone,
            &form.password,
        ) {
            error.set(Some(reason));
            return;
        }

        let state = state_for_submit.clone();
        let navigate = navigate_for_submit.clone();
        spawn_local(async move {
            is_loading.set(true);
            error.set(None);

            let base_url = state.api_base.get_untracked();
            match api::register(&base_url, &form).await {
                Ok(_) => {
                    navigate("/signin", Default::default());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
            is_loading.set(false);
        });
    };

    view! {
        <Title text="Quill — Sign Up" />
        <div class="min-h-screen flex flex-col bg-[var(--bg-primary)]">
            <Header />

            <main class="auth-container flex-1">
                <div class="w-full max-w-md px-4">
                    <div class="auth-card">
                        <div class="auth-header">
                            <div class="auth-logo">"🪶"</div>
                            <h1 class="auth-title text-gradient">"Create Account"</h1>
                            <p class="auth-subtitle">"Sign up to get started"</p>
                        </div>

                        <Show when=move || error.get().is_some()>
                            <div class="banner-error mb-6 animate-fade-in">
                                {move || error.get().unwrap_or_default()}
                            </div>
                        </Show>

                        <form on:submit=on_submit class="auth-form">
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                                <div class="auth-input-group">
                                    <label class="auth-label">"First Name"</label>
                                    <input
                                        type="text"
                                        prop:value=move || first_name.get()
                                        on:input=move |ev| first_name.set(event_target_value(&ev))
                                        required=true
                                        class="input"
                                    />
                                </div>
                                <div class="auth-input-group">
                                    <label class="auth-label">"Last Name"</label>
                                    <input
                                        type="text"
                                        prop:value=move || last_name.get()
                                        on:input=move |ev| last_name.set(event_target_value(&ev))
                                        required=true
                                        class="input"
                                    />
                                </div>
                            </div>

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
                                <label class="auth-label">"Phone"</label>
                                <input
                                    type="tel"
                                    prop:value=move || phone.get()
                                    on:input=move |ev| phone.set(event_target_value(&ev))
                                    placeholder="+1 555 000 0000"
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
                                        minlength="8"
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
                                <p class="text-xs text-[var(--text-muted)] mt-1">"Minimum 8 characters"</p>
                            </div>

                            <button
                                type="submit"
                                disabled=move || is_loading.get()
                                class="btn btn-primary w-full py-3"
                            >
                                {move || if is_loading.get() { "Creating account..." } else { "Create Account" }}
                            </button>
                        </form>

                        <div class="auth-footer">
                            "Already have an account? "
                            <a href="/signin" class="auth-link">"Sign in"</a>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}
