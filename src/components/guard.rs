//! Route guards for protected pages.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::AppState;

/// Renders nothing until the session resolves; redirects to sign-in when no
/// token is present. The check re-runs whenever the token changes.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let guard = state.clone();
    Effect::new(move |_| {
        if guard.token.get().is_none() {
            navigate("/signin", Default::default());
        }
    });

    view! {
        <Show when=move || state.token.get().is_some()>
            {children()}
        </Show>
    }
}

/// Like [`RequireAuth`], but additionally sends non-admins back to the chat
/// page. Re-runs whenever token or user identity changes.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let guard = state.clone();
    Effect::new(move |_| {
        if guard.token.get().is_none() {
            navigate("/signin", Default::default());
        } else if !guard.is_admin() {
            navigate("/chat", Default::default());
        }
    });

    let allowed = state.clone();
    view! {
        <Show when=move || allowed.token.get().is_some() && allowed.is_admin()>
            {children()}
        </Show>
    }
}
