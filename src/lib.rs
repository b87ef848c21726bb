//! Quill UI - Leptos frontend for the Quill document assistant
//!
//! A client-side-rendered chat interface: upload documents, converse over
//! them, browse history, and (for admins) manage users and API keys.

pub mod api;
pub mod components;
pub mod markdown;
pub mod mutation;
pub mod pages;
pub mod session;
pub mod state;
pub mod types;
pub mod validate;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use pages::{
    admin::AdminPage, chat::ChatPage, home::HomePage, signin::SignInPage, signup::SignUpPage,
};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Global state, rehydrated from session storage
    let app_state = AppState::new();
    provide_context(app_state);

    view! {
        <Router>
            <main class="min-h-screen bg-slate-900 text-slate-100">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/signin") view=SignInPage />
                    <Route path=path!("/signup") view=SignUpPage />
                    <Route path=path!("/chat") view=ChatPage />
                    <Route path=path!("/admin") view=AdminPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-500 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-violet-600 hover:bg-violet-700 rounded-lg font-medium transition-colors"
                >
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
