//! Admin dashboard page

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::admin::{ConfigTable, UserTable};
use crate::components::{Header, RequireAdmin};

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Users,
    Configs,
}

/// Admin dashboard: user management and API-key configuration, admin role
/// required.
#[component]
pub fn AdminPage() -> impl IntoView {
    let tab = RwSignal::new(AdminTab::Users);

    view! {
        <RequireAdmin>
            <Title text="Quill — Admin" />
            <div class="min-h-screen flex flex-col bg-[var(--bg-primary)]">
                <Header />

                <main class="flex-1 max-w-7xl w-full mx-auto px-6 py-8">
                    <div class="mb-8">
                        <h1 class="text-3xl font-bold mb-1">"Admin Dashboard"</h1>
                        <p class="text-[var(--text-muted)] text-sm">
                            "Manage users and API-key configuration"
                        </p>
                    </div>

                    // Tab switcher
                    <div class="flex gap-2 mb-8">
                        <TabButton
                            label="Users"
                            is_active=Signal::derive(move || tab.get() == AdminTab::Users)
                            on_click=move |_| tab.set(AdminTab::Users)
                        />
                        <TabButton
                            label="API Keys"
                            is_active=Signal::derive(move || tab.get() == AdminTab::Configs)
                            on_click=move |_| tab.set(AdminTab::Configs)
                        />
                    </div>

                    {move || match tab.get() {
                        AdminTab::Users => view! { <UserTable /> }.into_any(),
                        AdminTab::Configs => view! { <ConfigTable /> }.into_any(),
                    }}
                </main>
            </div>
        </RequireAdmin>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    is_active: Signal<bool>,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=on_click
            class=move || format!(
                "px-4 py-2 rounded-lg text-sm font-medium transition-colors {}",
                if is_active.get() {
                    "bg-violet-600 text-white"
                } else {
                    "bg-white/5 text-[var(--text-muted)] hover:bg-white/10"
                }
            )
        >
            {label}
        </button>
    }
}
