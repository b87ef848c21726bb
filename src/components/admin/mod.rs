//! Admin dashboard components

pub mod config_modal;
pub mod config_table;
pub mod user_modal;
pub mod user_table;

pub use config_modal::ConfigModal;
pub use config_table::ConfigTable;
pub use user_modal::UserModal;
pub use user_table::UserTable;

use leptos::prelude::*;

/// Native confirmation prompt used before destructive actions.
pub(crate) fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

/// Count/summary card shown above each table
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<usize>,
    #[prop(default = "from-violet-600/20 to-violet-800/20 border-violet-500/30")]
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "bg-gradient-to-br {} backdrop-blur-sm rounded-2xl p-6 border shadow-xl",
            accent
        )>
            <p class="text-[var(--text-muted)] text-sm font-medium mb-1">{label}</p>
            <h3 class="text-3xl font-bold">{move || value.get()}</h3>
        </div>
    }
}
