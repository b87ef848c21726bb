//! User details modal with chat-limit editing

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::state::AppState;
use crate::types::{AdminUser, ChatLimitsUpdate};

const WINDOWS: [(&str, &str); 5] = [
    ("", "No window (lifetime)"),
    ("daily", "Daily"),
    ("weekly", "Weekly"),
    ("monthly", "Monthly"),
    ("custom", "Custom"),
];

/// Modal showing a user's details and editing their chat allowance. The
/// update is a partial PUT; on success the caller merges the new values
/// into its local row.
#[component]
pub fn UserModal(
    user: AdminUser,
    #[prop(into)] on_close: Callback<()>,
    /// Called with `(user id, chat_limit, usage_time_window)` after a
    /// successful save
    #[prop(into)]
    on_saved: Callback<(String, Option<u32>, Option<String>)>,
) -> impl IntoView {
    let state = expect_context::<AppState>();

    let limit_input = RwSignal::new(
        user.chat_limit
            .map(|l| l.to_string())
            .unwrap_or_default(),
    );
    let window_input = RwSignal::new(user.usage_time_window.clone().unwrap_or_default());
    let saving = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let user_id = user.id.clone();
    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let raw_limit = limit_input.get_untracked();
        let chat_limit = match raw_limit.trim() {
            "" => None,
            raw => match raw.parse::<u32>() {
                Ok(n) => Some(n),
                Err(_) => {
                    error.set(Some("Chat limit must be a whole number".to_string()));
                    return;
                }
            },
        };
        let window = window_input.get_untracked();
        let usage_time_window = if window.is_empty() { None } else { Some(window) };

        saving.set(true);
        error.set(None);

        let state = state.clone();
        let id = user_id.clone();
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked().unwrap_or_default();
            let update = ChatLimitsUpdate {
                chat_limit,
                usage_time_window: usage_time_window.clone(),
            };
            match api::admin_update_chat_limits(&base, &token, &id, &update).await {
                Ok(_) => on_saved.run((id, chat_limit, usage_time_window)),
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-bold">{user.full_name()}</h2>
                    <button on:click=move |_| on_close.run(()) class="p-1 hover:bg-white/10 rounded">
                        <svg xmlns="http://www.w3.org/2000/svg" class="w-5 h-5" viewBox="0 0 20 20" fill="currentColor">
                            <path fill-rule="evenodd" d="M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z" clip-rule="evenodd" />
                        </svg>
                    </button>
                </div>

                // Profile summary
                <div class="space-y-1 mb-6 text-sm">
                    <p><span class="text-[var(--text-muted)]">"Email: "</span>{user.email.clone()}</p>
                    <p><span class="text-[var(--text-muted)]">"Phone: "</span>{user.phone.clone()}</p>
                    <p><span class="text-[var(--text-muted)]">"Role: "</span>{user.role.clone()}</p>
                    <p>
                        <span class="text-[var(--text-muted)]">"Chat sessions: "</span>
                        {user.total_chat_sessions}
                    </p>
                </div>

                <Show when=move || error.get().is_some()>
                    <div class="banner-error mb-4">{move || error.get().unwrap_or_default()}</div>
                </Show>

                // Limits form
                <div class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium mb-1">"Chat limit"</label>
                        <input
                            type="text"
                            prop:value=move || limit_input.get()
                            on:input=move |ev| limit_input.set(event_target_value(&ev))
                            placeholder="Leave empty for unlimited"
                            class="input w-full"
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium mb-1">"Usage window"</label>
                        <select
                            prop:value=move || window_input.get()
                            on:change=move |ev| window_input.set(event_target_value(&ev))
                            class="input w-full"
                        >
                            {WINDOWS.iter().map(|(value, label)| view! {
                                <option value=*value>{*label}</option>
                            }).collect::<Vec<_>>()}
                        </select>
                    </div>
                </div>

                <div class="flex justify-end gap-2 mt-6">
                    <button on:click=move |_| on_close.run(()) class="btn btn-ghost">
                        "Cancel"
                    </button>
                    <button
                        on:click=on_save
                        disabled=move || saving.get()
                        class="btn btn-primary"
                    >
                        {move || if saving.get() { "Saving..." } else { "Save Limits" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
