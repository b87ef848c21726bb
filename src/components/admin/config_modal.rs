//! API-config create/edit modal

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::state::AppState;
use crate::types::{ApiConfig, ConfigPayload};
use crate::validate::validate_config;

/// Shared create/edit modal for API-key configurations. Key values are
/// write-only: editing with a blank value keeps whatever the server has.
#[component]
pub fn ConfigModal(
    /// `Some` to edit an existing config, `None` to create one
    config: Option<ApiConfig>,
    #[prop(into)] on_close: Callback<()>,
    /// Called after a successful save; the table re-fetches
    #[prop(into)]
    on_saved: Callback<()>,
) -> impl IntoView {
    let state = expect_context::<AppState>();

    let is_new = config.is_none();
    let config_id = config.as_ref().map(|c| c.id.clone());

    let key_name = RwSignal::new(
        config
            .as_ref()
            .map(|c| c.key_name.clone())
            .unwrap_or_default(),
    );
    let key_value = RwSignal::new(String::new());
    let description = RwSignal::new(
        config
            .as_ref()
            .and_then(|c| c.description.clone())
            .unwrap_or_default(),
    );
    let is_active = RwSignal::new(config.as_ref().map(|c| c.is_active).unwrap_or(true));
    let show_value = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let name = key_name.get_untracked();
        let value = key_value.get_untracked();

        // Validation blocks submission; it never reaches the network
        if let Err(reason) = validate_config(&name, &value, is_new) {
            error.set(Some(reason));
            return;
        }

        saving.set(true);
        error.set(None);

        let payload = ConfigPayload {
            key_name: name.trim().to_uppercase(),
            key_value: {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            },
            description: description.get_untracked().trim().to_string(),
            is_active: is_active.get_untracked(),
        };

        let state = state.clone();
        let id = config_id.clone();
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            let token = state.token.get_untracked().unwrap_or_default();
            let result = match id {
                Some(id) => api::admin_update_config(&base, &token, &id, &payload).await,
                None => api::admin_create_config(&base, &token, &payload).await,
            };
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-bold">
                        {if is_new { "Add Configuration" } else { "Edit Configuration" }}
                    </h2>
                    <button on:click=move |_| on_close.run(()) class="p-1 hover:bg-white/10 rounded">
                        <svg xmlns="http://www.w3.org/2000/svg" class="w-5 h-5" viewBox="0 0 20 20" fill="currentColor">
                            <path fill-rule="evenodd" d="M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z" clip-rule="evenodd" />
                        </svg>
                    </button>
                </div>

                <Show when=move || error.get().is_some()>
                    <div class="banner-error mb-4">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <div class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium mb-1">"Key name"</label>
                        <input
                            type="text"
                            prop:value=move || key_name.get()
                            on:input=move |ev| key_name.set(event_target_value(&ev))
                            placeholder="GEMINI_API_KEY"
                            class="input w-full font-mono"
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium mb-1">"Key value"</label>
                        <div class="relative">
                            <input
                                type=move || if show_value.get() { "text" } else { "password" }
                                prop:value=move || key_value.get()
                                on:input=move |ev| key_value.set(event_target_value(&ev))
                                placeholder=if is_new { "Secret value" } else { "Leave blank to keep current value" }
                                class="input w-full pr-10 font-mono"
                            />
                            <button
                                on:click=move |_| show_value.update(|v| *v = !*v)
                                class="absolute right-3 top-1/2 -translate-y-1/2 text-[var(--text-muted)]
                                       hover:text-[var(--text-primary)] transition-colors"
                            >
                                {move || if show_value.get() { "🙈" } else { "👁" }}
                            </button>
                        </div>
                    </div>
                    <div>
                        <label class="block text-sm font-medium mb-1">"Description"</label>
                        <input
                            type="text"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                            placeholder="Optional description for this configuration"
                            class="input w-full"
                        />
                    </div>
                    <label class="flex items-center gap-2 text-sm">
                        <input
                            type="checkbox"
                            prop:checked=move || is_active.get()
                            on:change=move |_| is_active.update(|v| *v = !*v)
                        />
                        "Active"
                    </label>
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
                        {move || {
                            if saving.get() {
                                "Saving..."
                            } else if is_new {
                                "Create"
                            } else {
                                "Save Changes"
                            }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
