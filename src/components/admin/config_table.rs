//! Admin API-config table

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{confirm, ConfigModal, StatCard};
use crate::api;
use crate::components::LoadingSpinner;
use crate::mutation::Optimistic;
use crate::state::AppState;
use crate::types::{parse_timestamp, ApiConfig};

/// Which modal, if any, is open
#[derive(Clone, PartialEq)]
enum ModalState {
    Closed,
    Create,
    Edit(ApiConfig),
}

/// API-key configuration table: fetch-all on mount, client-side search,
/// create/edit through a shared modal, optimistic toggle with revert, and
/// confirmed delete.
#[component]
pub fn ConfigTable() -> impl IntoView {
    let state = expect_context::<AppState>();

    let configs = RwSignal::new(Vec::<ApiConfig>::new());
    let loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let modal = RwSignal::new(ModalState::Closed);

    let refresh = {
        let state = state.clone();
        move || {
            let state = state.clone();
            loading.set(true);
            spawn_local(async move {
                let base = state.api_base.get_untracked();
                let token = state.token.get_untracked().unwrap_or_default();
                match api::admin_fetch_configs(&base, &token).await {
                    Ok(list) => {
                        configs.set(list);
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::error!("Failed to fetch API configs: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        }
    };

    {
        let refresh = refresh.clone();
        Effect::new(move |_| refresh());
    }

    let on_toggle = {
        let state = state.clone();
        Callback::new(move |(id, current): (String, bool)| {
            let state = state.clone();
            spawn_local(async move {
                let toggle_id = id.clone();
                let txn = Optimistic::apply(configs, |list| {
                    if let Some(c) = list.iter_mut().find(|c| c.id == toggle_id) {
                        c.is_active = !current;
                    }
                });

                let base = state.api_base.get_untracked();
                let token = state.token.get_untracked().unwrap_or_default();
                match api::admin_toggle_config(&base, &token, &id, !current).await {
                    Ok(resp) => txn.commit_with(|list| {
                        if let Some(c) = list.iter_mut().find(|c| c.id == id) {
                            c.is_active = resp.is_active;
                        }
                    }),
                    Err(e) => {
                        txn.revert();
                        error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    let on_delete = {
        let state = state.clone();
        Callback::new(move |id: String| {
            if !confirm("Delete this API configuration? This action cannot be undone.") {
                return;
            }
            let state = state.clone();
            spawn_local(async move {
                let base = state.api_base.get_untracked();
                let token = state.token.get_untracked().unwrap_or_default();
                match api::admin_delete_config(&base, &token, &id).await {
                    Ok(_) => {
                        configs.update(|list| list.retain(|c| c.id != id));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    // The modal saved: close it and re-fetch the authoritative list
    let on_saved = {
        let refresh = refresh.clone();
        Callback::new(move |_: ()| {
            modal.set(ModalState::Closed);
            refresh();
        })
    };

    let filtered = Signal::derive(move || {
        let needle = search.get();
        configs
            .get()
            .into_iter()
            .filter(|c| c.matches(&needle))
            .collect::<Vec<_>>()
    });
    let total = Signal::derive(move || configs.get().len());
    let active = Signal::derive(move || configs.get().iter().filter(|c| c.is_active).count());

    view! {
        <div class="space-y-6">
            // Stats
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <StatCard label="Total Configurations" value=total />
                <StatCard
                    label="Active Configurations"
                    value=active
                    accent="from-green-600/20 to-green-800/20 border-green-500/30"
                />
            </div>

            // Search and actions
            <div class="card p-4 flex flex-col md:flex-row gap-4 items-stretch md:items-center">
                <input
                    type="text"
                    placeholder="Search by key name or description..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                    class="input flex-1"
                />
                <div class="flex gap-2">
                    <button
                        on:click=move |_| modal.set(ModalState::Create)
                        class="btn btn-primary"
                    >
                        "Add Config"
                    </button>
                    <button
                        on:click={
                            let refresh = refresh.clone();
                            move |_| refresh()
                        }
                        class="btn btn-ghost"
                    >
                        "Refresh"
                    </button>
                </div>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="banner-error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            // Table
            <div class="card overflow-x-auto">
                <table class="w-full">
                    <thead>
                        <tr class="border-b border-[var(--border-default)]">
                            <th class="table-head">"Key Name"</th>
                            <th class="table-head">"Status"</th>
                            <th class="table-head">"Updated"</th>
                            <th class="table-head text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-[var(--border-default)]">
                        {move || {
                            if loading.get() {
                                view! {
                                    <tr>
                                        <td colspan="4" class="px-6 py-12 text-center">
                                            <div class="flex items-center justify-center gap-2 text-[var(--text-muted)]">
                                                <LoadingSpinner />
                                                "Loading configurations..."
                                            </div>
                                        </td>
                                    </tr>
                                }.into_any()
                            } else if filtered.get().is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="4" class="px-6 py-12 text-center text-[var(--text-muted)]">
                                            {move || if search.get().is_empty() {
                                                "No API configurations found. Click 'Add Config' to create one."
                                            } else {
                                                "No configurations found matching your search"
                                            }}
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                filtered.get().into_iter().map(|config| {
                                    view! {
                                        <ConfigRow
                                            config=config
                                            on_toggle=on_toggle
                                            on_edit=Callback::new(move |c: ApiConfig| {
                                                modal.set(ModalState::Edit(c))
                                            })
                                            on_delete=on_delete
                                        />
                                    }
                                }).collect::<Vec<_>>().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            // Create/edit modal
            {move || match modal.get() {
                ModalState::Closed => None,
                ModalState::Create => Some(view! {
                    <ConfigModal
                        config=None
                        on_close=Callback::new(move |_: ()| modal.set(ModalState::Closed))
                        on_saved=on_saved
                    />
                }.into_any()),
                ModalState::Edit(config) => Some(view! {
                    <ConfigModal
                        config=Some(config)
                        on_close=Callback::new(move |_: ()| modal.set(ModalState::Closed))
                        on_saved=on_saved
                    />
                }.into_any()),
            }}
        </div>
    }
}

#[component]
fn ConfigRow(
    config: ApiConfig,
    #[prop(into)] on_toggle: Callback<(String, bool)>,
    #[prop(into)] on_edit: Callback<ApiConfig>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let changed = config
        .last_changed()
        .map(|raw| parse_timestamp(Some(raw)).format("%b %-d, %Y %H:%M").to_string())
        .unwrap_or_else(|| "—".to_string());
    let encrypted = config.key_value_encrypted.unwrap_or(false);

    let toggle_id = config.id.clone();
    let delete_id = config.id.clone();
    let is_active = config.is_active;
    let edit_config = config.clone();

    view! {
        <tr class="hover:bg-white/5 transition-colors">
            <td class="table-cell">
                <div class="text-sm font-semibold">{config.key_name.clone()}</div>
                <div class="text-xs text-[var(--text-muted)] mt-1">
                    {if encrypted { "🔑 Encrypted" } else { "Plain text" }}
                </div>
            </td>
            <td class="table-cell">
                <button
                    on:click=move |_| on_toggle.run((toggle_id.clone(), is_active))
                    class=format!(
                        "px-3 py-1.5 text-xs font-bold rounded-lg transition-colors {}",
                        if is_active {
                            "bg-green-500/20 text-green-400"
                        } else {
                            "bg-red-500/20 text-red-400"
                        }
                    )
                >
                    {if is_active { "Active" } else { "Inactive" }}
                </button>
            </td>
            <td class="table-cell text-sm text-[var(--text-muted)]">{changed}</td>
            <td class="table-cell">
                <div class="flex items-center justify-end gap-2">
                    <button
                        on:click=move |_| on_edit.run(edit_config.clone())
                        class="p-2 text-violet-400 hover:bg-violet-500/20 rounded-xl transition-colors"
                        title="Edit configuration"
                    >
                        <svg xmlns="http://www.w3.org/2000/svg" class="w-4 h-4" viewBox="0 0 20 20" fill="currentColor">
                            <path d="M13.586 3.586a2 2 0 112.828 2.828l-.793.793-2.828-2.828.793-.793zM11.379 5.793L3 14.172V17h2.828l8.38-8.379-2.83-2.828z" />
                        </svg>
                    </button>
                    <button
                        on:click=move |_| on_delete.run(delete_id.clone())
                        class="p-2 text-red-400 hover:bg-red-500/20 rounded-xl transition-colors"
                        title="Delete configuration"
                    >
                        <svg xmlns="http://www.w3.org/2000/svg" class="w-4 h-4" viewBox="0 0 20 20" fill="currentColor">
                            <path fill-rule="evenodd" d="M9 2a1 1 0 00-.894.553L7.382 4H4a1 1 0 000 2v10a2 2 0 002 2h8a2 2 0 002-2V6a1 1 0 100-2h-3.382l-.724-1.447A1 1 0 0011 2H9zM7 8a1 1 0 012 0v6a1 1 0 11-2 0V8zm5-1a1 1 0 00-1 1v6a1 1 0 102 0V8a1 1 0 00-1-1z" clip-rule="evenodd" />
                        </svg>
                    </button>
                </div>
            </td>
        </tr>
    }
}
