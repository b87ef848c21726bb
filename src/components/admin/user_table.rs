//! Admin users table

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{confirm, StatCard, UserModal};
use crate::api;
use crate::components::LoadingSpinner;
use crate::mutation::Optimistic;
use crate::state::AppState;
use crate::types::{parse_timestamp, AdminUser};

/// Users table: fetch-all on mount, client-side search, and row-level
/// toggle/edit/delete. The toggle is optimistic and reverts when the server
/// rejects it; deletes touch local state on confirmed success only.
#[component]
pub fn UserTable() -> impl IntoView {
    let state = expect_context::<AppState>();

    let users = RwSignal::new(Vec::<AdminUser>::new());
    let loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let selected = RwSignal::new(Option::<AdminUser>::None);

    let refresh = {
        let state = state.clone();
        move || {
            let state = state.clone();
            loading.set(true);
            spawn_local(async move {
                let base = state.api_base.get_untracked();
                let token = state.token.get_untracked().unwrap_or_default();
                match api::admin_fetch_users(&base, &token).await {
                    Ok(list) => {
                        users.set(list);
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::error!("Failed to fetch users: {}", e);
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
                let txn = Optimistic::apply(users, |list| {
                    if let Some(u) = list.iter_mut().find(|u| u.id == toggle_id) {
                        u.is_active = !current;
                    }
                });

                let base = state.api_base.get_untracked();
                let token = state.token.get_untracked().unwrap_or_default();
                match api::admin_toggle_user(&base, &token, &id, !current).await {
                    Ok(resp) => txn.commit_with(|list| {
                        if let Some(u) = list.iter_mut().find(|u| u.id == id) {
                            u.is_active = resp.is_active;
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
            if !confirm("Delete this user? Their chat sessions will be removed as well.") {
                return;
            }
            let state = state.clone();
            spawn_local(async move {
                let base = state.api_base.get_untracked();
                let token = state.token.get_untracked().unwrap_or_default();
                match api::admin_delete_user(&base, &token, &id).await {
                    Ok(_) => {
                        users.update(|list| list.retain(|u| u.id != id));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    // Merge the saved limits into the local row and close the modal
    let on_saved = Callback::new(
        move |(id, chat_limit, window): (String, Option<u32>, Option<String>)| {
            users.update(|list| {
                if let Some(u) = list.iter_mut().find(|u| u.id == id) {
                    u.chat_limit = chat_limit;
                    u.usage_time_window = window;
                }
            });
            selected.set(None);
        },
    );

    let filtered = Signal::derive(move || {
        let needle = search.get();
        users
            .get()
            .into_iter()
            .filter(|u| u.matches(&needle))
            .collect::<Vec<_>>()
    });
    let total = Signal::derive(move || users.get().len());
    let active = Signal::derive(move || users.get().iter().filter(|u| u.is_active).count());

    view! {
        <div class="space-y-6">
            // Stats
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <StatCard label="Total Users" value=total />
                <StatCard
                    label="Active Users"
                    value=active
                    accent="from-green-600/20 to-green-800/20 border-green-500/30"
                />
            </div>

            // Search and refresh
            <div class="card p-4 flex flex-col md:flex-row gap-4 items-stretch md:items-center">
                <input
                    type="text"
                    placeholder="Search by name or email..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                    class="input flex-1"
                />
                <button
                    on:click={
                        let refresh = refresh.clone();
                        move |_| refresh()
                    }
                    class="btn btn-primary"
                >
                    "Refresh"
                </button>
            </div>

            // Error banner: server messages shown verbatim
            <Show when=move || error.get().is_some()>
                <div class="banner-error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            // Table
            <div class="card overflow-x-auto">
                <table class="w-full">
                    <thead>
                        <tr class="border-b border-[var(--border-default)]">
                            <th class="table-head">"User"</th>
                            <th class="table-head">"Contact"</th>
                            <th class="table-head">"Status"</th>
                            <th class="table-head">"Sessions"</th>
                            <th class="table-head">"Created"</th>
                            <th class="table-head text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-[var(--border-default)]">
                        {move || {
                            if loading.get() {
                                view! {
                                    <tr>
                                        <td colspan="6" class="px-6 py-12 text-center">
                                            <div class="flex items-center justify-center gap-2 text-[var(--text-muted)]">
                                                <LoadingSpinner />
                                                "Loading users..."
                                            </div>
                                        </td>
                                    </tr>
                                }.into_any()
                            } else if filtered.get().is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="6" class="px-6 py-12 text-center text-[var(--text-muted)]">
                                            "No users found"
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                filtered.get().into_iter().map(|user| {
                                    view! {
                                        <UserRow
                                            user=user
                                            on_toggle=on_toggle
                                            on_edit=Callback::new(move |u: AdminUser| selected.set(Some(u)))
                                            on_delete=on_delete
                                        />
                                    }
                                }).collect::<Vec<_>>().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            // Details/edit modal
            {move || selected.get().map(|user| view! {
                <UserModal
                    user=user
                    on_close=Callback::new(move |_: ()| selected.set(None))
                    on_saved=on_saved
                />
            })}
        </div>
    }
}

#[component]
fn UserRow(
    user: AdminUser,
    #[prop(into)] on_toggle: Callback<(String, bool)>,
    #[prop(into)] on_edit: Callback<AdminUser>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let created = user
        .created_at
        .as_deref()
        .map(|raw| parse_timestamp(Some(raw)).format("%b %-d, %Y %H:%M").to_string())
        .unwrap_or_else(|| "—".to_string());

    let toggle_id = user.id.clone();
    let delete_id = user.id.clone();
    let is_active = user.is_active;
    let edit_user = user.clone();

    view! {
        <tr class="hover:bg-white/5 transition-colors">
            <td class="table-cell">
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 rounded-xl bg-gradient-to-br from-violet-500 to-purple-600
                                flex items-center justify-center text-white font-bold text-sm">
                        {user.initials()}
                    </div>
                    <div class="text-sm font-semibold">{user.full_name()}</div>
                </div>
            </td>
            <td class="table-cell">
                <div class="text-sm">{user.email.clone()}</div>
                <div class="text-xs text-[var(--text-muted)]">{user.phone.clone()}</div>
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
            <td class="table-cell">
                <span class="text-sm font-bold text-blue-400">{user.total_chat_sessions}</span>
            </td>
            <td class="table-cell text-sm text-[var(--text-muted)]">{created}</td>
            <td class="table-cell">
                <div class="flex items-center justify-end gap-2">
                    <button
                        on:click=move |_| on_edit.run(edit_user.clone())
                        class="p-2 text-violet-400 hover:bg-violet-500/20 rounded-xl transition-colors"
                        title="View and edit limits"
                    >
                        <svg xmlns="http://www.w3.org/2000/svg" class="w-4 h-4" viewBox="0 0 20 20" fill="currentColor">
                            <path d="M13.586 3.586a2 2 0 112.828 2.828l-.793.793-2.828-2.828.793-.793zM11.379 5.793L3 14.172V17h2.828l8.38-8.379-2.83-2.828z" />
                        </svg>
                    </button>
                    <button
                        on:click=move |_| on_delete.run(delete_id.clone())
                        class="p-2 text-red-400 hover:bg-red-500/20 rounded-xl transition-colors"
                        title="Delete user"
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
