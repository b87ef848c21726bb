//! Chat history drawer

use leptos::prelude::*;

use crate::components::LoadingSpinner;
use crate::types::{parse_timestamp, ChatSessionRecord};

/// Right-hand drawer listing every stored chat session. Selecting an entry
/// loads its transcript; the trash action deletes the session server-side.
#[component]
pub fn ChatHistory(
    /// Stored sessions, newest first as returned by the backend
    entries: RwSignal<Vec<ChatSessionRecord>>,
    /// History fetch in flight
    #[prop(into)]
    loading: Signal<bool>,
    /// Delete in flight; disables the whole list
    #[prop(into)]
    deleting: Signal<bool>,
    /// Close the drawer
    #[prop(into)]
    on_close: Callback<()>,
    /// Called with the selected session id
    #[prop(into)]
    on_select: Callback<String>,
    /// Called with the session id to delete
    #[prop(into)]
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="w-80 shrink-0 glass border-l border-[var(--border-default)] p-6 overflow-y-auto">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-xl font-bold">"Chat History"</h2>
                <button
                    on:click=move |_| on_close.run(())
                    class="p-1 hover:bg-white/10 rounded"
                >
                    <svg xmlns="http://www.w3.org/2000/svg" class="w-5 h-5" viewBox="0 0 20 20" fill="currentColor">
                        <path fill-rule="evenodd" d="M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z" clip-rule="evenodd" />
                    </svg>
                </button>
            </div>

            <div class="space-y-3">
                {move || {
                    if loading.get() {
                        view! {
                            <div class="flex items-center justify-center py-8 gap-2 text-sm text-[var(--text-muted)]">
                                <LoadingSpinner />
                                "Loading history..."
                            </div>
                        }.into_any()
                    } else if entries.get().is_empty() {
                        view! {
                            <p class="text-[var(--text-muted)] text-sm text-center py-8">
                                "No chat history yet"
                            </p>
                        }.into_any()
                    } else {
                        entries.get().into_iter().map(|entry| {
                            view! {
                                <HistoryEntry
                                    entry=entry
                                    deleting=deleting
                                    on_select=on_select
                                    on_delete=on_delete
                                />
                            }
                        }).collect::<Vec<_>>().into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn HistoryEntry(
    entry: ChatSessionRecord,
    #[prop(into)] deleting: Signal<bool>,
    #[prop(into)] on_select: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let preview = entry.preview().to_string();
    let last = entry
        .last_timestamp()
        .map(|raw| parse_timestamp(Some(raw)).format("%b %-d, %H:%M").to_string());
    let select_id = entry.session_id.clone();
    let delete_id = entry.session_id.clone();

    view! {
        <div class="relative">
            <button
                on:click=move |_| {
                    if !deleting.get() {
                        on_select.run(select_id.clone());
                    }
                }
                disabled=move || deleting.get()
                class="w-full p-4 bg-white/5 hover:bg-white/10 rounded-lg text-left border
                       border-[var(--border-default)] transition-all disabled:opacity-50
                       disabled:cursor-not-allowed"
            >
                <p class="font-medium text-sm truncate pr-6">{preview}</p>
                {last.map(|ts| view! {
                    <p class="text-xs text-[var(--text-muted)] mt-1">{format!("Last: {}", ts)}</p>
                })}
            </button>
            <button
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    if !deleting.get() {
                        on_delete.run(delete_id.clone());
                    }
                }
                disabled=move || deleting.get()
                class="absolute top-2 right-2 text-red-400 hover:text-red-500 disabled:opacity-50"
                title="Delete session"
            >
                <svg xmlns="http://www.w3.org/2000/svg" class="w-4 h-4" viewBox="0 0 20 20" fill="currentColor">
                    <path fill-rule="evenodd" d="M9 2a1 1 0 00-.894.553L7.382 4H4a1 1 0 000 2v10a2 2 0 002 2h8a2 2 0 002-2V6a1 1 0 100-2h-3.382l-.724-1.447A1 1 0 0011 2H9zM7 8a1 1 0 012 0v6a1 1 0 11-2 0V8zm5-1a1 1 0 00-1 1v6a1 1 0 102 0V8a1 1 0 00-1-1z" clip-rule="evenodd" />
                </svg>
            </button>
        </div>
    }
}
