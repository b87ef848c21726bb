//! Sidebar component: document panel and new-chat control

use leptos::prelude::*;

use crate::components::LoadingSpinner;
use crate::types::{parse_timestamp, DocumentInfo};

/// Sidebar with the upload control, the authoritative document list, and the
/// new-chat button.
#[component]
pub fn Sidebar(
    /// Whether sidebar is open (mobile)
    is_open: RwSignal<bool>,
    /// Documents as last fetched from the backend
    documents: RwSignal<Vec<DocumentInfo>>,
    /// Document list fetch in flight
    #[prop(into)]
    loading_documents: Signal<bool>,
    /// Upload in flight; disables the upload control
    #[prop(into)]
    uploading: Signal<bool>,
    /// New-session request in flight
    #[prop(into)]
    creating_session: Signal<bool>,
    /// Called with the selected files
    #[prop(into)]
    on_upload: Callback<web_sys::FileList>,
    /// Called with a document id after the user picks delete
    #[prop(into)]
    on_delete: Callback<String>,
    /// Called when the user starts a new chat
    #[prop(into)]
    on_new_chat: Callback<()>,
) -> impl IntoView {
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let open_picker = move |_| {
        if uploading.get() {
            return;
        }
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    let on_files_chosen = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            if files.length() > 0 {
                on_upload.run(files);
            }
        }
        // Allow re-selecting the same file next time
        input.set_value("");
    };

    view! {
        // Overlay for mobile
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 bg-black/60 backdrop-blur-sm z-30 lg:hidden animate-fade-in"
                on:click=move |_| is_open.set(false)
            ></div>
        </Show>

        // Sidebar
        <aside class=move || format!(
            "sidebar fixed lg:relative inset-y-0 left-0 z-40 w-80
             flex flex-col transform transition-transform duration-300 lg:translate-x-0 {}",
            if is_open.get() { "translate-x-0" } else { "-translate-x-full" }
        )>
            // Upload + new chat controls
            <div class="p-4 border-b border-[var(--border-default)] space-y-2">
                <input
                    type="file"
                    multiple=true
                    accept=".pdf,.doc,.docx,.txt"
                    class="hidden"
                    node_ref=file_input_ref
                    on:change=on_files_chosen
                />
                <button
                    on:click=open_picker
                    disabled=move || uploading.get()
                    class="btn btn-primary w-full"
                >
                    <Show
                        when=move || uploading.get()
                        fallback=|| view! {
                            <svg xmlns="http://www.w3.org/2000/svg" class="w-5 h-5" viewBox="0 0 20 20" fill="currentColor">
                                <path fill-rule="evenodd" d="M3 17a1 1 0 011-1h12a1 1 0 110 2H4a1 1 0 01-1-1zm3.293-7.707a1 1 0 011.414 0L9 10.586V3a1 1 0 112 0v7.586l1.293-1.293a1 1 0 111.414 1.414l-3 3a1 1 0 01-1.414 0l-3-3a1 1 0 010-1.414z" clip-rule="evenodd" />
                            </svg>
                            "Upload Documents"
                        }
                    >
                        <LoadingSpinner />
                        "Uploading..."
                    </Show>
                </button>
                <button
                    on:click=move |_| on_new_chat.run(())
                    disabled=move || creating_session.get()
                    class="btn btn-ghost w-full"
                >
                    <svg xmlns="http://www.w3.org/2000/svg" class="w-5 h-5" viewBox="0 0 20 20" fill="currentColor">
                        <path fill-rule="evenodd" d="M10 3a1 1 0 011 1v5h5a1 1 0 110 2h-5v5a1 1 0 11-2 0v-5H4a1 1 0 110-2h5V4a1 1 0 011-1z" clip-rule="evenodd" />
                    </svg>
                    {move || if creating_session.get() { "Starting..." } else { "New Chat" }}
                </button>
            </div>

            // Documents section
            <div class="flex-1 overflow-y-auto p-4">
                <h3 class="text-xs font-semibold text-[var(--text-muted)] uppercase tracking-wider mb-3 px-2">
                    {move || format!("Documents ({})", documents.get().len())}
                </h3>

                {move || {
                    if loading_documents.get() {
                        view! {
                            <div class="flex items-center justify-center py-8 gap-2 text-sm text-[var(--text-muted)]">
                                <LoadingSpinner />
                                "Loading documents..."
                            </div>
                        }.into_any()
                    } else if documents.get().is_empty() {
                        view! {
                            <p class="text-sm text-[var(--text-muted)] text-center py-4">
                                "No documents uploaded yet"
                            </p>
                        }.into_any()
                    } else {
                        documents.get().into_iter().map(|doc| {
                            view! { <DocumentRow doc=doc on_delete=on_delete /> }
                        }).collect::<Vec<_>>().into_any()
                    }
                }}
            </div>

            // Footer
            <div class="p-4 border-t border-[var(--border-default)]">
                <div class="text-xs text-[var(--text-muted)] text-center">
                    "Quill v0.1.0"
                </div>
            </div>
        </aside>
    }
}

/// One document row with its status and delete action
#[component]
fn DocumentRow(doc: DocumentInfo, #[prop(into)] on_delete: Callback<String>) -> impl IntoView {
    let id = doc.id.clone();
    let created = doc
        .created_at
        .as_deref()
        .map(|raw| parse_timestamp(Some(raw)).format("%b %-d, %H:%M").to_string());
    let status = doc.status.clone().unwrap_or_else(|| "ready".to_string());

    view! {
        <div class="sidebar-item relative group mb-2">
            <span class="text-lg">"📄"</span>
            <div class="flex-1 min-w-0">
                <div class="text-sm font-medium truncate">{doc.file_name.clone()}</div>
                <div class="text-xs text-[var(--text-muted)] truncate">
                    {match created {
                        Some(ts) => format!("{} • {}", ts, status),
                        None => status,
                    }}
                </div>
            </div>
            <button
                on:click=move |_| on_delete.run(id.clone())
                class="p-1.5 text-[var(--text-muted)] hover:text-red-400 transition-colors"
                title="Delete document"
            >
                <svg xmlns="http://www.w3.org/2000/svg" class="w-4 h-4" viewBox="0 0 20 20" fill="currentColor">
                    <path fill-rule="evenodd" d="M9 2a1 1 0 00-.894.553L7.382 4H4a1 1 0 000 2v10a2 2 0 002 2h8a2 2 0 002-2V6a1 1 0 100-2h-3.382l-.724-1.447A1 1 0 0011 2H9zM7 8a1 1 0 012 0v6a1 1 0 11-2 0V8zm5-1a1 1 0 00-1 1v6a1 1 0 102 0V8a1 1 0 00-1-1z" clip-rule="evenodd" />
                </svg>
            </button>
        </div>
    }
}
