//! Chat page - main conversation interface

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::api::{self, ApiError};
use crate::components::{ChatHistory, ChatInput, ChatMessage, Header, RequireAuth, Sidebar, TypingIndicator};
use crate::state::AppState;
use crate::types::{Conversation, UploadReport};

/// Returns the active chat session id, requesting one from the backend when
/// none exists yet. Sessions are only ever minted server-side.
async fn ensure_session(
    state: &AppState,
    conversation: RwSignal<Conversation>,
) -> Result<String, ApiError> {
    if let Some(id) = state.chat_session.get_untracked() {
        return Ok(id);
    }
    let base = state.api_base.get_untracked();
    let token = state.token.get_untracked().unwrap_or_default();
    let id = api::new_session(&base, &token).await?;
    state.set_chat_session(Some(id.clone()));
    conversation.update(|c| c.session_id = Some(id.clone()));
    Ok(id)
}

/// System-message summary for an upload report.
fn upload_notice(report: &UploadReport) -> String {
    let ok: Vec<&str> = report.succeeded().map(|r| r.file_name.as_str()).collect();
    let failed: Vec<String> = report
        .failed()
        .map(|r| match &r.message {
            Some(m) => format!("{} ({})", r.file_name, m),
            None => r.file_name.clone(),
        })
        .collect();

    match (ok.is_empty(), failed.is_empty()) {
        (false, true) => format!(
            "Successfully uploaded {} document(s): {}. You can now ask questions about them.",
            ok.len(),
            ok.join(", ")
        ),
        (false, false) => format!(
            "Uploaded {}. Some files failed: {}",
            ok.join(", "),
            failed.join(", ")
        ),
        (true, false) => format!("Document upload failed: {}", failed.join(", ")),
        (true, true) => "No files were processed.".to_string(),
    }
}

/// Page-local error banner state
#[derive(Clone, PartialEq)]
struct Notice {
    text: String,
    retryable: bool,
}

impl From<ApiError> for Notice {
    fn from(err: ApiError) -> Self {
        Self {
            retryable: err.is_retryable(),
            text: err.message().to_string(),
        }
    }
}

/// Main chat page
#[component]
pub fn ChatPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    // Local state
    let conversation = RwSignal::new(Conversation {
        session_id: state.chat_session.get_untracked(),
        messages: Vec::new(),
    });
    let history = RwSignal::new(Vec::new());
    let documents = RwSignal::new(Vec::new());
    let input = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<Notice>::None);
    let toast = RwSignal::new(Option::<String>::None);

    // In-flight flags; each disables its own control only
    let is_sending = RwSignal::new(false);
    let is_uploading = RwSignal::new(false);
    let loading_documents = RwSignal::new(false);
    let loading_history = RwSignal::new(false);
    let deleting_session = RwSignal::new(false);

    let show_history = RwSignal::new(false);
    let sidebar_open = RwSignal::new(false);
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_to_bottom = move || {
        if let Some(el) = messages_end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    };

    let show_toast = move |text: String| {
        toast.set(Some(text));
        gloo_timers::callback::Timeout::new(4000, move || toast.set(None)).forget();
    };

    let refresh_documents = {
        let state = state.clone();
        Callback::new(move |_: ()| {
            let state = state.clone();
            loading_documents.set(true);
            spawn_local(async move {
                let base = state.api_base.get_untracked();
                let token = state.token.get_untracked().unwrap_or_default();
                match api::fetch_documents(&base, &token).await {
                    Ok(list) => documents.set(list),
                    Err(e) => tracing::error!("Failed to fetch documents: {}", e),
                }
                loading_documents.set(false);
            });
        })
    };

    let refresh_history = {
        let state = state.clone();
        Callback::new(move |_: ()| {
            let state = state.clone();
            loading_history.set(true);
            spawn_local(async move {
                let base = state.api_base.get_untracked();
                let token = state.token.get_untracked().unwrap_or_default();
                match api::fetch_all_history(&base, &token).await {
                    Ok(list) => history.set(list),
                    Err(e) => tracing::error!("Failed to fetch chat history: {}", e),
                }
                loading_history.set(false);
            });
        })
    };

    // Load documents and history on mount
    Effect::new(move |_| {
        refresh_documents.run(());
        refresh_history.run(());
    });

    // Ask: optimistic user turn, AI turn on success, full retraction on
    // failure so a rejected ask leaves no residue in the transcript.
    let send = {
        let state = state.clone();
        Callback::new(move |_: ()| {
            let question = input.get_untracked().trim().to_string();
            if question.is_empty() || is_sending.get_untracked() {
                return;
            }
            input.set(String::new());
            is_sending.set(true);
            error.set(None);

            let state = state.clone();
            spawn_local(async move {
                let mut optimistic_id = String::new();
                conversation.update(|c| optimistic_id = c.push_user(&question));
                scroll_to_bottom();

                let result = async {
                    let session_id = ensure_session(&state, conversation).await?;
                    let base = state.api_base.get_untracked();
                    let token = state.token.get_untracked().unwrap_or_default();
                    api::ask(&base, &token, &question, &session_id).await
                }
                .await;

                match result {
                    Ok(answer) => {
                        conversation.update(|c| c.push_ai(answer));
                        refresh_history.run(());
                    }
                    Err(e) => {
                        tracing::warn!("Ask failed: {}", e);
                        conversation.update(|c| c.retract(&optimistic_id));
                        error.set(Some(e.into()));
                    }
                }
                is_sending.set(false);
                scroll_to_bottom();
            });
        })
    };

    // New chat: a permission failure leaves the previous session id and the
    // transcript untouched.
    let creating_session = RwSignal::new(false);
    let new_chat = {
        let state = state.clone();
        Callback::new(move |_: ()| {
            if creating_session.get_untracked() {
                return;
            }
            creating_session.set(true);
            error.set(None);

            let state = state.clone();
            spawn_local(async move {
                let base = state.api_base.get_untracked();
                let token = state.token.get_untracked().unwrap_or_default();
                match api::new_session(&base, &token).await {
                    Ok(id) => {
                        state.set_chat_session(Some(id.clone()));
                        conversation.update(|c| c.begin(id));
                        show_toast("Started a new conversation".to_string());
                    }
                    Err(e) => error.set(Some(e.into())),
                }
                creating_session.set(false);
            });
        })
    };

    // Upload: re-fetches the authoritative document list instead of
    // trusting the upload response for it.
    let upload = {
        let state = state.clone();
        Callback::new(move |files: web_sys::FileList| {
            if is_uploading.get_untracked() {
                return;
            }
            is_uploading.set(true);
            error.set(None);

            let state = state.clone();
            spawn_local(async move {
                let result = async {
                    let session_id = ensure_session(&state, conversation).await?;
                    let base = state.api_base.get_untracked();
                    let token = state.token.get_untracked().unwrap_or_default();
                    api::upload_documents(&base, &token, &session_id, &files).await
                }
                .await;

                match result {
                    Ok(report) => {
                        conversation.update(|c| c.push_system(upload_notice(&report)));
                        refresh_documents.run(());
                    }
                    Err(e) => {
                        tracing::warn!("Upload failed: {}", e);
                        error.set(Some(e.into()));
                    }
                }
                is_uploading.set(false);
                scroll_to_bottom();
            });
        })
    };

    // Document delete: local list is filtered on confirmed success only.
    let delete_document = {
        let state = state.clone();
        Callback::new(move |id: String| {
            let state = state.clone();
            spawn_local(async move {
                let base = state.api_base.get_untracked();
                let token = state.token.get_untracked().unwrap_or_default();
                match api::delete_document(&base, &token, &id).await {
                    Ok(_) => documents.update(|list| list.retain(|d| d.id != id)),
                    Err(e) => error.set(Some(e.into())),
                }
            });
        })
    };

    // History entry selection replaces the transcript and the active id.
    let select_session = {
        let state = state.clone();
        Callback::new(move |session_id: String| {
            let record = history
                .get_untracked()
                .into_iter()
                .find(|r| r.session_id == session_id);
            if let Some(record) = record {
                conversation.update(|c| c.load_record(&record));
                state.set_chat_session(Some(record.session_id.clone()));
                show_history.set(false);
            }
        })
    };

    // Session delete: removing the active session clears the transcript and
    // unsets the stored id, forcing a fresh session on the next ask.
    let delete_session = {
        let state = state.clone();
        Callback::new(move |session_id: String| {
            if deleting_session.get_untracked() {
                return;
            }
            deleting_session.set(true);

            let state = state.clone();
            spawn_local(async move {
                let base = state.api_base.get_untracked();
                let token = state.token.get_untracked().unwrap_or_default();
                match api::delete_chat(&base, &token, &session_id).await {
                    Ok(_) => {
                        history.update(|h| h.retain(|r| r.session_id != session_id));
                        conversation.update(|c| c.note_session_deleted(&session_id));
                        if state.chat_session.get_untracked().as_deref() == Some(&session_id) {
                            state.set_chat_session(None);
                        }
                    }
                    Err(e) => error.set(Some(e.into())),
                }
                deleting_session.set(false);
            });
        })
    };

    view! {
        <RequireAuth>
            <Title text="Quill — Chat" />
            <div class="h-screen flex flex-col bg-[var(--bg-primary)]">
                <Header />

                <div class="flex-1 flex overflow-hidden">
                    <Sidebar
                        is_open=sidebar_open
                        documents=documents
                        loading_documents=loading_documents
                        uploading=is_uploading
                        creating_session=creating_session
                        on_upload=upload
                        on_delete=delete_document
                        on_new_chat=new_chat
                    />

                    // Main chat area
                    <main class="flex-1 flex flex-col min-w-0">
                        // Toolbar
                        <div class="h-14 px-4 flex items-center justify-between border-b border-[var(--border-default)] glass">
                            <button
                                on:click=move |_| sidebar_open.update(|v| *v = !*v)
                                class="lg:hidden btn btn-ghost p-2"
                            >
                                <svg xmlns="http://www.w3.org/2000/svg" class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                                </svg>
                            </button>

                            <div class="flex items-center gap-2">
                                <span class="text-lg">"🪶"</span>
                                <span class="font-semibold text-sm">"Knowledge Assistant"</span>
                            </div>

                            <div class="flex items-center gap-3">
                                // Status indicator
                                <div class="flex items-center gap-2">
                                    <div class=move || format!(
                                        "w-2 h-2 rounded-full {}",
                                        if is_sending.get() { "bg-[var(--accent-warning)] animate-pulse" } else { "bg-[var(--accent-success)]" }
                                    )></div>
                                    <span class="text-xs text-[var(--text-muted)]">
                                        {move || if is_sending.get() { "Thinking..." } else { "Ready" }}
                                    </span>
                                </div>

                                <button
                                    on:click=move |_| {
                                        show_history.update(|v| *v = !*v);
                                        if show_history.get_untracked() {
                                            refresh_history.run(());
                                        }
                                    }
                                    class="btn btn-ghost text-sm"
                                >
                                    "History"
                                </button>
                            </div>
                        </div>

                        // Error banner: denied (403) notices are not retryable
                        <Show when=move || error.get().is_some()>
                            {move || error.get().map(|notice| view! {
                                <div class=format!(
                                    "mx-4 mt-3 px-4 py-3 rounded-lg text-sm flex items-center justify-between animate-fade-in {}",
                                    if notice.retryable { "banner-error" } else { "banner-denied" }
                                )>
                                    <span>
                                        {notice.text.clone()}
                                        {notice.retryable.then_some(" Please try again.")}
                                    </span>
                                    <button
                                        on:click=move |_| error.set(None)
                                        class="ml-4 opacity-70 hover:opacity-100"
                                    >
                                        "✕"
                                    </button>
                                </div>
                            })}
                        </Show>

                        // Toast
                        <Show when=move || toast.get().is_some()>
                            <div class="mx-4 mt-3 px-4 py-2 rounded-lg text-sm bg-emerald-500/10
                                        border border-emerald-500/30 text-emerald-300 animate-fade-in">
                                {move || toast.get().unwrap_or_default()}
                            </div>
                        </Show>

                        // Messages area
                        <div class="flex-1 overflow-y-auto px-4 py-6 space-y-6">
                            <Show when=move || conversation.get().is_empty()>
                                <EmptyState input=input />
                            </Show>

                            {move || {
                                conversation.get().messages.into_iter().map(|msg| view! {
                                    <ChatMessage message=msg />
                                }).collect::<Vec<_>>()
                            }}

                            <Show when=move || is_sending.get()>
                                <TypingIndicator />
                            </Show>

                            // Scroll anchor
                            <div node_ref=messages_end_ref></div>
                        </div>

                        // Input area
                        <ChatInput
                            value=input
                            on_submit=move || send.run(())
                            disabled=is_sending
                        />
                    </main>

                    // History drawer
                    <Show when=move || show_history.get()>
                        <ChatHistory
                            entries=history
                            loading=loading_history
                            deleting=deleting_session
                            on_close=Callback::new(move |_: ()| show_history.set(false))
                            on_select=select_session
                            on_delete=delete_session
                        />
                    </Show>
                </div>
            </div>
        </RequireAuth>
    }
}

/// Empty state shown before the first message
#[component]
fn EmptyState(input: RwSignal<String>) -> impl IntoView {
    let prompts = [
        "Summarize the documents I've uploaded",
        "What are the key findings in my files?",
        "List any action items mentioned in the documents",
    ];

    view! {
        <div class="h-full flex items-center justify-center">
            <div class="text-center max-w-md">
                <div class="text-5xl mb-4">"🪶"</div>
                <h2 class="text-2xl font-bold mb-2 text-gradient">
                    "Hi, I'm your personal knowledge assistant"
                </h2>
                <p class="text-[var(--text-muted)] mb-6">
                    "Upload your documents and start asking questions. I'll analyze them and provide grounded answers."
                </p>
                <div class="space-y-2">
                    {prompts.iter().map(|prompt| {
                        let prompt = *prompt;
                        view! {
                            <button
                                on:click=move |_| input.set(prompt.to_string())
                                class="quick-prompt w-full text-left"
                            >
                                {prompt}
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{UploadResult, UploadSummary};

    fn result(file_name: &str, status: &str, message: Option<&str>) -> UploadResult {
        UploadResult {
            file_name: file_name.to_string(),
            status: status.to_string(),
            message: message.map(str::to_string),
            chunks: None,
        }
    }

    #[test]
    fn test_upload_notice_all_succeeded() {
        let report = UploadReport {
            results: vec![result("a.pdf", "success", None), result("b.txt", "success", None)],
            summary: UploadSummary::default(),
        };
        let notice = upload_notice(&report);
        assert!(notice.contains("2 document(s)"));
        assert!(notice.contains("a.pdf, b.txt"));
    }

    #[test]
    fn test_upload_notice_mixed_results() {
        let report = UploadReport {
            results: vec![
                result("a.pdf", "success", None),
                result("b.txt", "error", Some("No extractable text")),
            ],
            summary: UploadSummary::default(),
        };
        let notice = upload_notice(&report);
        assert!(notice.contains("a.pdf"));
        assert!(notice.contains("b.txt (No extractable text)"));
    }

    #[test]
    fn test_upload_notice_all_failed() {
        let report = UploadReport {
            results: vec![result("a.pdf", "error", None)],
            summary: UploadSummary::default(),
        };
        assert!(upload_notice(&report).starts_with("Document upload failed"));
    }
}
