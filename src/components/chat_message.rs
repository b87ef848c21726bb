//! Chat message component

use leptos::prelude::*;

use crate::markdown::render_markdown;
use crate::types::{Message, MessageKind};

/// Render a single transcript entry.
///
/// User turns are plain text; assistant turns render as markdown; system
/// notices (upload reports and the like) get their own muted style.
#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    match message.kind {
        MessageKind::System => view! {
            <div class="flex justify-center message-appear">
                <div class="max-w-xl px-4 py-2 bg-sky-500/10 border border-sky-500/30 rounded-xl
                            text-sm text-sky-200 text-center">
                    {message.content.clone()}
                </div>
            </div>
        }
        .into_any(),
        kind => {
            let is_user = kind == MessageKind::User;
            view! {
                <div class=format!(
                    "flex items-start gap-3 message-appear {}",
                    if is_user { "flex-row-reverse" } else { "" }
                )>
                    // Avatar
                    <div class=format!(
                        "w-8 h-8 rounded-full flex items-center justify-center text-white text-sm font-medium shrink-0 {}",
                        if is_user {
                            "bg-gradient-to-br from-blue-500 to-cyan-500"
                        } else {
                            "bg-gradient-to-br from-violet-500 to-purple-600"
                        }
                    )>
                        {if is_user { "👤" } else { "🪶" }}
                    </div>

                    // Message bubble
                    <div class=format!(
                        "flex flex-col gap-1 max-w-[80%] {}",
                        if is_user { "items-end" } else { "items-start" }
                    )>
                        <div class=format!(
                            "px-4 py-3 rounded-2xl {}",
                            if is_user {
                                "bg-violet-600 text-white rounded-tr-sm"
                            } else {
                                "bg-slate-800 text-slate-100 rounded-tl-sm"
                            }
                        )>
                            {if is_user {
                                view! {
                                    <div class="whitespace-pre-wrap break-words">
                                        {message.content.clone()}
                                    </div>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <div
                                        class="markdown break-words"
                                        inner_html=render_markdown(&message.content)
                                    ></div>
                                }
                                .into_any()
                            }}
                        </div>

                        // Timestamp
                        <span class="text-xs text-slate-600 mt-1">{message.time_label()}</span>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
