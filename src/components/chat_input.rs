//! Chat input component

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlTextAreaElement;

/// Chat input with auto-resize textarea. The send control is disabled while
/// an ask is in flight so the same action cannot be submitted twice.
#[component]
pub fn ChatInput(
    /// Current input value
    value: RwSignal<String>,
    /// Called when user submits
    on_submit: impl Fn() + 'static + Clone,
    /// Whether input is disabled (ask in flight)
    #[prop(into)]
    disabled: Signal<bool>,
    /// Placeholder text
    #[prop(default = "Ask anything about your documents...")]
    placeholder: &'static str,
) -> impl IntoView {
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    // Auto-resize textarea
    let resize_textarea = move || {
        if let Some(textarea) = textarea_ref.get() {
            let el: &HtmlTextAreaElement = textarea.as_ref();
            let scroll_height = el.scroll_height();
            let new_height = scroll_height.min(200);
            let _ = el.set_attribute("style", &format!("height: {}px; max-height: 200px;", new_height));
        }
    };

    let on_input = move |ev: web_sys::Event| {
        if let Some(textarea) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
        {
            value.set(textarea.value());
            resize_textarea();
        }
    };

    // Enter submits, Shift+Enter inserts a newline
    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                if !value.get().trim().is_empty() && !disabled.get() {
                    on_submit();
                }
            }
        }
    };

    let on_button_click = {
        let on_submit = on_submit.clone();
        move |_| {
            if !value.get().trim().is_empty() && !disabled.get() {
                on_submit();
            }
        }
    };

    view! {
        <div class="flex items-end gap-3 p-4 glass border-t border-[var(--border-default)]">
            <div class="flex-1 relative">
                <textarea
                    node_ref=textarea_ref
                    prop:value=move || value.get()
                    on:input=on_input
                    on:keydown=on_keydown
                    placeholder=placeholder
                    disabled=move || disabled.get()
                    rows="1"
                    class="input w-full resize-none"
                    style="max-height: 200px;"
                ></textarea>
            </div>

            {
                let is_empty = Signal::derive(move || value.get().trim().is_empty());
                view! {
                    <button
                        on:click=on_button_click
                        disabled=move || disabled.get() || is_empty.get()
                        class="btn btn-primary p-3"
                    >
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            class="w-5 h-5"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        >
                            <line x1="22" y1="2" x2="11" y2="13"></line>
                            <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                        </svg>
                    </button>
                }
            }
        </div>
    }
}
