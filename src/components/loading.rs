//! Loading indicators

use leptos::prelude::*;

/// Animated loading dots
#[component]
pub fn LoadingDots() -> impl IntoView {
    view! {
        <div class="flex items-center gap-1">
            <span class="w-2 h-2 bg-violet-400 rounded-full dot-bounce-1"></span>
            <span class="w-2 h-2 bg-violet-400 rounded-full dot-bounce-2"></span>
            <span class="w-2 h-2 bg-violet-400 rounded-full dot-bounce-3"></span>
        </div>
    }
}

/// Spinner loading indicator
#[component]
pub fn LoadingSpinner(
    #[prop(default = "w-5 h-5")] size: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=format!("{} animate-spin text-violet-500", size)
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
        >
            <circle
                class="opacity-25"
                cx="12"
                cy="12"
                r="10"
                stroke="currentColor"
                stroke-width="4"
            ></circle>
            <path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            ></path>
        </svg>
    }
}

/// Typing indicator shown while an ask is in flight
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex items-start gap-3 message-appear">
            <div class="w-8 h-8 rounded-full bg-gradient-to-br from-violet-500 to-purple-600 flex items-center justify-center text-white text-sm font-medium shrink-0">
                "🪶"
            </div>
            <div class="px-4 py-3 bg-slate-800 rounded-2xl rounded-tl-sm">
                <LoadingDots />
            </div>
        </div>
    }
}
