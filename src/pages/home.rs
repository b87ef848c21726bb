//! Home/landing page

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::Header;
use crate::state::AppState;

/// Landing page with hero section. Signed-in users go straight to chat.
#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let state_for_redirect = state.clone();
    Effect::new(move |_| {
        if state_for_redirect.token.get().is_some() {
            navigate("/chat", Default::default());
        }
    });

    view! {
        <Title text="Quill — Chat with your documents" />
        <div class="min-h-screen flex flex-col">
            <Header />

            // Hero section
            <section class="flex-1 flex items-center justify-center px-4 py-16">
                <div class="max-w-4xl mx-auto text-center">
                    <div class="mb-8 animate-fade-in">
                        <div class="w-24 h-24 mx-auto rounded-2xl bg-gradient-to-br from-violet-500 via-purple-500 to-pink-600
                                    flex items-center justify-center text-5xl shadow-2xl shadow-violet-500/25">
                            "🪶"
                        </div>
                    </div>

                    <h1 class="text-5xl md:text-7xl font-bold mb-6 animate-slide-up">
                        <span class="text-gradient">"Quill"</span>
                    </h1>

                    <p class="text-xl md:text-2xl text-slate-400 mb-4 animate-slide-up" style="animation-delay: 0.1s">
                        "Your documents, answered"
                    </p>

                    <p class="text-lg text-slate-500 mb-12 max-w-2xl mx-auto animate-slide-up" style="animation-delay: 0.2s">
                        "Upload reports, contracts, and notes, then ask questions in plain language. "
                        "Quill finds the relevant passages and answers with them."
                    </p>

                    // CTA buttons
                    <div class="flex flex-col sm:flex-row gap-4 justify-center animate-slide-up" style="animation-delay: 0.3s">
                        <a href="/signin" class="btn btn-primary px-8 py-4 text-lg">
                            "Sign In"
                        </a>
                        <a href="/signup" class="btn btn-ghost px-8 py-4 text-lg border border-[var(--border-default)]">
                            "Create Account"
                        </a>
                    </div>
                </div>
            </section>

            // Features section
            <section class="py-20 px-4 bg-slate-800/50">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl font-bold text-center mb-12">"How it works"</h2>

                    <div class="grid md:grid-cols-3 gap-8">
                        <FeatureCard
                            icon="📄"
                            title="Upload Documents"
                            description="PDF, Word, and plain-text files become searchable knowledge"
                        />
                        <FeatureCard
                            icon="💬"
                            title="Ask Anything"
                            description="Conversations stay grounded in what your documents actually say"
                        />
                        <FeatureCard
                            icon="🗂"
                            title="Pick Up Where You Left Off"
                            description="Every conversation is saved and can be reopened or cleaned up later"
                        />
                    </div>
                </div>
            </section>

            // Footer
            <footer class="py-8 px-4 border-t border-slate-800 text-center text-slate-500">
                <p>"Built with 🦀 Rust"</p>
            </footer>
        </div>
    }
}

/// Feature card component
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="p-6 bg-slate-800 rounded-xl border border-slate-700 hover:border-slate-600 transition-colors">
            <div class="text-4xl mb-4">{icon}</div>
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            <p class="text-slate-400">{description}</p>
        </div>
    }
}
