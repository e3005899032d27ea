use leptos::prelude::*;

use crate::frontend::hooks::{use_data_loading, use_navigation};

#[component]
pub fn Nav() -> impl IntoView {
    let routing = use_data_loading(use_navigation().state);

    view! {
        <nav class="fixed top-0 left-0 right-0 z-40 backdrop-blur-md bg-slate-950/80 border-b border-slate-800">
            <div
                class="h-0.5 bg-gradient-to-r from-sky-400 to-indigo-500 transition-all duration-300"
                class:w-full=move || routing.get()
                class:w-0=move || !routing.get()
            ></div>
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <a href="/" class="flex items-center gap-3 group">
                    <span class="text-3xl">"🎓"</span>
                    <span class="text-xl font-bold bg-gradient-to-r from-sky-400 to-indigo-400 bg-clip-text text-transparent">
                        "CS Courses"
                    </span>
                </a>
                <div class="flex items-center gap-6">
                    <a href="/courses" class="text-slate-400 hover:text-white transition-colors">"Courses"</a>
                    <a href="/projects" class="text-slate-400 hover:text-white transition-colors">"Projects"</a>
                    <a href="/admin" rel="external" class="btn-ghost text-sm px-4 py-2">"Admin"</a>
                </div>
            </div>
        </nav>
    }
}
