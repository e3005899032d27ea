use leptos::prelude::*;

/// Full-screen spinner shown over the page while `visible` holds
#[component]
pub fn LoadingOverlay(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-slate-950/90" aria-busy="true">
                <div class="flex flex-col items-center gap-4">
                    <span class="w-12 h-12 border-4 border-sky-500/30 border-t-sky-500 rounded-full animate-spin"></span>
                    <p class="text-slate-400">"Loading..."</p>
                </div>
            </div>
        </Show>
    }
}
