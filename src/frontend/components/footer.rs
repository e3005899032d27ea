use leptos::prelude::*;

use crate::models::{ProjectCatalog, Track};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-800 bg-slate-900/50">
            <div class="max-w-6xl mx-auto px-6 py-12 grid gap-8 md:grid-cols-3">
                <div>
                    <p class="text-2xl font-bold mb-2">"🎓 CS Courses"</p>
                    <p class="text-slate-400">"Learn to code by building real projects."</p>
                </div>
                <div>
                    <p class="font-semibold text-white mb-3">"Courses"</p>
                    <ul class="space-y-1 text-sm">
                        {Track::ALL
                            .iter()
                            .map(|t| view! {
                                <li><a href=t.path() class="text-slate-400 hover:text-white">{t.name()}</a></li>
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <p class="font-semibold text-white mb-3">"Projects"</p>
                    <ul class="space-y-1 text-sm">
                        {ProjectCatalog::ALL
                            .iter()
                            .map(|c| view! {
                                <li><a href=c.path() class="text-slate-400 hover:text-white">{c.title()}</a></li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </footer>
    }
}
