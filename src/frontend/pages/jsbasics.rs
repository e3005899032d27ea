use leptos::prelude::*;

use crate::catalog;

/// Module list of the JavaScript Basics course. One module is expanded at a time.
#[component]
pub fn JsBasicsPage() -> impl IntoView {
    let modules = catalog::js_modules();
    let expanded = RwSignal::new(Some(0usize));
    let video = modules.first().map(|m| m.video_url);

    view! {
        <section class="py-12 px-6">
            <div class="max-w-4xl mx-auto">
                <h1 class="text-4xl font-bold mb-2">"JavaScript Basics"</h1>
                <p class="text-slate-400 mb-8">"Seven modules from variables to error handling."</p>

                {video.map(|src| view! {
                    <div class="aspect-video rounded-xl overflow-hidden mb-10">
                        <iframe src=src title="JavaScript Basics" class="w-full h-full" allowfullscreen=true></iframe>
                    </div>
                })}

                <ol class="space-y-4">
                    {modules
                        .iter()
                        .enumerate()
                        .map(|(i, module)| view! {
                            <li class="rounded-xl bg-slate-900/50 border border-slate-800">
                                <button
                                    type="button"
                                    class="w-full flex items-center justify-between p-5 text-left"
                                    on:click=move |_| expanded.update(|e| {
                                        *e = if *e == Some(i) { None } else { Some(i) }
                                    })
                                >
                                    <span class="font-semibold text-white">{i + 1}". "{module.title}</span>
                                    <span class="text-xs text-slate-500">{module.duration}</span>
                                </button>
                                <Show when=move || expanded.get() == Some(i)>
                                    <div class="px-5 pb-5">
                                        <p class="text-slate-400 mb-3">{module.description}</p>
                                        <ul class="text-sm text-slate-400 list-disc list-inside mb-4">
                                            {module.topics.iter().map(|t| view! { <li>{*t}</li> }).collect_view()}
                                        </ul>
                                        <a href=module.path class="btn-primary text-sm px-4 py-2">"Open lesson"</a>
                                    </div>
                                </Show>
                            </li>
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
