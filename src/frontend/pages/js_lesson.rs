use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::catalog;
use crate::frontend::pages::NotFound;
use crate::models::{Lesson, LessonExercise, LessonTab};

#[component]
pub fn JsLessonPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("lesson").unwrap_or_default();

    move || match catalog::js_lesson(&slug()) {
        Ok(lesson) => view! { <LessonView lesson/> }.into_any(),
        Err(_) => view! { <NotFound/> }.into_any(),
    }
}

#[component]
fn LessonView(lesson: &'static Lesson) -> impl IntoView {
    let tab = RwSignal::new(LessonTab::default());
    let (prev, next) = catalog::js_neighbours(lesson.slug);

    view! {
        <section class="py-12 px-6">
            <div class="max-w-4xl mx-auto">
                <a href="/courses/javascript/jsbasics" class="text-sm text-slate-500 hover:text-white">"← JavaScript Basics"</a>
                <h1 class="text-4xl font-bold mt-2 mb-4">{lesson.title}</h1>
                <p class="text-slate-400 mb-8">{lesson.intro}</p>

                <div class="flex gap-2 border-b border-slate-800 mb-8" role="tablist">
                    {LessonTab::ALL
                        .iter()
                        .map(|t| {
                            let t = *t;
                            view! {
                                <button
                                    type="button"
                                    role="tab"
                                    class="px-4 py-2 -mb-px border-b-2 border-transparent text-slate-400"
                                    class:border-sky-500=move || tab.get() == t
                                    class:text-white=move || tab.get() == t
                                    on:click=move |_| tab.set(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                {move || match tab.get() {
                    LessonTab::Learn => lesson
                        .samples
                        .iter()
                        .map(|sample| view! {
                            <div class="mb-8">
                                <h3 class="text-lg font-semibold text-white mb-2">{sample.title}</h3>
                                <pre class="rounded-lg bg-slate-900 p-4 overflow-x-auto text-sm"><code>{sample.code}</code></pre>
                            </div>
                        })
                        .collect_view()
                        .into_any(),
                    LessonTab::Practice => lesson
                        .exercises
                        .iter()
                        .map(|exercise| view! { <ExerciseCard exercise/> })
                        .collect_view()
                        .into_any(),
                }}

                <div class="flex justify-between mt-12">
                    {prev.map(|m| view! { <a href=m.path class="btn-ghost">"← "{m.title}</a> })}
                    <span></span>
                    {next.map(|m| view! { <a href=m.path class="btn-primary">{m.title}" →"</a> })}
                </div>
            </div>
        </section>
    }
}

/// Exercise prompt with a starter template. The hint and the solution stay
/// hidden until asked for.
#[component]
fn ExerciseCard(exercise: &'static LessonExercise) -> impl IntoView {
    let show_hint = RwSignal::new(false);
    let show_solution = RwSignal::new(false);

    view! {
        <div class="mb-8 rounded-xl p-6 bg-slate-900/50 border border-slate-800">
            <h3 class="text-lg font-semibold text-white mb-2">{exercise.title}</h3>
            <p class="text-slate-400 mb-4">{exercise.prompt}</p>
            <pre class="rounded-lg bg-slate-900 p-4 overflow-x-auto text-sm mb-4"><code>{exercise.template}</code></pre>

            <div class="flex gap-3 mb-4">
                <button type="button" class="btn-ghost text-sm px-3 py-1" on:click=move |_| show_hint.update(|v| *v = !*v)>
                    {move || if show_hint.get() { "Hide hint" } else { "Show hint" }}
                </button>
                <button type="button" class="btn-ghost text-sm px-3 py-1" on:click=move |_| show_solution.update(|v| *v = !*v)>
                    {move || if show_solution.get() { "Hide solution" } else { "Show solution" }}
                </button>
            </div>

            <Show when=move || show_hint.get()>
                <p class="text-sm text-amber-300 mb-4">"💡 "{exercise.hint}</p>
            </Show>
            <Show when=move || show_solution.get()>
                <pre class="rounded-lg bg-emerald-950/40 p-4 overflow-x-auto text-sm"><code>{exercise.solution}</code></pre>
            </Show>
        </div>
    }
}
