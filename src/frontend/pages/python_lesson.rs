use std::collections::HashMap;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::catalog;
use crate::frontend::pages::NotFound;
use crate::models::{PythonLesson, PythonLessonTab, QuizQuestion};

#[component]
pub fn PythonLessonPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("lesson_id").unwrap_or_default();

    move || match catalog::python_lesson(&id()) {
        Ok(lesson) => view! { <PythonLessonView lesson/> }.into_any(),
        Err(_) => view! { <NotFound/> }.into_any(),
    }
}

/// Correct answers among the chosen ones. Unanswered questions count as wrong.
pub fn quiz_score(questions: &[QuizQuestion], answers: &HashMap<u32, usize>) -> usize {
    questions
        .iter()
        .filter(|q| answers.get(&q.id).is_some_and(|a| q.is_correct(*a)))
        .count()
}

#[component]
fn PythonLessonView(lesson: &'static PythonLesson) -> impl IntoView {
    let tab = RwSignal::new(PythonLessonTab::default());

    view! {
        <section class="py-12 px-6">
            <div class="max-w-4xl mx-auto">
                <div class="flex gap-3 mb-6 text-sm">
                    {catalog::python_lessons()
                        .iter()
                        .map(|l| view! {
                            <a
                                href=format!("/courses/python/{}", l.id)
                                class="text-slate-500 hover:text-white"
                                class:text-sky-400={l.id == lesson.id}
                            >
                                {l.title}
                            </a>
                        })
                        .collect_view()}
                    <a href="/courses/python/projects" class="ml-auto text-slate-500 hover:text-white">"Projects →"</a>
                </div>

                <h1 class="text-4xl font-bold mb-6">{lesson.title}</h1>

                <div class="flex gap-2 border-b border-slate-800 mb-8" role="tablist">
                    {PythonLessonTab::ALL
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
                    PythonLessonTab::Content => view! {
                        <div class="prose prose-invert max-w-none">
                            {lesson
                                .content
                                .split("\n\n")
                                .map(str::trim)
                                .filter(|p| !p.is_empty())
                                .map(|p| view! { <p class="mb-4 text-slate-300 whitespace-pre-line">{p}</p> })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                    PythonLessonTab::Video => view! {
                        <div class="aspect-video rounded-xl overflow-hidden">
                            <iframe src=lesson.video_url title=lesson.title class="w-full h-full" allowfullscreen=true></iframe>
                        </div>
                    }
                    .into_any(),
                    PythonLessonTab::Exercises => view! { <Quiz questions=lesson.questions/> }.into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn Quiz(questions: &'static [QuizQuestion]) -> impl IntoView {
    let answers = RwSignal::new(HashMap::<u32, usize>::new());
    let submitted = RwSignal::new(false);

    view! {
        <div class="space-y-6">
            {questions
                .iter()
                .map(|q| view! {
                    <fieldset class="rounded-xl p-6 bg-slate-900/50 border border-slate-800">
                        <legend class="font-semibold text-white mb-3">{q.question}</legend>
                        {q.options
                            .iter()
                            .enumerate()
                            .map(|(i, option)| view! {
                                <label class="flex items-center gap-2 py-1 text-slate-300">
                                    <input
                                        type="radio"
                                        name=format!("question-{}", q.id)
                                        prop:checked=move || answers.with(|a| a.get(&q.id) == Some(&i))
                                        prop:disabled=move || submitted.get()
                                        on:change=move |_| answers.update(|a| {
                                            a.insert(q.id, i);
                                        })
                                    />
                                    {*option}
                                    <Show when=move || submitted.get() && q.is_correct(i)>
                                        <span class="text-emerald-400">"✓"</span>
                                    </Show>
                                </label>
                            })
                            .collect_view()}
                    </fieldset>
                })
                .collect_view()}

            {move || if submitted.get() {
                let score = answers.with(|a| quiz_score(questions, a));
                view! {
                    <div class="flex items-center gap-4">
                        <p class="text-lg text-white">{format!("You scored {} of {}", score, questions.len())}</p>
                        <button
                            type="button"
                            class="btn-ghost"
                            on:click=move |_| {
                                answers.set(HashMap::new());
                                submitted.set(false);
                            }
                        >
                            "Try again"
                        </button>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <button
                        type="button"
                        class="btn-primary"
                        disabled=move || answers.with(|a| a.len() < questions.len())
                        on:click=move |_| submitted.set(true)
                    >
                        "Check answers"
                    </button>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_score_counts_correct_answers_only() {
        let questions = catalog::python_lesson("python-basics").unwrap().questions;
        let first = &questions[0];
        let right = (0..first.options.len()).find(|i| first.is_correct(*i)).unwrap();
        let wrong = (0..first.options.len()).find(|i| !first.is_correct(*i)).unwrap();

        assert_eq!(quiz_score(questions, &HashMap::new()), 0);
        assert_eq!(quiz_score(questions, &HashMap::from([(first.id, right)])), 1);
        assert_eq!(quiz_score(questions, &HashMap::from([(first.id, wrong)])), 0);
    }
}
