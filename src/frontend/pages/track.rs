use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::catalog;
use crate::frontend::pages::NotFound;
use crate::models::{Carousel, Course, Track};

#[component]
pub fn TrackPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("track").unwrap_or_default();

    move || match catalog::course_by_slug(&slug()) {
        Ok(course) => view! { <TrackView course/> }.into_any(),
        Err(_) => view! { <NotFound/> }.into_any(),
    }
}

/// Where the "Start learning" button of a track leads
fn start_path(track: Track) -> String {
    match track {
        Track::JavaScript => "/courses/javascript/jsbasics".to_string(),
        Track::Python => catalog::python_lessons()
            .first()
            .map(|l| format!("/courses/python/{}", l.id))
            .unwrap_or_else(|| track.path()),
        Track::Java | Track::Cpp => "/projects".to_string(),
    }
}

#[component]
fn TrackView(course: &'static Course) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(course.slides.len()));

    if !course.slides.is_empty() {
        if let Ok(handle) =
            set_interval_with_handle(move || carousel.update(Carousel::tick), Carousel::AUTO_ADVANCE)
        {
            on_cleanup(move || handle.clear());
        }
    }

    let hero = move || {
        let state = carousel.get();
        match course.slides.get(state.current()) {
            Some(slide) => view! {
                <div class="relative h-80 rounded-xl overflow-hidden">
                    <img src=slide.image alt=slide.title class="w-full h-full object-cover"/>
                    <div class="absolute inset-0 bg-gradient-to-t from-slate-950 to-transparent flex flex-col justify-end p-8">
                        <h2 class="text-3xl font-bold text-white">{slide.title}</h2>
                        <p class="text-slate-300">{slide.description}</p>
                    </div>
                </div>
            }
            .into_any(),
            None => view! {
                <div class="rounded-xl p-12 bg-slate-900/50 border border-slate-800">
                    <h2 class="text-3xl font-bold text-white">{course.title}</h2>
                    <p class="text-slate-300">{course.tagline}</p>
                </div>
            }
            .into_any(),
        }
    };

    let controls = (course.slides.len() > 1).then(|| {
        view! {
            <div class="flex items-center justify-center gap-3 mt-4">
                <button type="button" class="btn-ghost px-3 py-1" on:click=move |_| carousel.update(Carousel::prev)>"‹"</button>
                {(0..course.slides.len())
                    .map(|i| view! {
                        <button
                            type="button"
                            aria-label=format!("Slide {}", i + 1)
                            class="w-3 h-3 rounded-full bg-slate-600"
                            class:bg-white=move || carousel.get().current() == i
                            on:click=move |_| carousel.update(|c| c.go_to(i))
                        ></button>
                    })
                    .collect_view()}
                <button type="button" class="btn-ghost px-3 py-1" on:click=move |_| carousel.update(Carousel::next)>"›"</button>
                <button type="button" class="btn-ghost px-3 py-1" on:click=move |_| carousel.update(Carousel::toggle_playing)>
                    {move || if carousel.get().is_playing() { "Pause" } else { "Play" }}
                </button>
            </div>
        }
    });

    view! {
        <section class="py-12 px-6">
            <div class="max-w-6xl mx-auto">
                {hero}
                {controls}

                <div class="flex items-center justify-between mt-12 mb-6">
                    <h1 class="text-3xl font-bold">{course.title}" Curriculum"</h1>
                    <a href=start_path(course.track) class="btn-primary">"Start learning"</a>
                </div>

                <div class="grid md:grid-cols-2 gap-6">
                    {course
                        .units
                        .iter()
                        .map(|unit| view! {
                            <div class="rounded-xl p-6 bg-slate-900/50 border border-slate-800">
                                <div class="flex items-center justify-between mb-3">
                                    <h3 class="text-lg font-semibold text-white">{unit.icon}" "{unit.title}</h3>
                                    <span class="text-xs text-slate-500">{unit.duration}</span>
                                </div>
                                <ul class="text-sm text-slate-400 list-disc list-inside">
                                    {unit.topics.iter().map(|t| view! { <li>{*t}</li> }).collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                </div>

                {(course.track == Track::Python).then(|| view! {
                    <a href="/courses/python/projects" class="btn-ghost mt-8 inline-block">"Python projects →"</a>
                })}
            </div>
        </section>
    }
}
