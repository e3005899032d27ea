use leptos::prelude::*;

use crate::models::Course;

#[component]
pub fn CourseCard(course: &'static Course) -> impl IntoView {
    view! {
        <a
            href=course.track.path()
            class="group block rounded-xl overflow-hidden bg-slate-900/50 border border-slate-800
                   hover:border-sky-500/50 hover:bg-slate-800/50
                   transition-all duration-300 hover:-translate-y-1"
        >
            <img src=course.image alt=course.title class="w-full h-40 object-cover"/>
            <div class="p-6">
                <h3 class="text-xl font-semibold text-white mb-2">{course.title}</h3>
                <p class="text-slate-400 text-sm leading-relaxed">{course.tagline}</p>
            </div>
        </a>
    }
}
