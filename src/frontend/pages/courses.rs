use leptos::prelude::*;

use crate::catalog;
use crate::frontend::components::CourseCard;

#[component]
pub fn CoursesPage() -> impl IntoView {
    view! {
        <section class="py-12 px-6">
            <div class="max-w-6xl mx-auto">
                <h1 class="text-4xl font-bold mb-2">"Courses"</h1>
                <p class="text-slate-400 mb-10">"Choose a track to see its curriculum."</p>
                <div class="grid md:grid-cols-2 gap-6">
                    {catalog::courses()
                        .iter()
                        .map(|course| view! { <CourseCard course/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
