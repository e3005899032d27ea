use leptos::prelude::*;

use crate::catalog;
use crate::frontend::components::CourseCard;
use crate::models::ProjectCatalog;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <section class="pt-16 pb-20 px-6 flex flex-col items-center text-center">
            <h1 class="text-5xl md:text-6xl font-bold mb-6 leading-tight">
                "Learn Computer Science"<br/>
                <span class="bg-gradient-to-r from-sky-400 via-indigo-400 to-sky-500 bg-clip-text text-transparent">
                    "by Building Projects"
                </span>
            </h1>
            <p class="text-xl text-slate-400 max-w-2xl mb-10">
                "Structured courses in JavaScript, Python, Java and C++, with hands-on projects from beginner to advanced."
            </p>
            <div class="flex flex-wrap gap-4 justify-center">
                <a href="/courses" class="btn-primary btn-large">"Browse Courses"</a>
                <a href="/projects" class="btn-ghost btn-large">"Explore Projects"</a>
            </div>
        </section>

        <section id="courses" class="py-16 px-6">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-12">"Popular Courses"</h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {catalog::courses()
                        .iter()
                        .map(|course| view! { <CourseCard course/> })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section id="projects" class="py-16 px-6 bg-slate-900/30">
            <div class="max-w-6xl mx-auto text-center">
                <h2 class="text-3xl font-bold mb-4">"Practice with Real Projects"</h2>
                <p class="text-slate-400 mb-10">"Pick a catalog and start building."</p>
                <div class="flex flex-wrap gap-4 justify-center">
                    {ProjectCatalog::ALL
                        .iter()
                        .map(|c| view! {
                            <a href=c.path() class="btn-ghost">
                                {c.title()}" ("{catalog::projects(*c).len()}")"
                            </a>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
