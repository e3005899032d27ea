use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::catalog;
use crate::common::DownloadRejection;
use crate::frontend::components::DownloadDialog;
use crate::frontend::pages::NotFound;
use crate::models::{DownloadModal, DownloadPolicy, Project, ProjectCatalog, ProjectDetail};

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();

    move || {
        let found = params.with(|p| {
            let catalog = p.get("catalog")?.parse::<ProjectCatalog>().ok()?;
            let id = p.get("id")?.parse::<u32>().ok()?;
            catalog::project(catalog, id).ok().map(|project| (catalog, project))
        });

        match found {
            Some((catalog, project)) => view! { <ProjectDetailView catalog project/> }.into_any(),
            None => view! { <NotFound/> }.into_any(),
        }
    }
}

#[component]
fn ProjectDetailView(catalog: ProjectCatalog, project: &'static Project) -> impl IntoView {
    let detail = catalog::project_detail(catalog, project.id);
    let modal = RwSignal::new(DownloadModal::Closed);

    let download = match (project.source_url, catalog.download_policy()) {
        (None, _) => None,
        (Some(url), DownloadPolicy::Open) => Some(
            view! {
                <a href=url rel="external" class="btn-primary px-6 py-3">"Download Source Code"</a>
            }
            .into_any(),
        ),
        (Some(_), DownloadPolicy::CodeRequired) => Some(
            view! {
                <button
                    type="button"
                    class="btn-primary px-6 py-3"
                    on:click=move |_| modal.set(DownloadModal::Open { project_id: project.id })
                >
                    "Download Source Code"
                </button>
            }
            .into_any(),
        ),
    };

    view! {
        <section class="py-12 px-6">
            <div class="max-w-4xl mx-auto">
                <a href=catalog.path() class="text-sm text-slate-500 hover:text-white">"← "{catalog.title()}</a>

                <header class="flex items-center gap-4 mt-4 mb-8">
                    <span class="text-5xl">{project.icon}</span>
                    <div>
                        <h1 class="text-4xl font-bold">{project.title}</h1>
                        <div class="flex gap-2 mt-2">
                            <span class=format!("px-2 py-1 rounded text-xs {}", project.difficulty.badge_class())>
                                {project.difficulty.label()}
                            </span>
                            {project.category.map(|c| view! {
                                <span class="px-2 py-1 rounded text-xs bg-slate-800 text-slate-300">{c}</span>
                            })}
                        </div>
                    </div>
                </header>

                <p class="text-lg text-slate-300 mb-4">{project.description}</p>
                {detail.map(|d| view! { <DetailOverview detail=d/> })}

                <div class="grid md:grid-cols-2 gap-8 my-10">
                    <div>
                        <h2 class="text-xl font-semibold mb-3">"Features"</h2>
                        <ul class="list-disc list-inside text-slate-300 space-y-1">
                            {project.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h2 class="text-xl font-semibold mb-3">"Concepts"</h2>
                        <ul class="list-disc list-inside text-slate-300 space-y-1">
                            {project.concepts.iter().map(|c| view! { <li>{*c}</li> }).collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="flex flex-wrap gap-2 mb-10">
                    {project
                        .technologies
                        .iter()
                        .map(|t| view! {
                            <span class="px-3 py-1 rounded-full text-sm bg-sky-500/10 text-sky-300">{*t}</span>
                        })
                        .collect_view()}
                </div>

                {detail.map(|d| view! { <DetailWalkthrough detail=d/> })}

                <div class="mt-10">{download}</div>
            </div>
        </section>

        <DownloadDialog catalog modal error=Signal::derive(|| None::<DownloadRejection>)/>
    }
}

#[component]
fn DetailOverview(detail: &'static ProjectDetail) -> impl IntoView {
    view! {
        <p class="text-slate-400 mb-4">{detail.overview}</p>
        <ul class="text-sm text-slate-400 space-y-1">
            {detail.highlights.iter().map(|h| view! { <li>"• "{*h}</li> }).collect_view()}
        </ul>
    }
}

/// Code excerpts, requirements and build steps
#[component]
fn DetailWalkthrough(detail: &'static ProjectDetail) -> impl IntoView {
    view! {
        {detail
            .implementation
            .iter()
            .map(|sample| view! {
                <div class="mb-8">
                    <h2 class="text-xl font-semibold mb-3">{sample.title}</h2>
                    <pre class="rounded-lg bg-slate-900 p-4 overflow-x-auto text-sm"><code>{sample.code}</code></pre>
                </div>
            })
            .collect_view()}

        {(!detail.requirements.is_empty()).then(|| view! {
            <h2 class="text-xl font-semibold mb-3">"Requirements"</h2>
            <ul class="list-disc list-inside text-slate-300 mb-8">
                {detail.requirements.iter().map(|r| view! { <li>{*r}</li> }).collect_view()}
            </ul>
        })}

        {(!detail.setup.is_empty()).then(|| view! {
            <h2 class="text-xl font-semibold mb-3">"Setup"</h2>
            <ol class="list-decimal list-inside text-slate-300 font-mono text-sm space-y-1">
                {detail.setup.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}
            </ol>
        })}
    }
}
