use leptos::prelude::*;

use crate::models::{DownloadPolicy, Project, ProjectCatalog};

#[component]
pub fn ProjectCard(
    catalog: ProjectCatalog,
    project: &'static Project,
    /// Opens the download dialog for a project id
    on_download: Callback<u32>,
) -> impl IntoView {
    let download = match (project.source_url, catalog.download_policy()) {
        (None, _) => None,
        (Some(url), DownloadPolicy::Open) => Some(
            view! {
                <a href=url rel="external" class="btn-primary text-sm px-4 py-2">"Download Source"</a>
            }
            .into_any(),
        ),
        (Some(_), DownloadPolicy::CodeRequired) => Some(
            view! {
                <button
                    type="button"
                    class="btn-primary text-sm px-4 py-2"
                    on:click=move |_| on_download.run(project.id)
                >
                    "Download"
                </button>
            }
            .into_any(),
        ),
    };

    view! {
        <article class="flex flex-col rounded-xl p-6 bg-slate-900/50 border border-slate-800">
            <div class="flex items-start justify-between mb-4">
                <span class="text-4xl">{project.icon}</span>
                <div class="flex gap-2">
                    {project.category.map(|c| view! {
                        <span class="px-2 py-1 rounded text-xs bg-slate-800 text-slate-300">{c}</span>
                    })}
                    <span class=format!("px-2 py-1 rounded text-xs {}", project.difficulty.badge_class())>
                        {project.difficulty.label()}
                    </span>
                </div>
            </div>

            <h3 class="text-xl font-semibold text-white mb-2">{project.title}</h3>
            <p class="text-slate-400 text-sm mb-4">{project.description}</p>

            {project.duration.map(|d| view! { <p class="text-xs text-slate-500 mb-2">"⏱ "{d}</p> })}
            {project.complexity.map(|c| view! {
                <p class="text-xs font-mono text-slate-500 mb-2">
                    "Time: "{c.time}" · Space: "{c.space}
                </p>
            })}

            {(!project.features.is_empty()).then(|| view! {
                <ul class="text-sm text-slate-300 list-disc list-inside mb-4">
                    {project.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                </ul>
            })}

            {(!project.concepts.is_empty()).then(|| view! {
                <p class="text-xs text-slate-500 mb-4">"Concepts: "{project.concepts.join(", ")}</p>
            })}

            <div class="flex flex-wrap gap-2 mb-6">
                {project
                    .technologies
                    .iter()
                    .map(|t| view! {
                        <span class="px-2 py-1 rounded-full text-xs bg-sky-500/10 text-sky-300">{*t}</span>
                    })
                    .collect_view()}
            </div>

            <div class="mt-auto flex items-center gap-3">
                <a href=format!("{}/{}", catalog.path(), project.id) class="btn-ghost text-sm px-4 py-2">
                    "View Project"
                </a>
                {download}
            </div>
        </article>
    }
}
