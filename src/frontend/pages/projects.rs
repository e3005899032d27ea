use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::catalog::{self, ProjectFilter, filter_projects};
use crate::common::DownloadRejection;
use crate::frontend::components::{DownloadDialog, ProjectCard, SearchInput, SelectFilter};
use crate::frontend::pages::NotFound;
use crate::models::{Difficulty, DownloadModal, Project, ProjectCatalog};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <section class="py-12 px-6">
            <div class="max-w-6xl mx-auto">
                <h1 class="text-4xl font-bold mb-2">"Projects"</h1>
                <p class="text-slate-400 mb-10">"Hands-on projects for every track."</p>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {ProjectCatalog::ALL
                        .iter()
                        .map(|c| view! {
                            <a href=c.path() class="block rounded-xl p-6 bg-slate-900/50 border border-slate-800 hover:border-sky-500/50">
                                <h2 class="text-xl font-semibold text-white mb-2">{c.title()}</h2>
                                <p class="text-sm text-slate-400 mb-4">{c.subtitle()}</p>
                                <span class="text-xs text-slate-500">{catalog::projects(*c).len()}" projects"</span>
                            </a>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectCatalogPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("catalog").unwrap_or_default();

    move || match slug().parse::<ProjectCatalog>() {
        Ok(catalog) => view! { <ProjectCatalogView catalog/> }.into_any(),
        Err(_) => view! { <NotFound/> }.into_any(),
    }
}

#[component]
pub fn PythonProjectsPage() -> impl IntoView {
    view! { <ProjectCatalogView catalog=ProjectCatalog::Python/> }
}

/// Searchable project grid of one catalog. `?download=<id>&error=<reason>`
/// reopens the download dialog after the server turned a code down.
#[component]
fn ProjectCatalogView(catalog: ProjectCatalog) -> impl IntoView {
    let query = use_query_map();
    let returned_to = query
        .read_untracked()
        .get("download")
        .and_then(|id| id.parse::<u32>().ok());

    let q = RwSignal::new(String::new());
    let difficulty = RwSignal::new("all".to_string());
    let category = RwSignal::new("all".to_string());
    let modal = RwSignal::new(match returned_to {
        Some(project_id) => DownloadModal::Open { project_id },
        None => DownloadModal::Closed,
    });

    let error = Signal::derive(move || {
        if modal.get().project_id() != returned_to {
            return None;
        }
        query
            .read()
            .get("error")
            .and_then(|e| e.parse::<DownloadRejection>().ok())
    });

    let projects = catalog::projects(catalog);
    let visible = Signal::derive(move || {
        let filter = ProjectFilter {
            q: Some(q.get()),
            difficulty: Some(difficulty.get()),
            category: Some(category.get()),
        };
        filter_projects(projects, &filter)
    });

    let on_download = Callback::new(move |project_id: u32| {
        modal.set(DownloadModal::Open { project_id })
    });

    let controls = catalog.filter_controls();
    let difficulty_options = Difficulty::ALL
        .iter()
        .map(|d| (d.as_str().to_string(), d.label().to_string()))
        .collect::<Vec<_>>();
    let category_options = catalog::project_categories(catalog)
        .into_iter()
        .map(|c| (c.to_string(), c.to_string()))
        .collect::<Vec<_>>();

    view! {
        <section class="py-12 px-6">
            <div class="max-w-6xl mx-auto">
                <h1 class="text-4xl font-bold mb-2">{catalog.title()}</h1>
                <p class="text-slate-400 mb-8">{catalog.subtitle()}</p>

                <div class="flex flex-col md:flex-row gap-4 mb-4">
                    <div class="flex-1">
                        <SearchInput placeholder="Search projects..." value=q/>
                    </div>
                    {controls.difficulty.then(|| view! {
                        <SelectFilter name="difficulty" all_label="All Levels" options=difficulty_options value=difficulty/>
                    })}
                    {controls.category.then(|| view! {
                        <SelectFilter name="category" all_label=controls.category_label options=category_options value=category/>
                    })}
                </div>

                <p class="text-sm text-slate-500 mb-8">
                    {move || format!("Showing {} of {} projects", visible.with(Vec::len), projects.len())}
                </p>

                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=|| view! {
                        <p class="text-center text-slate-400 py-16">"No projects match your filters."</p>
                    }
                >
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=move || visible.get()
                            key=|p: &&'static Project| p.id
                            children=move |project: &'static Project| view! {
                                <ProjectCard catalog project on_download/>
                            }
                        />
                    </div>
                </Show>
            </div>
        </section>

        <DownloadDialog catalog modal error/>
    }
}
