use leptos::prelude::*;

use crate::catalog;
use crate::common::DownloadRejection;
use crate::frontend::components::{Button, ButtonVariant, ErrorAlert};
use crate::frontend::hooks::{use_action_loading, use_navigation};
use crate::models::{DownloadModal, ProjectCatalog};
use crate::services::MAX_DOWNLOADS;

pub const DOWNLOAD_FORM_ID: &str = "download";

/// Authorization-code dialog. The form posts to the server, which answers
/// with the source or sends the browser back here with an error.
#[component]
pub fn DownloadDialog(
    catalog: ProjectCatalog,
    modal: RwSignal<DownloadModal>,
    #[prop(into)] error: Signal<Option<DownloadRejection>>,
) -> impl IntoView {
    let nav = use_navigation();
    let submitting = use_action_loading(nav.state, Some(DOWNLOAD_FORM_ID));

    move || {
        let project = modal
            .get()
            .project_id()
            .and_then(|id| catalog::project(catalog, id).ok())?;

        Some(view! {
            <div class="fixed inset-0 z-40 flex items-center justify-center bg-black/60 px-6">
                <div class="w-full max-w-md rounded-xl bg-slate-900 border border-slate-700 p-6" role="dialog">
                    <h2 class="text-xl font-semibold text-white mb-1">"Download "{project.title}</h2>
                    <p class="text-sm text-slate-400 mb-4">
                        {format!(
                            "Enter the authorization code you were given. Each project can be downloaded {} times.",
                            MAX_DOWNLOADS
                        )}
                    </p>

                    {move || error.get().map(|e| view! { <ErrorAlert message=e.to_string()/> })}

                    <form
                        id=DOWNLOAD_FORM_ID
                        method="post"
                        action=format!("/projects/{}/{}/download", catalog, project.id)
                        on:submit=move |_| nav.submitting.set(Some(DOWNLOAD_FORM_ID.to_string()))
                        class="space-y-4"
                    >
                        <input
                            type="text"
                            name="code"
                            autocomplete="off"
                            placeholder="DAA_SORT_2024"
                            class="w-full px-4 py-3 rounded-lg bg-slate-800 border border-slate-700 text-white font-mono uppercase
                                   focus:outline-none focus:ring-2 focus:ring-sky-500"
                        />
                        <div class="flex justify-end gap-3">
                            <button
                                type="button"
                                class="btn-ghost px-4 py-2"
                                on:click=move |_| modal.set(DownloadModal::Closed)
                            >
                                "Cancel"
                            </button>
                            <Button variant=ButtonVariant::Primary loading=submitting loading_text="Checking...">
                                "Download"
                            </Button>
                        </div>
                    </form>
                </div>
            </div>
        })
    }
}
