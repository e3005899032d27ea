//! Browser client. Pages read the compiled-in catalog directly; only the
//! download form and the admin area go back to the server.

pub mod components;
pub mod hooks;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use components::{Footer, LoadingOverlay, Nav};
use hooks::{provide_navigation, use_initial_loading, use_page_loading};
use pages::*;

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (is_routing, set_is_routing) = signal(false);
    let nav = provide_navigation(is_routing);
    let page_loading = use_page_loading(nav.state);
    let initial_loading = use_initial_loading();
    let overlay = Signal::derive(move || page_loading.get() || initial_loading.get());

    view! {
        <Stylesheet id="app" href="/static/app.css"/>
        <Title text="CS Courses - Learn by Building"/>
        <Meta name="description" content="Courses in JavaScript, Python, Java and C++ with hands-on projects"/>

        <Router set_is_routing>
            <LoadingOverlay visible=overlay/>
            <Nav/>
            <main class="pt-20 min-h-screen">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/courses") view=CoursesPage/>
                    <Route path=path!("/courses/javascript/jsbasics") view=JsBasicsPage/>
                    <Route path=path!("/courses/javascript/jsbasics/:lesson") view=JsLessonPage/>
                    <Route path=path!("/courses/python/projects") view=PythonProjectsPage/>
                    <Route path=path!("/courses/python/:lesson_id") view=PythonLessonPage/>
                    <Route path=path!("/courses/:track") view=TrackPage/>
                    <Route path=path!("/projects") view=ProjectsPage/>
                    <Route path=path!("/projects/:catalog") view=ProjectCatalogPage/>
                    <Route path=path!("/projects/:catalog/:id") view=ProjectDetailPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
