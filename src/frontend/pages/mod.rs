//! Page components for the CS Courses client

mod courses;
mod js_lesson;
mod jsbasics;
mod landing;
mod not_found;
mod project_detail;
mod projects;
mod python_lesson;
mod track;

pub use courses::CoursesPage;
pub use js_lesson::JsLessonPage;
pub use jsbasics::JsBasicsPage;
pub use landing::LandingPage;
pub use not_found::NotFound;
pub use project_detail::ProjectDetailPage;
pub use projects::{ProjectCatalogPage, ProjectsPage, PythonProjectsPage};
pub use python_lesson::{PythonLessonPage, quiz_score};
pub use track::TrackPage;
