//! Reusable UI components for the CS Courses client

mod alert;
mod button;
mod course_card;
mod download_modal;
mod filters;
mod footer;
mod loading_overlay;
mod nav;
mod project_card;

pub use alert::{Alert, AlertVariant, ErrorAlert};
pub use button::{Button, ButtonVariant};
pub use course_card::CourseCard;
pub use download_modal::{DOWNLOAD_FORM_ID, DownloadDialog};
pub use filters::{SearchInput, SelectFilter};
pub use footer::Footer;
pub use loading_overlay::LoadingOverlay;
pub use nav::Nav;
pub use project_card::ProjectCard;
