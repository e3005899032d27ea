pub use admin::*;
pub use course::*;
pub use difficulty::*;
pub use project::*;
pub use track::*;
pub use ui::*;

mod admin;
mod course;
mod difficulty;
mod project;
mod track;
mod ui;
