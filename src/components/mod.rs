mod filter_bar;
mod project_card;
mod project_grid;
mod projects_section;
mod reveal;

pub use filter_bar::FilterBar;
pub use project_card::ProjectCard;
pub use project_grid::{ProjectGrid, ProjectGridEmpty};
pub use projects_section::ProjectsSection;
pub use reveal::Reveal;
