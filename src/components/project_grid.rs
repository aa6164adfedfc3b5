use leptos::prelude::*;

use super::reveal::reveal_item_style;
use super::{ProjectCard, Reveal};
use crate::catalog::Project;

#[component]
pub fn ProjectGrid(projects: Vec<Project>) -> impl IntoView {
    view! {
        <Reveal amount=0.1 class="project-grid-wrapper">
            <ul class="project-grid">
                {projects
                    .into_iter()
                    .enumerate()
                    .map(|(index, project)| {
                        view! {
                            <li class="reveal-item" style=reveal_item_style(index)>
                                <ProjectCard project=project />
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </Reveal>
    }
}

#[component]
pub fn ProjectGridEmpty() -> impl IntoView {
    view! {
        <div class="project-empty">
            <svg viewBox="0 0 200 200" class="project-empty-art" aria-hidden="true">
                <defs>
                    <linearGradient id="emptyGrad" x1="0%" y1="0%" x2="100%" y2="100%">
                        <stop offset="0%" style="stop-color:#3b82f6;stop-opacity:0.3" />
                        <stop offset="100%" style="stop-color:#8b5cf6;stop-opacity:0.1" />
                    </linearGradient>
                </defs>
                <circle cx="100" cy="100" r="80" fill="none" stroke="#374151" stroke-width="1"/>
                <circle cx="100" cy="100" r="50" fill="none" stroke="#374151" stroke-width="1"/>
                <circle cx="100" cy="100" r="10" fill="url(#emptyGrad)"/>
            </svg>
            <p class="project-empty-text">"No projects in this category yet"</p>
        </div>
    }
}
