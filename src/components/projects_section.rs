use leptos::prelude::*;

use super::{FilterBar, ProjectGrid, ProjectGridEmpty, Reveal};
use crate::catalog::catalog;
use crate::filter::{visible_projects, Filter};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let (filter, set_filter) = signal(Filter::default());

    let visible = move || filter.with(|current| visible_projects(catalog(), current));

    view! {
        <section id="projects" class="projects-section">
            <Reveal amount=0.2 class="projects-intro">
                <h2 class="projects-heading">
                    "Featured " <span class="projects-heading__accent">"Projects"</span>
                </h2>
                <div class="projects-rule"></div>
                <p class="projects-lede">
                    "Here's a collection of my most notable projects. Each one demonstrates \
                     different skills in data analysis and web development."
                </p>
            </Reveal>

            <FilterBar filter=filter on_filter_change=move |next: Filter| set_filter.set(next) />

            {move || {
                let projects = visible();
                if projects.is_empty() {
                    view! { <ProjectGridEmpty /> }.into_any()
                } else {
                    view! { <ProjectGrid projects=projects /> }.into_any()
                }
            }}
        </section>
    }
}
