use leptos::prelude::*;

use crate::catalog::Project;

/// Inline background for the preview area. An empty reference leaves the
/// area blank.
fn image_style(image: &str) -> Option<String> {
    if image.is_empty() {
        None
    } else {
        Some(format!("background-image: url('{image}')"))
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        technologies,
        image,
        github_url,
        live_url,
        date,
        ..
    } = project;

    view! {
        <article class="project-card">
            <div class="project-image" style=image_style(image)></div>
            <div class="project-header">
                <h3 class="project-title">{title}</h3>
                <p class="project-description">
                    <span class="project-date">{date}</span>
                    " • "
                    {description}
                </p>
            </div>
            <ul class="project-tags">
                {technologies
                    .iter()
                    .map(|tech| view! { <li class="project-tag">{*tech}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            <div class="project-links">
                <a
                    class="project-link project-link--code"
                    href=github_url
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <GithubIcon />
                    "Code"
                </a>
                <a
                    class="project-link project-link--live"
                    href=live_url
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <ExternalLinkIcon />
                    "Live Demo"
                </a>
            </div>
        </article>
    }
}

#[component]
fn GithubIcon() -> impl IntoView {
    view! {
        <svg class="project-link__icon" xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>
            <path d="M9 18c-4.51 2-5-2-7-2"/>
        </svg>
    }
}

#[component]
fn ExternalLinkIcon() -> impl IntoView {
    view! {
        <svg class="project-link__icon" xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M15 3h6v6"/>
            <path d="M10 14 21 3"/>
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_style_wraps_path() {
        assert_eq!(
            image_style("/images/plant.jpg").as_deref(),
            Some("background-image: url('/images/plant.jpg')")
        );
    }

    #[test]
    fn empty_image_has_no_style() {
        assert_eq!(image_style(""), None);
    }
}
