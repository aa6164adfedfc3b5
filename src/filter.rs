use crate::catalog::{Category, Project};

/// The category selection governing which projects are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(Category),
    /// A value that names no known category; it matches nothing.
    Unmatched(String),
}

impl Filter {
    pub const ALL_VALUE: &'static str = "all";

    /// Interpret a filter button value. Any string is accepted.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            return Filter::All;
        }
        value
            .parse::<Category>()
            .map_or_else(|_| Filter::Unmatched(value.to_string()), Filter::Category)
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Filter::All => Self::ALL_VALUE,
            Filter::Category(category) => category.value(),
            Filter::Unmatched(value) => value,
        }
    }

    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(category) => project.category == *category,
            Filter::Unmatched(_) => false,
        }
    }
}

/// Projects passing `filter`, in catalog order.
#[must_use]
pub fn visible_projects(catalog: &[Project], filter: &Filter) -> Vec<Project> {
    catalog
        .iter()
        .filter(|project| filter.matches(project))
        .copied()
        .collect()
}

/// A selectable filter button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub filter: Filter,
    pub label: &'static str,
}

impl FilterOption {
    #[must_use]
    pub fn is_active(&self, current: &Filter) -> bool {
        self.filter == *current
    }
}

/// The fixed set of filter buttons: the catch-all first, then each category.
#[must_use]
pub fn filter_options() -> Vec<FilterOption> {
    std::iter::once(FilterOption {
        filter: Filter::All,
        label: "All Projects",
    })
    .chain(Category::ALL.into_iter().map(|category| FilterOption {
        filter: Filter::Category(category),
        label: category.label(),
    }))
    .collect()
}
