//! The fixed list of portfolio projects shown on the site.

use std::fmt;
use std::str::FromStr;

/// The closed set of categories projects are grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Web,
    Data,
}

impl Category {
    /// Every category, in the order filter buttons are offered.
    pub const ALL: [Category; 2] = [Category::Web, Category::Data];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Data => "data",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Web => "Web Development",
            Category::Data => "Data Analysis",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.value() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A single portfolio entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    /// Site-relative path of the preview image
    pub image: &'static str,
    pub github_url: &'static str,
    /// Live demo link, `#` when there is no deployment
    pub live_url: &'static str,
    pub category: Category,
    pub date: &'static str,
}

static PROJECTS: [Project; 3] = [
    Project {
        id: 1,
        title: "Manika Plant Nursery",
        description: "A cozy plant nursery offering a wide variety of healthy plants, from vibrant flowers to lush indoor greens. Perfect for garden lovers and home decor enthusiasts.",
        technologies: &["ReactJS", "Firebase", "HTML", "CSS"],
        image: "/images/plant.jpg",
        github_url: "https://github.com/RUDHRAPRATAPSINGH/Plant-Nursery.git",
        live_url: "#",
        category: Category::Web,
        date: "Oct 2024 - Nov 2024",
    },
    Project {
        id: 2,
        title: "CryptoCurrency Dashboard",
        description: "Developed an interactive cryptocurrency dashboard using Power BI. Improved data reliability through advanced data transformation techniques and identified critical trends in coin prices, trading volume, and market capitalization using statistical analysis and dynamic visualizations.",
        technologies: &[
            "PowerBI",
            "Data Analysis",
            "Statistical Methods",
            "Data Visualization",
        ],
        image: "/images/dashboard.jpg",
        github_url: "https://github.com/RUDHRAPRATAPSINGH",
        live_url: "#",
        category: Category::Data,
        date: "Mar 2025 - Apr 2025",
    },
    Project {
        id: 3,
        title: "MELODY MUSIC PLYR",
        description: "A custom music player built with HTML, CSS, and JavaScript featuring play/pause controls, track switching, volume adjustment, and a responsive design for smooth audio playback across devices.",
        technologies: &["HTML", "CSS", "JavaScript", "Responsive Design"],
        image: "/images/music.jpg",
        github_url: "https://github.com/RUDHRAPRATAPSINGH/Melody-Music-Player-.git",
        live_url: "#",
        category: Category::Web,
        date: "Mar 2024 - Apr 2024",
    },
];

/// All projects, in display order.
#[must_use]
pub fn catalog() -> &'static [Project] {
    &PROJECTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<u32> = catalog().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn catalog_order_is_stable() {
        let titles: Vec<_> = catalog().iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            vec![
                "Manika Plant Nursery",
                "CryptoCurrency Dashboard",
                "MELODY MUSIC PLYR"
            ]
        );
    }

    #[test]
    fn nursery_description_reads_as_a_sentence() {
        let nursery = catalog().iter().find(|p| p.id == 1).unwrap();
        assert!(nursery.description.starts_with("A cozy plant nursery"));
    }

    #[test]
    fn every_project_has_links_and_tags() {
        for project in catalog() {
            assert!(!project.github_url.is_empty(), "{}", project.title);
            assert!(!project.live_url.is_empty(), "{}", project.title);
            assert!(!project.technologies.is_empty(), "{}", project.title);
        }
    }

    #[test]
    fn category_parses_exact_values_only() {
        assert_eq!("web".parse::<Category>(), Ok(Category::Web));
        assert_eq!("data".parse::<Category>(), Ok(Category::Data));
        assert_eq!(
            "Web".parse::<Category>(),
            Err(UnknownCategory("Web".to_string()))
        );
        assert!("mobile".parse::<Category>().is_err());
    }

    #[test]
    fn category_display_matches_value() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.value());
        }
    }
}
