//! Static page content: navigation, projects, skills.

use portfolio_core::NavLink;

/// Navigation entries in menu order.
pub fn nav_links() -> Vec<NavLink> {
    [
        ("Home", "home"),
        ("About", "about"),
        ("Projects", "projects"),
        ("Skills", "skills"),
        ("Contact", "contact"),
    ]
    .into_iter()
    .map(|(label, id)| NavLink::new(label, id))
    .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub icon: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Food Delivery App Redesign",
        description: "End-to-end redesign of a mobile ordering flow, cutting checkout steps from seven to three.",
        tags: &["UX Research", "Figma", "Prototyping"],
        icon: "fa-mobile-alt",
    },
    Project {
        title: "Banking Dashboard",
        description: "A calm, data-dense dashboard for personal finances with accessible charts.",
        tags: &["UI Design", "Design System"],
        icon: "fa-chart-line",
    },
    Project {
        title: "Travel Companion",
        description: "Trip planning experience built around offline itineraries and shared notes.",
        tags: &["Wireframing", "User Testing"],
        icon: "fa-plane",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "UI Design",
        description: "Layouts, typography and color systems that scale.",
        icon: "fa-palette",
    },
    Skill {
        name: "UX Research",
        description: "Interviews, usability studies and journey mapping.",
        icon: "fa-search",
    },
    Skill {
        name: "Prototyping",
        description: "Interactive prototypes in Figma and code.",
        icon: "fa-pencil-ruler",
    },
    Skill {
        name: "Front-end",
        description: "HTML, CSS and just enough scripting to ship.",
        icon: "fa-code",
    },
];

/// Number of decorative shapes floating behind the hero.
pub const FLOATING_SHAPES: usize = 4;

pub const ABOUT_KEY: &str = "about-content";
pub const CONTACT_KEY: &str = "contact-content";

pub fn project_key(index: usize) -> String {
    format!("project-card-{}", index)
}

pub fn skill_key(index: usize) -> String {
    format!("skill-card-{}", index)
}

/// Ids of every fade-in candidate on the page, in document order.
pub fn reveal_keys() -> Vec<String> {
    let mut keys = vec![ABOUT_KEY.to_string()];
    keys.extend((0..PROJECTS.len()).map(project_key));
    keys.extend((0..SKILLS.len()).map(skill_key));
    keys.push(CONTACT_KEY.to_string());
    keys
}
