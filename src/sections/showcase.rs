//! About, projects and skills sections.
//!
//! Every card here is a fade-in candidate; its class comes from the reveal
//! tracker.

use dioxus::prelude::*;
use portfolio_ui::SectionHeader;

use crate::content::{project_key, skill_key, ABOUT_KEY, PROJECTS, SKILLS};
use crate::context::use_page;

#[component]
pub fn About() -> Element {
    let page = use_page();
    let class = page.read().reveal().class_for(ABOUT_KEY);

    rsx! {
        section { id: "about", class: "about",
            SectionHeader {
                title: "About Me".to_string(),
                subtitle: "Designer by training, problem solver by habit".to_string(),
            }
            div { id: ABOUT_KEY, class: "about-content {class}",
                p {
                    "I am a UI/UX designer who enjoys untangling complicated flows. "
                    "My work starts with listening to people and ends with interfaces "
                    "that feel obvious in hindsight."
                }
                p {
                    "When I am not sketching wireframes I am usually prototyping in code, "
                    "learning a new tool, or reading about cognitive psychology."
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let page = use_page();
    let classes: Vec<&'static str> = {
        let page = page.read();
        (0..PROJECTS.len())
            .map(|i| page.reveal().class_for(&project_key(i)))
            .collect()
    };

    rsx! {
        section { id: "projects", class: "projects",
            SectionHeader { title: "Featured Projects".to_string() }
            div { class: "projects-grid",
                for (index, (project, class)) in PROJECTS.iter().zip(classes).enumerate() {
                    div {
                        key: "{index}",
                        id: project_key(index),
                        class: "project-card {class}",
                        div { class: "project-icon",
                            i { class: "fas {project.icon}" }
                        }
                        h3 { "{project.title}" }
                        p { "{project.description}" }
                        div { class: "project-tags",
                            for tag in project.tags.iter() {
                                span { class: "tag", "{tag}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Stagger applied to each skill card's entrance animation.
pub fn skill_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * 0.1)
}

#[component]
pub fn Skills() -> Element {
    let page = use_page();
    let classes: Vec<&'static str> = {
        let page = page.read();
        (0..SKILLS.len())
            .map(|i| page.reveal().class_for(&skill_key(i)))
            .collect()
    };

    rsx! {
        section { id: "skills", class: "skills",
            SectionHeader { title: "Skills & Expertise".to_string() }
            div { class: "skills-grid",
                for (index, (skill, class)) in SKILLS.iter().zip(classes).enumerate() {
                    div {
                        key: "{index}",
                        id: skill_key(index),
                        class: "skill-card {class}",
                        style: format!("animation-delay: {};", skill_delay(index)),
                        i { class: "fas {skill.icon}" }
                        h3 { "{skill.name}" }
                        p { "{skill.description}" }
                    }
                }
            }
        }
    }
}
