//! Portfolio UI Components
//!
//! Small Dioxus building blocks shared by the portfolio page sections.
//!
//! ## Palette
//!
//! - **Teal (#14b8a6)**: primary accent, links, success
//! - **Slate (#64748b)**: secondary text
//! - **Red (#ef4444)**: errors

pub mod components;

pub use components::*;
