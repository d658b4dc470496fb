//! Reusable UI components
//!
//! Class names match the global stylesheet rendered by the desktop app.

mod button;
mod input;
mod section_header;

pub use button::*;
pub use input::*;
pub use section_header::*;
