//! Page sections, top to bottom.

mod chrome;
mod contact;
mod hero;
mod navbar;
mod showcase;

pub use chrome::{root_class, Footer, ScrollTopButton, Toast};
pub use contact::Contact;
pub use hero::Hero;
pub use navbar::Navbar;
pub use showcase::{About, Projects, Skills};
