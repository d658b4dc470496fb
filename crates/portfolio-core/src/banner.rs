//! Startup banner written to the log.

use crate::config::Profile;

pub fn banner_lines(profile: &Profile) -> [String; 3] {
    [
        " Welcome to My Portfolio! ".to_string(),
        format!(" Designed and Developed by {} ", profile.owner),
        format!(" {} ", profile.tagline),
    ]
}

pub fn log_banner(profile: &Profile) {
    for line in banner_lines(profile) {
        tracing::info!(target: "portfolio::banner", "{}", line);
    }
}
