//! Footer attribution line.

use chrono::Datelike;

use crate::config::Profile;

/// Year used for the copyright notice, taken from the local clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Text on either side of the heart icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterText {
    pub before_heart: String,
    pub after_heart: String,
}

impl FooterText {
    pub fn new(year: i32, profile: &Profile) -> Self {
        Self {
            before_heart: format!("\u{00A9} {} {} | Designed with", year, profile.owner),
            after_heart: format!("using {}.", profile.built_with),
        }
    }

    /// Plain rendering with a heart glyph in place of the icon.
    pub fn plain(&self) -> String {
        format!("{} \u{2665} {}", self.before_heart, self.after_heart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_text() {
        let profile = Profile {
            owner: "Ada".to_string(),
            built_with: "Rust".to_string(),
            ..Profile::default()
        };
        let footer = FooterText::new(2031, &profile);
        assert_eq!(footer.before_heart, "\u{00A9} 2031 Ada | Designed with");
        assert_eq!(footer.plain(), "\u{00A9} 2031 Ada | Designed with \u{2665} using Rust.");
    }

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
