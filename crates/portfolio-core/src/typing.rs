//! Character-by-character typing effect for the hero subtitle.
//!
//! Off by default; enabled with `features.typing_effect`.

use std::time::Duration;

use crate::config::TypingConfig;

/// Successive prefixes of a text, one more character each step.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.shown += 1;
        Some(self.chars[..self.shown].iter().collect())
    }
}

/// Clear the subtitle, wait `start_delay`, then type one character per
/// `char_interval`, reporting each frame to `on_frame`.
pub async fn run_typing<F>(text: &str, config: &TypingConfig, mut on_frame: F)
where
    F: FnMut(String),
{
    on_frame(String::new());
    tokio::time::sleep(Duration::from_millis(config.start_delay_ms)).await;

    let interval = Duration::from_millis(config.char_interval_ms);
    let mut frames = Typewriter::new(text).peekable();
    while let Some(frame) = frames.next() {
        on_frame(frame);
        if frames.peek().is_some() {
            tokio::time::sleep(interval).await;
        }
    }
}
