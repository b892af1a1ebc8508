use colored::{Color, Colorize};
use std::fmt::Display;

/// Colours for each part of a result line; a pass-through when disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn count(&self, text: impl Display) -> String {
        self.paint(text, Color::Yellow)
    }

    pub fn name(&self, text: impl Display) -> String {
        self.paint(text, Color::Green)
    }

    pub fn date(&self, text: impl Display) -> String {
        self.paint(text, Color::Magenta)
    }

    pub fn path(&self, text: impl Display) -> String {
        self.paint(text, Color::Cyan)
    }

    pub fn header(&self, text: impl Display) -> String {
        if self.enabled {
            text.to_string().color(Color::Blue).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint(&self, text: impl Display, color: Color) -> String {
        if self.enabled {
            text.to_string().color(color).to_string()
        } else {
            text.to_string()
        }
    }
}
