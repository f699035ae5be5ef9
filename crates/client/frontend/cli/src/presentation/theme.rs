//! Terminal colors for markup.

use client_frontend_core::Tone;
use crossterm::style::{Attribute, Color, ContentStyle};

/// Styling rules for the terminal screens.
#[derive(Debug, Default, Clone, Copy)]
pub struct Theme;

impl Theme {
    pub fn title(&self) -> ContentStyle {
        emphasized(Color::Yellow)
    }

    pub fn line(&self, tone: Tone) -> ContentStyle {
        match tone {
            Tone::Plain => ContentStyle::default(),
            Tone::Good => colored(Color::Green),
            Tone::Bad => colored(Color::Red),
        }
    }

    pub fn control_number(&self) -> ContentStyle {
        emphasized(Color::Cyan)
    }

    pub fn hint(&self) -> ContentStyle {
        colored(Color::DarkGrey)
    }
}

fn colored(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        ..ContentStyle::default()
    }
}

fn emphasized(color: Color) -> ContentStyle {
    ContentStyle {
        attributes: Attribute::Bold.into(),
        ..colored(color)
    }
}
