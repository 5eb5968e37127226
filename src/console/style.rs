// Terminal styling
// Purely cosmetic: with color off (or the `color` feature disabled) text passes through unchanged.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Heading,
}

#[cfg(feature = "color")]
pub fn paint(text: &str, tone: Tone, enabled: bool) -> String {
    use crossterm::style::{Attribute, Color, Stylize};

    if !enabled {
        return text.to_string();
    }

    match tone {
        Tone::Success => text.with(Color::Green).to_string(),
        Tone::Warning => text.with(Color::Yellow).to_string(),
        Tone::Heading => text.attribute(Attribute::Bold).to_string(),
    }
}

#[cfg(not(feature = "color"))]
pub fn paint(text: &str, _tone: Tone, _enabled: bool) -> String {
    text.to_string()
}
