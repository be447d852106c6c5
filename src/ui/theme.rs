use crate::config::Config;
use ratatui::style::Color;
use tracing::warn;

pub const THEME_NAMES: [&str; 3] = ["default", "dark", "light"];

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub title: Color,
    pub placeholder: Color,
    pub done: Color,
    pub checkbox: Color,
    pub hover_bg: Color,
    pub action_done: Color,
    pub action_undo: Color,
    pub action_delete: Color,
    pub empty_state: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub status_message_bg: Color,
    pub error_message_bg: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            title: Color::Magenta,
            placeholder: Color::DarkGray,
            done: Color::DarkGray,
            checkbox: Color::Cyan,
            hover_bg: Color::Rgb(50, 50, 60),
            action_done: Color::Green,
            action_undo: Color::Yellow,
            action_delete: Color::Red,
            empty_state: Color::Rgb(100, 150, 255),
            status_bar_bg: Color::Rgb(40, 40, 40),
            status_bar_fg: Color::White,
            status_message_bg: Color::Rgb(0, 100, 0),
            error_message_bg: Color::Rgb(150, 30, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            hover_bg: Color::Rgb(35, 35, 45),
            ..Self::default_theme()
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            title: Color::Rgb(120, 40, 140),
            placeholder: Color::Gray,
            done: Color::Gray,
            checkbox: Color::Blue,
            hover_bg: Color::Rgb(220, 225, 240),
            action_done: Color::Rgb(0, 130, 0),
            action_undo: Color::Rgb(180, 130, 0),
            action_delete: Color::Rgb(200, 50, 50),
            empty_state: Color::Rgb(50, 100, 200),
            status_bar_bg: Color::LightBlue,
            status_bar_fg: Color::Black,
            status_message_bg: Color::Rgb(0, 100, 0),
            error_message_bg: Color::Rgb(150, 30, 30),
        }
    }

    /// Unknown names fall back to the default theme with a warning.
    pub fn from_name(name: &str) -> Self {
        match name {
            "default" => Self::default_theme(),
            "dark" => Self::dark(),
            "light" => Self::light(),
            other => {
                warn!(theme = other, known = ?THEME_NAMES, "Unknown theme, using default");
                Self::default_theme()
            }
        }
    }

    pub fn is_known(name: &str) -> bool {
        THEME_NAMES.contains(&name)
    }

    pub fn from_config(config: &Config) -> Self {
        Self::from_name(&config.theme)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("light").background, Color::White);
        assert_eq!(Theme::from_name("dark").background, Color::Black);
        assert_eq!(Theme::from_name("solarized").background, Color::Reset);
    }

    #[test]
    fn test_is_known() {
        assert!(Theme::is_known("dark"));
        assert!(Theme::is_known("default"));
        assert!(!Theme::is_known("solarized"));
    }
}
