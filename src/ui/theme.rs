use ratatui::style::Color;

use crate::calendar::{Border, Fill};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub title: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub today: Color,
    pub weekday_header: Color,
    pub inactive_day: Color,
    pub disabled_day: Color,
    pub status_bar: Color,
    pub help_title: Color,
    pub help_section: Color,
    pub command_mode: Color,
    pub error: Color,
    pub success: Color,
    pub fill_success: Color,
    pub fill_attention: Color,
    pub border_green: Color,
    pub border_orange: Color,
    pub border_red: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            title: Color::Cyan,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            today: Color::Green,
            weekday_header: Color::Yellow,
            inactive_day: Color::DarkGray,
            disabled_day: Color::Red,
            status_bar: Color::White,
            help_title: Color::Cyan,
            help_section: Color::Yellow,
            command_mode: Color::White,
            error: Color::Red,
            success: Color::Green,
            fill_success: Color::Rgb(46, 204, 113),
            fill_attention: Color::Rgb(231, 76, 60),
            border_green: Color::Green,
            border_orange: Color::Rgb(255, 165, 0),
            border_red: Color::Red,
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            title: Color::Rgb(251, 184, 108),
            selected_bg: Color::Rgb(60, 56, 54),
            selected_fg: Color::Rgb(235, 219, 178),
            today: Color::Rgb(184, 187, 38),
            weekday_header: Color::Rgb(254, 128, 25),
            inactive_day: Color::Rgb(146, 131, 116),
            disabled_day: Color::Rgb(204, 36, 29),
            status_bar: Color::Rgb(235, 219, 178),
            help_title: Color::Rgb(251, 184, 108),
            help_section: Color::Rgb(254, 128, 25),
            command_mode: Color::Rgb(235, 219, 178),
            error: Color::Rgb(251, 73, 52),
            success: Color::Rgb(184, 187, 38),
            fill_success: Color::Rgb(152, 151, 26),
            fill_attention: Color::Rgb(204, 36, 29),
            border_green: Color::Rgb(184, 187, 38),
            border_orange: Color::Rgb(254, 128, 25),
            border_red: Color::Rgb(251, 73, 52),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(136, 192, 208),
            selected_bg: Color::Rgb(59, 66, 82),
            selected_fg: Color::Rgb(236, 239, 244),
            today: Color::Rgb(163, 190, 140),
            weekday_header: Color::Rgb(235, 203, 139),
            inactive_day: Color::Rgb(76, 86, 106),
            disabled_day: Color::Rgb(191, 97, 106),
            status_bar: Color::Rgb(216, 222, 233),
            help_title: Color::Rgb(136, 192, 208),
            help_section: Color::Rgb(235, 203, 139),
            command_mode: Color::Rgb(216, 222, 233),
            error: Color::Rgb(191, 97, 106),
            success: Color::Rgb(163, 190, 140),
            fill_success: Color::Rgb(163, 190, 140),
            fill_attention: Color::Rgb(191, 97, 106),
            border_green: Color::Rgb(163, 190, 140),
            border_orange: Color::Rgb(208, 135, 112),
            border_red: Color::Rgb(191, 97, 106),
        }
    }

    pub fn fill(&self, fill: Fill) -> Color {
        match fill {
            Fill::Success => self.fill_success,
            Fill::Attention => self.fill_attention,
        }
    }

    pub fn border(&self, border: Border) -> Color {
        match border {
            Border::Green => self.border_green,
            Border::Orange => self.border_orange,
            Border::Red => self.border_red,
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            _ => Self::default_theme(),
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "gruvbox", "nord"]
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
    fn unknown_name_falls_back_to_default() {
        assert_eq!(Theme::get_by_name("neon").name, "default");
    }

    #[test]
    fn every_listed_theme_resolves_to_itself() {
        for name in Theme::available_themes() {
            assert_eq!(Theme::get_by_name(name).name, name);
        }
    }

    #[test]
    fn default_fills_match_palette_hex() {
        let theme = Theme::default_theme();
        assert_eq!(theme.fill(Fill::Success), Color::Rgb(0x2e, 0xcc, 0x71));
        assert_eq!(theme.fill(Fill::Attention), Color::Rgb(0xe7, 0x4c, 0x3c));
    }
}
