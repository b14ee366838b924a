use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_card: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,
    pub accent_border: Color,

    // Status colors
    pub status_error: Color,
    pub status_stars: Color,
    pub status_info: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Rain shades, from faint to bright
    pub rain: [Color; 3],
}

impl Default for Theme {
    fn default() -> Self {
        Self::purple_rain()
    }
}

impl Theme {
    /// Black background with purple accents (default)
    pub fn purple_rain() -> Self {
        Self {
            // Backgrounds
            bg_primary: Color::Black,
            bg_secondary: tailwind::ZINC.c950,
            bg_card: tailwind::ZINC.c900,

            // Text
            text_primary: tailwind::ZINC.c100,
            text_secondary: tailwind::ZINC.c400,
            text_muted: tailwind::ZINC.c500,

            // Accents
            accent_primary: tailwind::PURPLE.c300,
            accent_secondary: tailwind::PURPLE.c200,
            accent_border: tailwind::PURPLE.c700,

            // Status
            status_error: tailwind::RED.c400,
            status_stars: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,

            // Selection
            selected_bg: tailwind::PURPLE.c900,
            selected_fg: Color::White,

            rain: [
                tailwind::PURPLE.c900,
                tailwind::PURPLE.c600,
                tailwind::FUCHSIA.c400,
            ],
        }
    }

    // Prebuilt styles for common use cases

    /// Style for full-screen backgrounds
    pub fn background(&self) -> Style {
        Style::default().bg(self.bg_primary)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.accent_border)
    }

    /// Style for the border of the focused card
    pub fn panel_border_focused(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the hero heading
    pub fn hero(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for section headers
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.accent_secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "Enter" in "Enter open")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for star counts
    pub fn stars(&self) -> Style {
        Style::default().fg(self.status_stars)
    }

    /// Style for links
    pub fn link(&self) -> Style {
        Style::default()
            .fg(self.status_info)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Style for the selected card
    pub fn card_selected(&self) -> Style {
        Style::default().fg(self.selected_fg).bg(self.selected_bg)
    }

    /// Style for unselected cards
    pub fn card(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.bg_card)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for secondary text
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for a rain drop of the given intensity (0.0 - 1.0)
    pub fn rain_drop(&self, intensity: f32) -> Style {
        let shade = if intensity < 0.4 {
            self.rain[0]
        } else if intensity < 0.65 {
            self.rain[1]
        } else {
            self.rain[2]
        };
        Style::default().fg(shade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rain_shades_get_brighter() {
        let theme = Theme::default();
        assert_eq!(theme.rain_drop(0.1).fg, Some(theme.rain[0]));
        assert_eq!(theme.rain_drop(0.5).fg, Some(theme.rain[1]));
        assert_eq!(theme.rain_drop(0.9).fg, Some(theme.rain[2]));
    }
}
