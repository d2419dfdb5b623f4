use serde::{Deserialize, Serialize};

/// Color and sizing tokens consumed read-only by the dialog at render time.
/// Any field missing from a config file falls back to its default.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct Theme {
    pub bg_color: String,
    pub panel_color: String,
    pub scrim_color: String,
    pub divider_color: String,
    pub divider_width: u32,
    pub main_color: String,
    pub main_text_color: String,
    pub sub_text_color: String,
    pub placeholder_color: String,
    pub title_font_size: u32,
    pub body_font_size: u32,
    pub screen_width: u32,
    pub corner_radius: u32,
    pub panel_margin: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg_color: "#f5f5f5".to_string(),
            panel_color: "#ffffff".to_string(),
            scrim_color: "rgba(0, 0, 0, 0.5)".to_string(),
            divider_color: "#e5e5e5".to_string(),
            divider_width: 1,
            main_color: "#1e88e5".to_string(),
            main_text_color: "#333333".to_string(),
            sub_text_color: "#666666".to_string(),
            placeholder_color: "#999999".to_string(),
            title_font_size: 16,
            body_font_size: 14,
            screen_width: 375,
            corner_radius: 10,
            panel_margin: 30,
        }
    }
}

impl Theme {
    const TITLE_PADDING: u32 = 20;
    const CONTENT_MARGIN: u32 = 30;
    const INPUT_HEIGHT: u32 = 40;
    const INPUT_PADDING_LEFT: u32 = 10;
    const BUTTON_PADDING: u32 = 17;

    pub fn panel_width(&self) -> u32 {
        self.screen_width.saturating_sub(self.panel_margin * 2)
    }

    pub fn input_width(&self) -> u32 {
        self.screen_width
            .saturating_sub((self.panel_margin + Self::CONTENT_MARGIN) * 2)
    }

    pub fn button_width(&self) -> u32 {
        (self.screen_width / 2).saturating_sub(self.panel_margin)
    }

    pub fn scrim_style(&self) -> String {
        format!("background-color: {};", self.scrim_color)
    }

    pub fn panel_style(&self) -> String {
        format!(
            "background-color: {}; border-radius: {}px; width: {}px;",
            self.panel_color,
            self.corner_radius,
            self.panel_width()
        )
    }

    pub fn title_style(&self) -> String {
        format!(
            "padding-top: {}px; font-size: {}px; color: {};",
            Self::TITLE_PADDING,
            self.title_font_size,
            self.main_text_color
        )
    }

    pub fn text_style(&self) -> String {
        format!(
            "margin: {}px; font-size: {}px; color: {};",
            Self::CONTENT_MARGIN,
            self.body_font_size,
            self.sub_text_color
        )
    }

    pub fn input_style(&self) -> String {
        format!(
            "width: {}px; height: {}px; margin: {}px; padding: 0 0 0 {}px; font-size: {}px; \
             color: {}; background-color: {}; border-radius: {}px; \
             --placeholder-color: {};",
            self.input_width(),
            Self::INPUT_HEIGHT,
            Self::CONTENT_MARGIN,
            Self::INPUT_PADDING_LEFT,
            self.body_font_size,
            self.sub_text_color,
            self.bg_color,
            self.corner_radius,
            self.placeholder_color
        )
    }

    pub fn actions_style(&self) -> String {
        format!(
            "width: {}px; border-top: {}px solid {};",
            self.panel_width(),
            self.divider_width,
            self.divider_color
        )
    }

    pub fn negative_button_style(&self) -> String {
        format!(
            "{} color: {}; border-right: {}px solid {};",
            self.button_base_style(),
            self.main_text_color,
            self.divider_width,
            self.divider_color
        )
    }

    pub fn positive_button_style(&self) -> String {
        format!("{} color: {};", self.button_base_style(), self.main_color)
    }

    fn button_base_style(&self) -> String {
        format!(
            "width: {}px; font-size: {}px; padding: {}px 0;",
            self.button_width(),
            self.title_font_size,
            Self::BUTTON_PADDING
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_from_screen_width() {
        let theme = Theme::default();
        assert_eq!(theme.panel_width(), 315);
        assert_eq!(theme.input_width(), 255);
        assert_eq!(theme.button_width(), 157);
    }

    #[test]
    fn test_geometry_saturates_on_narrow_screens() {
        let theme = Theme {
            screen_width: 40,
            ..Theme::default()
        };
        assert_eq!(theme.panel_width(), 0);
        assert_eq!(theme.input_width(), 0);
        assert_eq!(theme.button_width(), 0);
    }

    #[test]
    fn test_styles_use_tokens() {
        let theme = Theme {
            main_color: "#ff0000".to_string(),
            ..Theme::default()
        };
        assert!(theme.positive_button_style().contains("color: #ff0000;"));
        assert!(!theme.negative_button_style().contains("#ff0000"));
        assert!(theme.scrim_style().contains("rgba(0, 0, 0, 0.5)"));
        assert!(theme.input_style().contains("--placeholder-color: #999999;"));
    }

    #[test]
    fn test_partial_theme_deserialize() {
        let theme: Theme = serde_json::from_str(r#"{ "screen_width": 414 }"#).unwrap();
        assert_eq!(theme.screen_width, 414);
        assert_eq!(theme.placeholder_color, "#999999");
    }
}
