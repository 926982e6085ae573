//! Light and dark palettes for the climate window.

use eframe::egui::{Color32, CornerRadius, Margin, Stroke, Style, Visuals};

/// Theme mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Mode for the state of the dark theme menu check.
    pub fn from_dark(dark: bool) -> Self {
        if dark { ThemeMode::Dark } else { ThemeMode::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Spacing constants.
#[derive(Debug, Clone, Copy)]
pub struct Spacing {
    /// Small spacing (4px)
    pub sm: f32,
    /// Medium spacing (8px)
    pub md: f32,
    /// Large spacing (16px)
    pub lg: f32,
    /// Padding inside the rooms panel (12px)
    pub panel_padding: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            sm: 4.0,
            md: 8.0,
            lg: 16.0,
            panel_padding: 12.0,
        }
    }
}

/// Corner radii.
#[derive(Debug, Clone, Copy)]
pub struct Rounding {
    /// Combo boxes (4px)
    pub combo: f32,
    /// Buttons (6px)
    pub button: f32,
    /// Rooms panel frame (10px)
    pub panel: f32,
}

impl Default for Rounding {
    fn default() -> Self {
        Self {
            combo: 4.0,
            button: 6.0,
            panel: 10.0,
        }
    }
}

/// Application color theme.
#[derive(Debug, Clone)]
pub struct Theme {
    pub is_dark: bool,
    // Backgrounds
    pub bg_primary: Color32,
    pub bg_menu: Color32,
    pub bg_button: Color32,
    pub bg_button_hover: Color32,
    pub bg_selected: Color32,
    // Text
    pub text_primary: Color32,
    // Borders
    pub border: Color32,
    // Rooms panel frame
    pub rooms_fill: Color32,
    pub rooms_border: Color32,
    pub rooms_border_width: f32,
    // Layout constants
    pub spacing: Spacing,
    pub rounding: Rounding,
}

impl Theme {
    /// Charcoal backgrounds with pink text.
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            bg_primary: Color32::from_rgb(0x1e, 0x1e, 0x1e),
            bg_menu: Color32::from_rgb(0x2a, 0x2a, 0x2a),
            bg_button: Color32::from_rgb(0x33, 0x33, 0x33),
            bg_button_hover: Color32::from_rgb(0x44, 0x44, 0x44),
            bg_selected: Color32::from_rgb(0x33, 0x33, 0x33),
            text_primary: Color32::from_rgb(0xff, 0x69, 0xb4), // hot pink
            border: Color32::from_rgb(0x55, 0x55, 0x55),
            rooms_fill: Color32::from_rgb(0x2a, 0x2a, 0x2a),
            rooms_border: Color32::from_rgb(0x55, 0x55, 0x55),
            rooms_border_width: 2.0,
            spacing: Spacing::default(),
            rounding: Rounding::default(),
        }
    }

    /// Plain desktop grays.
    pub fn light() -> Self {
        Self {
            is_dark: false,
            bg_primary: Color32::from_rgb(0xf5, 0xf5, 0xf5),
            bg_menu: Color32::from_rgb(0xfa, 0xfa, 0xfa),
            bg_button: Color32::from_rgb(0xe1, 0xe1, 0xe1),
            bg_button_hover: Color32::from_rgb(0xe5, 0xf1, 0xfb),
            bg_selected: Color32::from_rgb(0xcc, 0xe4, 0xf7),
            text_primary: Color32::from_rgb(0x11, 0x11, 0x11),
            border: Color32::from_rgb(0xad, 0xad, 0xad),
            rooms_fill: Color32::from_rgb(0xf0, 0xf0, 0xf0),
            rooms_border: Color32::from_rgb(0x80, 0x80, 0x80),
            rooms_border_width: 2.0,
            spacing: Spacing::default(),
            rounding: Rounding::default(),
        }
    }

    /// Get theme for the specified mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Create egui Style from this theme.
    pub fn to_style(&self) -> Style {
        Style {
            visuals: self.to_visuals(),
            spacing: eframe::egui::style::Spacing {
                item_spacing: eframe::egui::vec2(self.spacing.md, self.spacing.md),
                window_margin: Margin::same(self.spacing.lg as i8),
                button_padding: eframe::egui::vec2(8.0, 4.0),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Create egui Visuals from this theme.
    pub fn to_visuals(&self) -> Visuals {
        let mut visuals = if self.is_dark {
            Visuals::dark()
        } else {
            Visuals::light()
        };
        visuals.dark_mode = self.is_dark;

        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_primary;
        visuals.extreme_bg_color = self.bg_button;
        visuals.faint_bg_color = self.bg_menu;
        visuals.override_text_color = Some(self.text_primary);

        visuals.widgets.noninteractive.bg_fill = self.bg_menu;
        visuals.widgets.noninteractive.weak_bg_fill = self.bg_menu;
        visuals.widgets.inactive.bg_fill = self.bg_button;
        visuals.widgets.inactive.weak_bg_fill = self.bg_button;
        visuals.widgets.hovered.bg_fill = self.bg_button_hover;
        visuals.widgets.hovered.weak_bg_fill = self.bg_button_hover;
        visuals.widgets.active.bg_fill = self.bg_button_hover;
        visuals.widgets.active.weak_bg_fill = self.bg_button_hover;
        visuals.widgets.open.bg_fill = self.bg_menu;
        visuals.widgets.open.weak_bg_fill = self.bg_menu;

        visuals.selection.bg_fill = self.bg_selected;
        visuals.selection.stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.open.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, self.border);

        let rounding = CornerRadius::same(self.rounding.button as u8);
        visuals.widgets.inactive.corner_radius = rounding;
        visuals.widgets.hovered.corner_radius = rounding;
        visuals.widgets.active.corner_radius = rounding;
        visuals.widgets.open.corner_radius = CornerRadius::same(self.rounding.combo as u8);

        visuals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_theme_mode_from_dark() {
        assert_eq!(ThemeMode::from_dark(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_dark(false), ThemeMode::Light);
        assert!(ThemeMode::from_dark(true).is_dark());
        assert!(!ThemeMode::from_dark(false).is_dark());
    }

    #[test]
    fn test_dark_palette() {
        let theme = Theme::dark();
        assert_eq!(theme.bg_primary, Color32::from_rgb(30, 30, 30));
        assert_eq!(theme.text_primary, Color32::from_rgb(255, 105, 180));
        assert_eq!(theme.bg_menu, Color32::from_rgb(42, 42, 42));
        assert_eq!(theme.bg_button, Color32::from_rgb(51, 51, 51));
        assert_eq!(theme.bg_button_hover, Color32::from_rgb(68, 68, 68));
    }

    #[test]
    fn test_light_rooms_panel() {
        let theme = Theme::light();
        assert_eq!(theme.rooms_fill, Color32::from_rgb(240, 240, 240));
        assert_eq!(theme.rooms_border, Color32::from_rgb(128, 128, 128));
        assert_eq!(theme.rounding.panel, 10.0);
    }

    #[test]
    fn test_for_mode() {
        assert!(Theme::for_mode(ThemeMode::Dark).is_dark);
        assert!(!Theme::for_mode(ThemeMode::Light).is_dark);
    }

    #[test]
    fn test_visuals_follow_theme() {
        let theme = Theme::dark();
        let visuals = theme.to_visuals();
        assert!(visuals.dark_mode);
        assert_eq!(visuals.panel_fill, theme.bg_primary);
        assert_eq!(visuals.override_text_color, Some(theme.text_primary));

        let style = Theme::light().to_style();
        assert!(!style.visuals.dark_mode);
    }
}
