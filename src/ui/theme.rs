use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub accent: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_companies: ColorSpec,
    pub footer_form: ColorSpec,
    pub footer_table: ColorSpec,
    pub footer_modal: ColorSpec,
    pub footer_confirm: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::rose_pine_dawn()
    }
}

impl Theme {
    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        let purple = ColorSpec::rgb(161, 119, 255);
        let pine = ColorSpec::rgb(59, 247, 209);
        let love = ColorSpec::rgb(235, 111, 146);
        let gold = ColorSpec::rgb(255, 210, 0);
        let foam = ColorSpec::rgb(61, 174, 233);
        let text = ColorSpec::rgb(88, 82, 96);
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: purple,
            accent: ColorSpec::rgb(255, 109, 146),
            text,
            text_muted: ColorSpec::rgb(152, 147, 165),
            success: pine,
            warning: gold,
            error: love,
            border_active: purple,
            border_normal: text,
            highlight_bg: foam,
            highlight_fg: ColorSpec::rgb(0, 0, 0),
            footer_companies: foam,
            footer_form: gold,
            footer_table: purple,
            footer_modal: pine,
            footer_confirm: love,
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        let blue = ColorSpec::rgb(125, 207, 255);
        let green = ColorSpec::rgb(158, 206, 106);
        let red = ColorSpec::rgb(247, 118, 142);
        let yellow = ColorSpec::rgb(255, 202, 40);
        let comment = ColorSpec::rgb(117, 121, 148);
        Theme {
            name: "tokyo-night".to_string(),
            primary: blue,
            accent: ColorSpec::rgb(255, 159, 196),
            text: ColorSpec::rgb(169, 177, 214),
            text_muted: comment,
            success: green,
            warning: yellow,
            error: red,
            border_active: blue,
            border_normal: comment,
            highlight_bg: blue,
            highlight_fg: ColorSpec::rgb(26, 27, 38),
            footer_companies: blue,
            footer_form: yellow,
            footer_table: ColorSpec::rgb(187, 154, 247),
            footer_modal: green,
            footer_confirm: red,
        }
    }

    /// Look up a built-in theme by its configuration name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "tokyo-night" => Some(Self::tokyo_night()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec!["rose-pine-dawn".to_string(), "tokyo-night".to_string()]
    }
}
