use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub accent: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,
    pub heading: ColorSpec,
    pub link: ColorSpec,
    pub code: ColorSpec,

    // Table colors
    pub table_header: ColorSpec,
    pub table_rule: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub button: ColorSpec,
    pub warning: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(122, 162, 247),      // Blue
            accent: ColorSpec::rgb(187, 154, 247),       // Magenta
            text: ColorSpec::rgb(192, 202, 245),         // Foreground
            text_muted: ColorSpec::rgb(86, 95, 137),     // Comment
            heading: ColorSpec::rgb(125, 207, 255),      // Cyan
            link: ColorSpec::rgb(42, 195, 222),          // Teal
            code: ColorSpec::rgb(158, 206, 106),         // Green
            table_header: ColorSpec::rgb(224, 175, 104), // Yellow
            table_rule: ColorSpec::rgb(65, 72, 104),     // Selection
            border_active: ColorSpec::rgb(122, 162, 247),
            border_normal: ColorSpec::rgb(65, 72, 104),
            button: ColorSpec::rgb(255, 158, 100), // Orange
            warning: ColorSpec::rgb(247, 118, 142), // Red
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec::rgb(144, 122, 169),      // Iris
            accent: ColorSpec::rgb(215, 130, 126),       // Rose
            text: ColorSpec::rgb(87, 82, 121),           // Text
            text_muted: ColorSpec::rgb(152, 147, 165),   // Muted
            heading: ColorSpec::rgb(40, 105, 131),       // Pine
            link: ColorSpec::rgb(86, 148, 159),          // Foam
            code: ColorSpec::rgb(40, 105, 131),          // Pine
            table_header: ColorSpec::rgb(234, 157, 52),  // Gold
            table_rule: ColorSpec::rgb(223, 218, 217),   // Highlight med
            border_active: ColorSpec::rgb(144, 122, 169),
            border_normal: ColorSpec::rgb(206, 202, 205),
            button: ColorSpec::rgb(180, 99, 122), // Love
            warning: ColorSpec::rgb(180, 99, 122),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec::rgb(189, 147, 249),      // Purple
            accent: ColorSpec::rgb(255, 121, 198),       // Pink
            text: ColorSpec::rgb(248, 248, 242),         // Foreground
            text_muted: ColorSpec::rgb(98, 114, 164),    // Comment
            heading: ColorSpec::rgb(139, 233, 253),      // Cyan
            link: ColorSpec::rgb(139, 233, 253),         // Cyan
            code: ColorSpec::rgb(80, 250, 123),          // Green
            table_header: ColorSpec::rgb(241, 250, 140), // Yellow
            table_rule: ColorSpec::rgb(68, 71, 90),      // Current line
            border_active: ColorSpec::rgb(189, 147, 249),
            border_normal: ColorSpec::rgb(68, 71, 90),
            button: ColorSpec::rgb(255, 184, 108), // Orange
            warning: ColorSpec::rgb(255, 85, 85),  // Red
        }
    }

    /// Get theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "dracula" => Some(Self::dracula()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "rose-pine-dawn".to_string(),
            "dracula".to_string(),
        ]
    }

    /// Return the theme after this one, wrapping around.
    ///
    pub fn next(&self) -> Self {
        let names = Self::available_themes();
        let index = names.iter().position(|n| *n == self.name).unwrap_or(0);
        let next = &names[(index + 1) % names.len()];
        Self::from_name(next).unwrap_or_default()
    }
}
