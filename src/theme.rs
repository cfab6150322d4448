//! Theme - colors, borders, and ANSI style fragments for widgets

/// Truecolor RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub const fn white() -> Self {
        Color::rgb(0xee, 0xee, 0xee)
    }

    pub const fn black() -> Self {
        Color::rgb(0x10, 0x10, 0x10)
    }

    pub const fn light_gray() -> Self {
        Color::rgb(0xbb, 0xbb, 0xbb)
    }

    pub const fn dark_gray() -> Self {
        Color::rgb(0x55, 0x55, 0x55)
    }

    pub const fn blue() -> Self {
        Color::rgb(0x4a, 0x55, 0xa4)
    }

    pub const fn red() -> Self {
        Color::rgb(0xcc, 0x22, 0x33)
    }

    pub const fn green() -> Self {
        Color::rgb(0x2f, 0x9e, 0x44)
    }

    /// ANSI foreground fragment
    pub fn fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// ANSI background fragment
    pub fn bg(&self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// Border drawing style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    None,
    #[default]
    Single,
    Double,
    Rounded,
    Ascii,
}

impl BorderStyle {
    /// Character set for the style, or None when borderless
    pub fn chars(&self) -> Option<BorderChars> {
        match self {
            BorderStyle::None => None,
            BorderStyle::Single => Some(BorderChars {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
            }),
            BorderStyle::Double => Some(BorderChars {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
            }),
            BorderStyle::Rounded => Some(BorderChars {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
            }),
            BorderStyle::Ascii => Some(BorderChars {
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                horizontal: '-',
                vertical: '|',
            }),
        }
    }
}

/// Box-drawing characters for a border style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

/// Widget color palette and style helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub success: Color,
    pub border: BorderStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            text: Color::white(),
            muted: Color::dark_gray(),
            accent: Color::blue(),
            error: Color::red(),
            success: Color::green(),
            border: BorderStyle::Single,
        }
    }
}

impl Theme {
    pub fn text_style(&self) -> String {
        self.text.fg()
    }

    pub fn muted_style(&self) -> String {
        self.muted.fg()
    }

    pub fn accent_style(&self) -> String {
        self.accent.fg()
    }

    pub fn error_style(&self) -> String {
        self.error.fg()
    }

    pub fn success_style(&self) -> String {
        self.success.fg()
    }

    /// Reverse video, used for the highlighted overlay item
    pub fn highlight_style(&self) -> String {
        "\x1b[7m".to_string()
    }

    /// Underline, used for the element holding keyboard focus
    pub fn focus_style(&self) -> String {
        "\x1b[4m".to_string()
    }

    /// Dim, used for disabled controls and placeholders
    pub fn disabled_style(&self) -> String {
        "\x1b[2m".to_string()
    }

    /// Border characters for the themed border style
    pub fn border_chars(&self) -> Option<BorderChars> {
        self.border.chars()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_fragments() {
        let c = Color::rgb(1, 2, 3);
        assert_eq!(c.fg(), "\x1b[38;2;1;2;3m");
        assert_eq!(c.bg(), "\x1b[48;2;1;2;3m");
    }

    #[test]
    fn test_border_chars() {
        assert!(BorderStyle::None.chars().is_none());

        let single = BorderStyle::Single.chars().unwrap();
        assert_eq!(single.top_left, '┌');

        let rounded = BorderStyle::Rounded.chars().unwrap();
        assert_eq!(rounded.top_left, '╭');
    }

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.border, BorderStyle::Single);
        assert!(theme.border_chars().is_some());
    }
}
