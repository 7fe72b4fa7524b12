use owo_colors::Style;

/// Styles used by the terminal renderer
#[derive(Debug, Clone)]
pub struct Palette {
    /// Banners and static report text
    pub alert: Style,
    /// File names, rule ids and line numbers
    pub highlight: Style,
    /// The clean-report message
    pub success: Style,
}

impl Palette {
    pub fn colored() -> Self {
        Palette {
            alert: Style::new().bold().bright_red(),
            highlight: Style::new().bold().bright_yellow(),
            success: Style::new().bold().bright_green(),
        }
    }

    /// No escape codes at all
    pub fn plain() -> Self {
        Palette {
            alert: Style::new(),
            highlight: Style::new(),
            success: Style::new(),
        }
    }

    pub fn new(color: bool) -> Self {
        if color {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}
