use ratatui::style::Color;
use ratatui::style::Style;

#[derive(Clone, Debug)]
pub struct Theme {
    pub text_primary: Style,
    pub text_muted: Style,
    pub accent: Style,
    pub danger: Style,
    pub success: Style,
    pub warning: Style,
    pub info: Style,
    /// Background for every other body row when striping is enabled.
    pub stripe: Style,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            text_primary: Style::default(),
            text_muted: Style::default().dark_gray(),
            accent: Style::default().cyan(),
            danger: Style::default().red(),
            success: Style::default().green(),
            warning: Style::default().yellow(),
            info: Style::default().blue(),
            stripe: Style::default().bg(Color::Indexed(236)),
        }
    }
}
