use std::fmt::Display;

use crossterm::style::{
    Color,
    ContentStyle,
    StyledContent,
};

use crate::config::LogColorConfig;
use crate::severity::Severity;

/// Console display attribute. Only a background color is ever set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    background: Option<Color>,
}

impl Style {
    pub const fn neutral() -> Self {
        Self { background: None }
    }

    pub const fn on(background: Color) -> Self {
        Self {
            background: Some(background),
        }
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn is_neutral(&self) -> bool {
        self.background.is_none()
    }

    pub fn paint<D: Display>(&self, content: D) -> StyledContent<D> {
        let mut style = ContentStyle::new();
        style.background_color = self.background;
        style.apply(content)
    }
}

/// Maps a color name from the config file to a style. Unknown or empty
/// names resolve to the neutral style. Matching ignores ASCII case and
/// surrounding whitespace, so `" Blue "` resolves like `"blue"`.
pub fn resolve(color_name: &str) -> Style {
    match color_name.trim().to_ascii_lowercase().as_str() {
        "blue" => Style::on(Color::DarkBlue),
        "yellow" => Style::on(Color::DarkYellow),
        "red" => Style::on(Color::DarkRed),
        "magenta" => Style::on(Color::Magenta),
        "cyan" => Style::on(Color::Cyan),
        _ => Style::neutral(),
    }
}

/// One style per severity, indexed by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    styles: [Style; 5],
}

impl Palette {
    pub fn from_config(colors: &LogColorConfig) -> Self {
        let mut styles = [Style::neutral(); 5];
        for severity in Severity::ALL {
            styles[severity.rank()] = resolve(colors.color_for(severity));
        }
        Self { styles }
    }

    pub fn style(&self, severity: Severity) -> Style {
        self.styles[severity.rank()]
    }
}
