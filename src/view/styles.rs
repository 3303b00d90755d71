//! Editor styling configuration.

use ratatui::style::{Color, Modifier, Style};

/// Whether color output is enabled.
///
/// Priority (first match wins): `--no-color` CLI flag, `NO_COLOR`
/// environment variable, default on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Resolve from the CLI flag and environment.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// True when colors should be emitted.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

/// Styles for the editor's drag affordances.
#[derive(Debug, Clone, Copy)]
pub struct EditorStyles {
    /// Group row border.
    pub group: Style,
    /// Column cell body.
    pub column: Style,
    /// The lifted item, drawn dimmed in place.
    pub lifted: Style,
    /// The target under the sensor cursor.
    pub hovered: Style,
    /// The tentative drop preview marker.
    pub preview: Style,
    /// A hovered between-groups gap.
    pub gap: Style,
    /// Status bar line.
    pub status: Style,
}

impl EditorStyles {
    /// Default scheme, desaturated when colors are disabled.
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                group: Style::default().fg(Color::Blue),
                column: Style::default().fg(Color::White),
                lifted: Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
                hovered: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                preview: Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                gap: Style::default().fg(Color::Green),
                status: Style::default().fg(Color::Cyan),
            }
        } else {
            Self {
                group: Style::default(),
                column: Style::default(),
                lifted: Style::default().add_modifier(Modifier::DIM),
                hovered: Style::default().add_modifier(Modifier::BOLD),
                preview: Style::default().add_modifier(Modifier::BOLD),
                gap: Style::default(),
                status: Style::default(),
            }
        }
    }
}

impl Default for EditorStyles {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}
