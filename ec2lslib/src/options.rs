//! Rendering options.
//!
//! Everything that shapes output is carried in a [`RenderConfig`] built once
//! by the caller and passed to [`render`](crate::output::render).

use std::fmt;
use std::str::FromStr;

use comfy_table::Color;

use crate::resolve::MissPolicy;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    /// Space-joined values, one record per line
    Plain,
    /// Aligned columns without borders or header
    Simple,
    /// Bordered table with colored header and rows
    Color,
    /// Bordered table with header
    #[default]
    Table,
}

impl RenderFormat {
    pub const ALL: [RenderFormat; 4] = [
        RenderFormat::Plain,
        RenderFormat::Simple,
        RenderFormat::Color,
        RenderFormat::Table,
    ];

    /// Lenient lookup: unknown names select the default table format.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RenderFormat::Plain => "plain",
            RenderFormat::Simple => "simple",
            RenderFormat::Color => "color",
            RenderFormat::Table => "table",
        }
    }

    /// Whether this format shows the header unless told otherwise.
    pub fn shows_header(self) -> bool {
        matches!(self, RenderFormat::Table | RenderFormat::Color)
    }
}

impl FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(RenderFormat::Plain),
            "simple" => Ok(RenderFormat::Simple),
            "color" | "colour" => Ok(RenderFormat::Color),
            "table" => Ok(RenderFormat::Table),
            _ => Err(format!(
                "Unknown output format: {}. Use: plain, simple, table, color",
                s
            )),
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellColors {
    pub fg: Color,
    pub bg: Color,
}

impl CellColors {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }
}

/// Colors used by the `color` format.
///
/// Body rows alternate between `row` and `alternate_row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub header: CellColors,
    pub row: CellColors,
    pub alternate_row: CellColors,
}

impl Default for ColorScheme {
    /// Black text on a blue header, white/grey body rows.
    fn default() -> Self {
        Self {
            header: CellColors::new(Color::Black, Color::Blue),
            row: CellColors::new(Color::Black, Color::White),
            alternate_row: CellColors::new(Color::Black, Color::Grey),
        }
    }
}

/// Complete rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub format: RenderFormat,
    pub show_header: bool,
    pub misses: MissPolicy,
    pub colors: ColorScheme,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(RenderFormat::default())
    }
}

impl RenderConfig {
    /// Configuration with the format's own header default.
    pub fn new(format: RenderFormat) -> Self {
        Self {
            format,
            show_header: format.shows_header(),
            misses: MissPolicy::default(),
            colors: ColorScheme::default(),
        }
    }

    /// Force the header on or off.
    pub fn show_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    pub fn misses(mut self, policy: MissPolicy) -> Self {
        self.misses = policy;
        self
    }

    pub fn colors(mut self, colors: ColorScheme) -> Self {
        self.colors = colors;
        self
    }
}
