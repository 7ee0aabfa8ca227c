//! Output rendering: rows → text.
//!
//! Four strategies share one contract: given the fields (for headers), the
//! projected rows and a [`RenderConfig`], write text to a sink. They never
//! reorder rows or columns. Misses are collapsed to cell text here, using the
//! config's [`MissPolicy`](crate::resolve::MissPolicy).
//!
//! - **plain**: values joined by single spaces, one line per row
//! - **table**: bordered table with a header
//! - **simple**: the table's column layout with all borders removed
//! - **color**: the bordered table with colored header and rows
//!
//! ## Example
//!
//! ```rust
//! use ec2lslib::output::render;
//! use ec2lslib::{parse_fields, project, RenderConfig, RenderFormat};
//! use serde_json::json;
//!
//! let fields = parse_fields(&["id", "state"]);
//! let records = vec![json!({"id": "i-1", "state": "running"})];
//! let rows = project(&fields, &records);
//!
//! let mut out = Vec::new();
//! render(&mut out, &fields, &rows, &RenderConfig::new(RenderFormat::Plain)).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "i-1 running\n");
//! ```

pub mod plain;
pub mod table;

use std::io::Write;

use crate::field::FieldSpec;
use crate::options::{RenderConfig, RenderFormat};
use crate::project::Row;
use crate::Result;

pub use plain::Plain;
pub use table::{Grid, GridLook};

/// A rendering strategy.
pub trait Strategy {
    fn render(
        &self,
        out: &mut dyn Write,
        fields: &[FieldSpec],
        rows: &[Row],
        config: &RenderConfig,
    ) -> Result<()>;
}

impl RenderFormat {
    /// Strategy implementing this format.
    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            RenderFormat::Plain => Box::new(Plain),
            RenderFormat::Simple => Box::new(Grid::new(GridLook::Borderless)),
            RenderFormat::Color => Box::new(Grid::new(GridLook::Colored)),
            RenderFormat::Table => Box::new(Grid::new(GridLook::Bordered)),
        }
    }
}

/// Render `rows` in the configured format.
pub fn render<W: Write>(
    out: &mut W,
    fields: &[FieldSpec],
    rows: &[Row],
    config: &RenderConfig,
) -> Result<()> {
    config.format.strategy().render(out, fields, rows, config)?;
    out.flush()?;
    Ok(())
}

/// Header texts for `fields`.
pub(crate) fn headers(fields: &[FieldSpec]) -> Vec<&str> {
    fields.iter().map(FieldSpec::display_name).collect()
}
