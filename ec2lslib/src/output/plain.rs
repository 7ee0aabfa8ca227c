//! Plain output for scripts: no alignment, no borders.

use std::io::Write;

use super::{headers, Strategy};
use crate::field::FieldSpec;
use crate::options::RenderConfig;
use crate::project::Row;
use crate::Result;

/// Values joined by single spaces, one row per line.
///
/// Empty cells still take their slot, so `a  c` has three values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Strategy for Plain {
    fn render(
        &self,
        out: &mut dyn Write,
        fields: &[FieldSpec],
        rows: &[Row],
        config: &RenderConfig,
    ) -> Result<()> {
        if config.show_header {
            writeln!(out, "{}", headers(fields).join(" "))?;
        }
        for row in rows {
            writeln!(out, "{}", row.texts(config.misses).join(" "))?;
        }
        Ok(())
    }
}
