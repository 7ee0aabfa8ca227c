//! Column-aligned output drawn with comfy-table.
//!
//! The `table`, `simple` and `color` formats share one layout: columns sized
//! to their widest cell, one line per row. They differ only in what is drawn
//! around the cells.

use std::io::Write;

use comfy_table::presets::{ASCII_FULL_CONDENSED, NOTHING};
use comfy_table::{Cell, ContentArrangement, Table};

use super::{headers, Strategy};
use crate::field::FieldSpec;
use crate::options::{CellColors, RenderConfig};
use crate::project::Row;
use crate::Result;

/// What a [`Grid`] draws around its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLook {
    /// ASCII borders and a header separator
    Bordered,
    /// No borders or separators at all
    Borderless,
    /// Bordered, with the config's color scheme applied to every cell
    Colored,
}

/// Aligned table strategy.
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    look: GridLook,
}

impl Grid {
    pub fn new(look: GridLook) -> Self {
        Self { look }
    }

    fn build(&self, fields: &[FieldSpec], rows: &[Row], config: &RenderConfig) -> Table {
        let mut table = Table::new();
        table
            .load_preset(match self.look {
                GridLook::Borderless => NOTHING,
                GridLook::Bordered | GridLook::Colored => ASCII_FULL_CONDENSED,
            })
            .set_content_arrangement(ContentArrangement::Disabled);

        // Styling is explicit in the config, not inferred from the terminal.
        if self.look == GridLook::Colored {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }

        if config.show_header {
            let header = headers(fields)
                .into_iter()
                .map(|name| self.cell(name, config.colors.header));
            table.set_header(header.collect::<Vec<_>>());
        }

        for (index, row) in rows.iter().enumerate() {
            let colors = if index % 2 == 0 {
                config.colors.row
            } else {
                config.colors.alternate_row
            };
            let cells = row
                .texts(config.misses)
                .into_iter()
                .map(|text| self.cell(text, colors));
            table.add_row(cells.collect::<Vec<_>>());
        }

        table
    }

    fn cell<T: Into<String>>(&self, text: T, colors: CellColors) -> Cell {
        let cell = Cell::new(text.into());
        match self.look {
            GridLook::Colored => cell.fg(colors.fg).bg(colors.bg),
            GridLook::Bordered | GridLook::Borderless => cell,
        }
    }
}

impl Strategy for Grid {
    fn render(
        &self,
        out: &mut dyn Write,
        fields: &[FieldSpec],
        rows: &[Row],
        config: &RenderConfig,
    ) -> Result<()> {
        if rows.is_empty() && !config.show_header {
            return Ok(());
        }
        let table = self.build(fields, rows, config);
        writeln!(out, "{table}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::RenderFormat;
    use crate::project::project;
    use serde_json::json;

    fn scenario() -> (Vec<FieldSpec>, Vec<Row>) {
        let fields = vec![
            FieldSpec::new("InstanceId", "id"),
            FieldSpec::new("Name", "tags.Name"),
            FieldSpec::new("State", "state"),
        ];
        let records = vec![
            json!({"id": "i-1", "tags": {"Name": "web"}, "state": "running"}),
            json!({"id": "i-2", "tags": {}, "state": "stopped"}),
        ];
        let rows = project(&fields, &records);
        (fields, rows)
    }

    fn render_format(format: RenderFormat) -> String {
        let (fields, rows) = scenario();
        let mut out = Vec::new();
        format
            .strategy()
            .render(&mut out, &fields, &rows, &RenderConfig::new(format))
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn words(line: &str) -> Vec<&str> {
        line.split(|c: char| c == '|' || c.is_whitespace())
            .filter(|word| !word.is_empty())
            .collect()
    }

    #[test]
    fn test_table_has_header_and_borders() {
        let output = render_format(RenderFormat::Table);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines.first().unwrap().starts_with('+'));
        assert!(lines.last().unwrap().starts_with('+'));

        let header = lines
            .iter()
            .find(|line| line.contains("InstanceId"))
            .unwrap();
        assert_eq!(words(header), vec!["InstanceId", "Name", "State"]);
        assert!(header.starts_with('|'));

        let body: Vec<Vec<&str>> = lines
            .iter()
            .filter(|line| line.contains("i-"))
            .map(|line| words(line))
            .collect();
        assert_eq!(body, vec![vec!["i-1", "web", "running"], vec!["i-2", "stopped"]]);
    }

    #[test]
    fn test_table_columns_are_aligned() {
        let output = render_format(RenderFormat::Table);
        let widths: Vec<usize> = output.lines().map(|line| line.chars().count()).collect();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]), "{output}");
    }

    #[test]
    fn test_simple_has_no_header_or_borders() {
        let output = render_format(RenderFormat::Simple);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2, "{output}");
        assert!(!output.contains('|'));
        assert!(!output.contains('+'));
        assert!(!output.contains("InstanceId"));
        assert_eq!(words(lines[0]), vec!["i-1", "web", "running"]);
        assert_eq!(words(lines[1]), vec!["i-2", "stopped"]);

        // Empty Name cell keeps the State column in place.
        assert_eq!(lines[0].find("running"), lines[1].find("stopped"));
    }

    #[test]
    fn test_color_applies_styles() {
        let output = render_format(RenderFormat::Color);
        assert!(output.contains("\u{1b}["), "expected ANSI styling");
        assert!(output.contains("InstanceId"));
        assert!(output.contains("running"));
    }

    #[test]
    fn test_uncolored_formats_have_no_escape_codes() {
        for format in [RenderFormat::Table, RenderFormat::Simple] {
            assert!(!render_format(format).contains('\u{1b}'), "{format}");
        }
    }

    #[test]
    fn test_header_only_table() {
        let fields = vec![FieldSpec::new("InstanceId", "id")];
        let mut out = Vec::new();
        Grid::new(GridLook::Bordered)
            .render(&mut out, &fields, &[], &RenderConfig::new(RenderFormat::Table))
            .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("InstanceId"));
        assert!(!output.contains("i-"));
    }
}
