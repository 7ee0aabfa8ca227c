//! Row projection: records × fields → rows.
//!
//! Every row has one cell per field, in field order, and rows come out in
//! record order. A miss in one cell never affects any other cell.

use tracing::debug;

use crate::field::FieldSpec;
use crate::resolve::{resolve, MissPolicy, Resolution, Resolvable};

/// Resolved cells for one record, aligned with the field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Resolution>,
}

impl Row {
    pub fn new(cells: Vec<Resolution>) -> Self {
        Self { cells }
    }

    /// Cells as resolved, misses included.
    pub fn cells(&self) -> &[Resolution] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell text under `policy`.
    pub fn texts(&self, policy: MissPolicy) -> Vec<String> {
        self.cells.iter().map(|cell| policy.cell(cell)).collect()
    }
}

/// Resolve every field against one record.
pub fn project_record<R: Resolvable + ?Sized>(fields: &[FieldSpec], record: &R) -> Row {
    Row::new(
        fields
            .iter()
            .map(|field| resolve(field.expression(), record))
            .collect(),
    )
}

/// Resolve every field against every record.
pub fn project<R: Resolvable>(fields: &[FieldSpec], records: &[R]) -> Vec<Row> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let row = project_record(fields, record);
            for (field, cell) in fields.iter().zip(row.cells()) {
                if let Err(miss) = cell {
                    debug!(record = index, field = field.display_name(), %miss, "unresolved field");
                }
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::parse_fields;
    use crate::resolve::ResolutionMiss;
    use serde_json::{json, Value};

    fn records() -> Vec<Value> {
        vec![
            json!({"id": "i-1", "tags": {"Name": "web"}, "state": "running"}),
            json!({"id": "i-2", "tags": {}, "state": "stopped"}),
            json!({"id": "i-3", "state": "pending", "nested": {"path": "x"}}),
        ]
    }

    #[test]
    fn test_rows_match_field_count_and_order() {
        let fields = parse_fields(&["state", "id", "tags.Name", "nested.path"]);
        let rows = project(&fields, &records());

        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert_eq!(row.len(), fields.len());
        }
        assert_eq!(
            rows[0].texts(MissPolicy::Blank),
            vec!["running", "i-1", "web", ""]
        );
        assert_eq!(
            rows[2].texts(MissPolicy::Blank),
            vec!["pending", "i-3", "", "x"]
        );
    }

    #[test]
    fn test_row_order_follows_records() {
        let fields = parse_fields(&["id"]);
        let ids: Vec<String> = project(&fields, &records())
            .iter()
            .map(|row| row.texts(MissPolicy::Blank).remove(0))
            .collect();
        assert_eq!(ids, vec!["i-1", "i-2", "i-3"]);
    }

    #[test]
    fn test_misses_stay_local() {
        let fields = parse_fields(&["nested.missing.path", "Bad=a[", "id"]);
        let rows = project(&fields, &records());

        for (row, id) in rows.iter().zip(["i-1", "i-2", "i-3"]) {
            assert!(matches!(row.cells()[0], Err(ResolutionMiss::Absent { .. })));
            assert!(matches!(
                row.cells()[1],
                Err(ResolutionMiss::InvalidExpression { .. })
            ));
            assert_eq!(row.cells()[2], Ok(id.to_string()));
        }
    }

    #[test]
    fn test_empty_inputs() {
        let fields = parse_fields(&["id"]);
        assert!(project::<Value>(&fields, &[]).is_empty());

        let rows = project(&[], &records());
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(Row::is_empty));
    }
}
