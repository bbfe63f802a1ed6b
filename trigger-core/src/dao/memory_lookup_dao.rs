use dashmap::DashMap;
use trigger_common::prelude::*;

use super::LookupDao;

type Row = HashMap<InlineStr, Object>;

/// `LookupDao` over tables held in memory. Rows are kept in insertion order.
#[derive(Default)]
pub struct MemoryLookupDao {
    tables: DashMap<InlineStr, Vec<Row>>,
}

impl MemoryLookupDao {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads tables shaped as `{"groups": [{"id": 7, "identifier": "G7"}], ...}`.
    pub fn from_json(value: &serde_json::Value) -> TriggerResult<Self> {
        let dao = Self::new();
        let tables = value
            .as_object()
            .ok_or(ErrorCode::IllegalArgument("tables must be a json object"))?;
        for (table, rows) in tables {
            // an empty table still exists
            dao.create_table(table);
            for row in rows
                .as_array()
                .ok_or_else(|| ErrorCode::IllegalArgument(format!("rows of {} invalid", table)))?
            {
                let row = row.as_object().ok_or_else(|| {
                    ErrorCode::IllegalArgument(format!("row of {} invalid: {}", table, row))
                })?;
                dao.insert_row(table, Object::convert_jsonmap_to_hashmap(row));
            }
        }
        Ok(dao)
    }

    pub fn create_table(&self, table: &str) {
        self.tables.entry(table.into()).or_default();
    }

    pub fn insert_row(&self, table: &str, row: Row) {
        self.tables.entry(table.into()).or_default().push(row);
    }

    pub fn row_count(&self, table: &str) -> usize {
        self.tables.get(table).map(|x| x.len()).unwrap_or(0)
    }
}

impl LookupDao for MemoryLookupDao {
    fn get_field(
        &self,
        table: &str,
        key_column: &str,
        key: i64,
        value_column: &str,
    ) -> TriggerResult<Option<Object>> {
        let rows = self
            .tables
            .get(table)
            .ok_or_else(|| ErrorCode::LookupFailed(format!("table not found: {}", table)))?;

        let row = rows.iter().find(|row| {
            row.get(key_column)
                .and_then(|x| x.as_i64().ok())
                .map(|x| x == key)
                .unwrap_or(false)
        });

        match row {
            None => Ok(None),
            Some(row) => row.get(value_column).cloned().map(Some).ok_or_else(|| {
                ErrorCode::LookupFailed(format!("column not found: {}.{}", table, value_column))
            }),
        }
    }
}
