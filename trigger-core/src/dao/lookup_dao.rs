use trigger_common::prelude::*;

/// Read-only access to the host's relational tables, used to resolve labels for event objects.
pub trait LookupDao: Send + Sync {
    /// Returns `value_column` of the row in `table` whose `key_column` equals `key`, or `None`
    /// when no row matches.
    fn get_field(
        &self,
        table: &str,
        key_column: &str,
        key: i64,
        value_column: &str,
    ) -> TriggerResult<Option<Object>>;
}
