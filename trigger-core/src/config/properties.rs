pub struct Properties {
    /// The maximum number of entries a workflow data bag may hold after any step; a pipeline
    /// that grows it beyond this fails.
    max_workflow_data_entries: usize,
}

impl Properties {
    pub fn get_max_workflow_data_entries() -> usize {
        Properties::default().max_workflow_data_entries
    }
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            max_workflow_data_entries: 1024,
        }
    }
}
